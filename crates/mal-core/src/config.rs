//! Run configuration.
//!
//! All parameters are supplied once, when the simulation is built, and are
//! immutable for the rest of the run.  The only runtime-mutable knobs are the
//! two campaign flags owned by the driver (`mal-sim`).
//!
//! `Default` values are the reference calibration: a 60×60 plane, human
//! density 0.15, 2,250 mosquitoes.  Applications usually start from
//! `SimConfig::default()` and override individual fields, or load the whole
//! struct from TOML/JSON with the `serde` feature (every field is optional
//! and falls back to its default).

use crate::{CoreError, CoreResult};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub grid:     GridConfig,
    pub human:    HumanParams,
    pub mosquito: MosquitoParams,
}

impl SimConfig {
    /// Number of humans seeded into a fresh simulation.
    pub fn initial_humans(&self) -> usize {
        self.human.initial_count(self.grid.square_count())
    }

    /// Reject parameter combinations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if self.grid.width > i32::MAX as u32 || self.grid.height > i32::MAX as u32 {
            return Err(CoreError::Config("grid dimensions exceed i32::MAX".into()));
        }

        let h = &self.human;
        let m = &self.mosquito;
        for (name, p) in [
            ("human.cluster_chance", h.cluster_chance),
            ("human.resettle_chance", h.resettle_chance),
            ("human.mosquito_infection_chance", h.mosquito_infection_chance),
            ("human.pre_infection_prob", h.pre_infection_prob),
            ("human.use_net_chance", h.use_net_chance),
            ("mosquito.cluster_chance", m.cluster_chance),
            ("mosquito.move_chance", m.move_chance),
            ("mosquito.bite_chance", m.bite_chance),
            ("mosquito.human_infection_chance", m.human_infection_chance),
            ("mosquito.simple_death_chance", m.simple_death_chance),
            ("mosquito.reproduction_chance", m.reproduction_chance),
            ("mosquito.vax_rate", m.vax_rate),
        ] {
            check_probability(name, p)?;
        }

        // Additive risk terms may push the per-step chance above 1, which
        // just means "certain"; only negative coefficients are rejected.
        for (name, v) in [
            ("human.age_death_factor", h.age_death_factor),
            ("human.death_base", h.death_base),
            ("human.resistance_base", h.resistance_base),
            ("human.infection_resistance_factor", h.infection_resistance_factor),
            ("human.malaria_death_chance", h.malaria_death_chance),
        ] {
            if !(v >= 0.0) {
                return Err(CoreError::Config(format!("{name} must be >= 0, got {v}")));
            }
        }

        if !(h.density >= 0.0) {
            return Err(CoreError::Config(format!(
                "human.density must be >= 0, got {}",
                h.density
            )));
        }
        if !(m.fed_hunger < 0.0) {
            return Err(CoreError::Config(format!(
                "mosquito.fed_hunger must be negative, got {}",
                m.fed_hunger
            )));
        }

        let squares = self.grid.square_count();
        let humans = self.initial_humans();
        if humans > squares {
            return Err(CoreError::Config(format!(
                "{humans} humans do not fit on a grid of {squares} squares"
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, p: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be in [0, 1], got {p}")))
    }
}

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Dimensions of the bounded simulation plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width:  u32,
    pub height: u32,
}

impl GridConfig {
    #[inline]
    pub fn square_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 60, height: 60 }
    }
}

// ── HumanParams ───────────────────────────────────────────────────────────────

/// Parameters for the host population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HumanParams {
    /// Absolute initial population, used when `populate_absolute` is set.
    pub count: usize,
    /// Fraction of squares holding a human at start, used otherwise.
    pub density: f64,
    pub populate_absolute: bool,

    /// Place new humans next to existing ones.
    pub cluster: bool,
    pub cluster_chance: f64,
    /// Chance that a dead human is replaced elsewhere instead of in place.
    pub resettle_chance: f64,

    /// Chance that biting an infected human infects the mosquito.
    pub mosquito_infection_chance: f64,
    /// Chance that a seeded human (other than the first) starts infected.
    pub pre_infection_prob: f64,

    /// Natural death: `age * age_death_factor + death_base` per step.
    pub age_death_factor: f64,
    pub death_base: f64,

    /// Acquired immunity: `resistance_base + infections * factor` per step.
    pub resistance_base: f64,
    pub infection_resistance_factor: f64,

    /// Malaria death: `malaria_death_chance + infected_ticks / 10_000` per step.
    pub malaria_death_chance: f64,

    /// Chance that a new human uses a bed net while the net campaign runs.
    pub use_net_chance: f64,
}

impl HumanParams {
    /// Initial population on a grid of `squares` squares.
    pub fn initial_count(&self, squares: usize) -> usize {
        if self.populate_absolute {
            self.count
        } else {
            (self.density * squares as f64).round() as usize
        }
    }
}

impl Default for HumanParams {
    fn default() -> Self {
        Self {
            count:                       800,
            density:                     0.15,
            populate_absolute:           false,
            cluster:                     true,
            cluster_chance:              0.8,
            resettle_chance:             0.3,
            mosquito_infection_chance:   0.55,
            pre_infection_prob:          0.1,
            age_death_factor:            0.000_001,
            death_base:                  0.000_01,
            resistance_base:             0.000_01,
            infection_resistance_factor: 0.000_005,
            malaria_death_chance:        0.000_8,
            use_net_chance:              0.1,
        }
    }
}

// ── MosquitoParams ────────────────────────────────────────────────────────────

/// Parameters for the vector population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MosquitoParams {
    pub count: usize,

    /// Place new mosquitoes on the square of an existing one.
    pub cluster: bool,
    pub cluster_chance: f64,

    pub move_chance: f64,
    /// Feeding chance at full hunger; scales linearly with hunger.
    pub bite_chance: f64,

    /// Chance that an infected mosquito infects the human it bites.
    pub human_infection_chance: f64,
    /// Hunger right after a full meal.  Negative; `-fed_hunger` is the hunger
    /// at which the feeding chance reaches `bite_chance`.
    pub fed_hunger: f64,
    pub base_bite_nutrition: f64,

    pub simple_death_chance: f64,

    /// Consulted by the (disabled) reproduction check.
    pub reproduction_chance: f64,

    /// Chance that a new mosquito carries the vaccine while the vaccination
    /// campaign runs.
    pub vax_rate: f64,
}

impl Default for MosquitoParams {
    fn default() -> Self {
        Self {
            count:                  2_250,
            cluster:                true,
            cluster_chance:         0.6,
            move_chance:            0.05,
            bite_chance:            0.35,
            human_infection_chance: 0.68,
            fed_hunger:             -10.0,
            base_bite_nutrition:    5.0,
            simple_death_chance:    0.01,
            reproduction_chance:    0.015,
            vax_rate:               0.05,
        }
    }
}
