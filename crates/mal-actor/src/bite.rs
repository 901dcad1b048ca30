//! The bite / transmission protocol.
//!
//! When a mosquito bites a human, in order:
//!
//! 1. A vaccinated mosquito vaccinates the human, which also cures it and
//!    clears its immunity.
//! 2. If neither party is infected, nothing else happens.
//! 3. A vaccinated or net-protected human blocks transmission both ways.
//! 4. Infected human → the mosquito is infected with `to_vector`.
//! 5. Infected mosquito → the human is infected with `to_host`.
//!
//! Steps 4 and 5 are independent draws.  Step 5 sees the mosquito's state
//! *after* step 4.

use mal_core::{SimConfig, SimRng, Tick};

use crate::Infection;

/// Per-bite transmission probabilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transmission {
    /// Human → mosquito (`HumanParams::mosquito_infection_chance`).
    pub to_vector: f64,
    /// Mosquito → human (`MosquitoParams::human_infection_chance`).
    pub to_host:   f64,
}

impl Transmission {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            to_vector: config.human.mosquito_infection_chance,
            to_host:   config.mosquito.human_infection_chance,
        }
    }
}

/// What a single bite changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BiteOutcome {
    pub host_vaccinated: bool,
    /// Transmission was stopped by vaccination or a bed net.
    pub blocked:         bool,
    pub vector_infected: bool,
    pub host_infected:   bool,
}

/// Apply one bite of `vector` on `host`.
pub fn transmit(
    host:   &mut Infection,
    vector: &mut Infection,
    now:    Tick,
    rng:    &mut SimRng,
    rates:  Transmission,
) -> BiteOutcome {
    let mut outcome = BiteOutcome::default();

    if vector.vaccinated {
        host.vaccinate();
        outcome.host_vaccinated = true;
    }

    if !vector.infected && !host.infected {
        return outcome;
    }
    if host.vaccinated || host.use_net {
        outcome.blocked = true;
        return outcome;
    }

    if host.infected && rng.chance(rates.to_vector) {
        outcome.vector_infected = vector.infect(now);
    }
    if vector.infected && rng.chance(rates.to_host) {
        outcome.host_infected = host.infect(now);
    }
    outcome
}
