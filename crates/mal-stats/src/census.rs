//! Population aggregates, computed fresh from the registry.

use std::fmt;

use mal_actor::{Actor, Species};
use mal_core::Tick;
use mal_sim::World;

/// Head counts for one species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpeciesCensus {
    pub population: usize,
    pub infected:   usize,
    pub immune:     usize,
    pub vaccinated: usize,
    /// Humans sleeping under a bed net.  Always 0 for mosquitoes.
    pub netted:     usize,
}

impl SpeciesCensus {
    fn count(&mut self, actor: &Actor) {
        let i = &actor.infection;
        self.population += 1;
        self.infected += usize::from(i.infected);
        self.immune += usize::from(i.immune);
        self.vaccinated += usize::from(i.vaccinated);
        self.netted += usize::from(i.use_net);
    }

    /// `part` as a percentage of the population; `None` if there is nobody.
    fn percent(&self, part: usize) -> Option<f64> {
        (self.population > 0).then(|| part as f64 / self.population as f64 * 100.0)
    }

    pub fn infected_pct(&self) -> Option<f64> {
        self.percent(self.infected)
    }

    pub fn immune_pct(&self) -> Option<f64> {
        self.percent(self.immune)
    }

    pub fn vaccinated_pct(&self) -> Option<f64> {
        self.percent(self.vaccinated)
    }
}

/// Aggregates for every species at one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Census {
    pub tick:     Tick,
    pub human:    SpeciesCensus,
    pub mosquito: SpeciesCensus,
}

impl Census {
    /// Count the live actors of `world`.
    pub fn of(world: &World) -> Self {
        let mut census = Census {
            tick:     world.now(),
            human:    SpeciesCensus::default(),
            mosquito: SpeciesCensus::default(),
        };
        for actor in world.registry().iter() {
            match actor.species() {
                Species::Human => census.human.count(actor),
                Species::Mosquito => census.mosquito.count(actor),
            }
        }
        census
    }

    pub fn species(&self, species: Species) -> &SpeciesCensus {
        match species {
            Species::Human => &self.human,
            Species::Mosquito => &self.mosquito,
        }
    }

    /// Value of `stat` for `species`; `None` if the stat is undefined
    /// (an empty population, or immunity of mosquitoes).
    pub fn get(&self, stat: Stat, species: Species) -> Option<f64> {
        let s = self.species(species);
        match stat {
            Stat::Population => Some(s.population as f64),
            Stat::Infected => Some(s.infected as f64),
            Stat::InfectedPct => s.infected_pct(),
            Stat::ImmunePct => match species {
                Species::Human => s.immune_pct(),
                Species::Mosquito => None,
            },
            Stat::VaccinatedPct => s.vaccinated_pct(),
        }
    }

    /// One flat row per species, humans first.
    pub fn rows(&self) -> [CensusRow; 2] {
        Species::ALL.map(|species| CensusRow {
            tick: self.tick.0,
            species,
            population: self.species(species).population,
            infected: self.species(species).infected,
            infected_pct: self.get(Stat::InfectedPct, species),
            immune_pct: self.get(Stat::ImmunePct, species),
            vaccinated_pct: self.get(Stat::VaccinatedPct, species),
        })
    }
}

/// The tracked aggregates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Stat {
    Population,
    Infected,
    InfectedPct,
    /// Hosts only.
    ImmunePct,
    VaccinatedPct,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Population,
        Stat::Infected,
        Stat::InfectedPct,
        Stat::ImmunePct,
        Stat::VaccinatedPct,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stat::Population => "population",
            Stat::Infected => "infected",
            Stat::InfectedPct => "infected_pct",
            Stat::ImmunePct => "immune_pct",
            Stat::VaccinatedPct => "vaccinated_pct",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One species at one tick, as written to `census.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CensusRow {
    pub tick:           u64,
    pub species:        Species,
    pub population:     usize,
    pub infected:       usize,
    pub infected_pct:   Option<f64>,
    /// `None` for mosquitoes.
    pub immune_pct:     Option<f64>,
    pub vaccinated_pct: Option<f64>,
}
