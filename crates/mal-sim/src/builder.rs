//! Fluent builder for constructing a [`Sim`].

use mal_core::{SimConfig, SimRng};

use crate::{Campaigns, Sim, SimResult, World};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size and per-species parameters
/// - [`SimRng`] — the run's random stream, seeded by the caller
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default |
/// |-----------------------------|---------|
/// | `.populate(b)`              | `true`  |
/// | `.vaccination_campaign(b)`  | `false` |
/// | `.bed_net_campaign(b)`      | `false` |
///
/// Campaign flags set here already apply to the initial population.
///
/// # Example
///
/// ```rust
/// use mal_core::{SimConfig, SimRng};
/// use mal_sim::{NoopObserver, SimBuilder};
///
/// let mut config = SimConfig::default();
/// config.grid.width = 20;
/// config.grid.height = 20;
/// config.mosquito.count = 100;
///
/// let mut sim = SimBuilder::new(config, SimRng::new(42)).build()?;
/// sim.run_steps(10, &mut NoopObserver)?;
/// assert_eq!(sim.now().0, 10);
/// # Ok::<(), mal_sim::SimError>(())
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    rng:       SimRng,
    populate:  bool,
    campaigns: Campaigns,
}

impl SimBuilder {
    pub fn new(config: SimConfig, rng: SimRng) -> Self {
        Self {
            config,
            rng,
            populate:  true,
            campaigns: Campaigns::default(),
        }
    }

    /// Whether to seed the initial population.  Turn off to build a
    /// scenario by hand with `Sim::spawn_human` / `Sim::spawn_mosquito`.
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    pub fn vaccination_campaign(mut self, active: bool) -> Self {
        self.campaigns.vaccination = active;
        self
    }

    pub fn bed_net_campaign(mut self, active: bool) -> Self {
        self.campaigns.bed_nets = active;
        self
    }

    /// Validate the configuration, seed the population, and return a
    /// ready-to-step [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut world = World::new(self.config, self.rng);
        world.campaigns = self.campaigns;
        if self.populate {
            world.populate()?;
        }
        Ok(Sim::new(world))
    }
}
