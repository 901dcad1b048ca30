//! World state: grid, registry, clock, random stream and campaign flags.

use tracing::{debug, warn};

use mal_actor::{Actor, ActorError, Infection, Species};
use mal_core::{ActorId, Position, SimClock, SimConfig, SimRng, Tick};
use mal_grid::Grid;

use crate::{ActorRegistry, SimError, SimResult};

/// Public-health campaigns.  They only affect actors spawned while they are
/// active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Campaigns {
    /// Newly spawned mosquitoes carry the vaccine with `vax_rate`.
    pub vaccination: bool,
    /// Newly spawned humans sleep under a bed net with `use_net_chance`.
    pub bed_nets:    bool,
}

/// What a death subscriber is told.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeathNotice {
    pub actor:    ActorId,
    pub species:  Species,
    /// The square the actor died on.
    pub position: Position,
    pub tick:     Tick,
}

/// Read-only view of one live actor, as yielded by [`World::actors`].
#[derive(Copy, Clone, Debug)]
pub struct ActorView<'a> {
    pub position: Position,
    pub actor:    &'a Actor,
}

impl ActorView<'_> {
    #[inline]
    pub fn id(&self) -> ActorId {
        self.actor.id()
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.actor.species()
    }

    #[inline]
    pub fn infection(&self) -> Infection {
        self.actor.infection
    }

    /// `None` for humans.
    #[inline]
    pub fn hunger(&self) -> Option<f64> {
        self.actor.hunger()
    }
}

/// Everything the driver owns apart from the death channel.
///
/// Registry membership and grid membership change together: every method
/// that adds or removes an actor updates both or neither.
#[derive(Debug)]
pub struct World {
    pub(crate) config:         SimConfig,
    pub(crate) grid:           Grid,
    pub(crate) registry:       ActorRegistry,
    pub(crate) clock:          SimClock,
    pub(crate) rng:            SimRng,
    pub(crate) campaigns:      Campaigns,
    /// Set once the first mosquito has been placed.  Switches human
    /// placement from random probing to a full scan, and enables mosquito
    /// clustering.
    pub(crate) vectors_seeded: bool,
}

impl World {
    /// An empty world.  `config` is assumed valid.
    pub fn new(config: SimConfig, rng: SimRng) -> Self {
        Self {
            grid: Grid::from_config(&config.grid),
            config,
            registry: ActorRegistry::new(),
            clock: SimClock::new(),
            rng,
            campaigns: Campaigns::default(),
            vectors_seeded: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    #[inline]
    pub fn campaigns(&self) -> Campaigns {
        self.campaigns
    }

    /// The shared random stream.  Every draw taken here shifts the rest of
    /// the run.
    #[inline]
    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    pub fn actor(&self, id: ActorId) -> SimResult<&Actor> {
        self.registry.get(id).ok_or_else(|| ActorError::Untracked(id).into())
    }

    pub fn actor_mut(&mut self, id: ActorId) -> SimResult<&mut Actor> {
        self.registry.get_mut(id).ok_or_else(|| ActorError::Untracked(id).into())
    }

    pub fn position_of(&self, id: ActorId) -> SimResult<Position> {
        Ok(self.grid.position_of(id)?)
    }

    /// Live actors with their positions, in spawn order.
    pub fn actors(&self) -> impl Iterator<Item = ActorView<'_>> + '_ {
        self.registry.iter().filter_map(|actor| {
            let id = actor.id();
            debug_assert!(self.grid.contains_actor(id), "actor {id} is registered but not on the grid");
            match self.grid.position_of(id) {
                Ok(position) => Some(ActorView { position, actor }),
                Err(e) => {
                    warn!(actor = %id, error = %e, "registered actor missing from the grid");
                    None
                }
            }
        })
    }

    /// Number of live actors of `species`.
    pub fn population(&self, species: Species) -> usize {
        self.registry.count(species)
    }

    /// Whether any live human stands on `pos`.
    pub fn has_human(&self, pos: Position) -> SimResult<bool> {
        Ok(self.grid.square_at(pos)?.iter().any(|&a| self.registry.is_human(a)))
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Put a fully built actor on the grid and in the registry.
    pub(crate) fn place(&mut self, actor: Actor, pos: Position) -> SimResult<ActorId> {
        let id = actor.id();
        self.grid.add(id, pos)?;
        self.registry.insert(actor);
        debug!(actor = %id, %pos, "spawned");
        Ok(id)
    }

    pub(crate) fn spawn_human_at(&mut self, pos: Position, use_net: bool) -> SimResult<ActorId> {
        let id = self.registry.allocate();
        self.place(Actor::human(id, use_net), pos)
    }

    pub(crate) fn spawn_mosquito_at(&mut self, pos: Position, vaccinated: bool) -> SimResult<ActorId> {
        let id = self.registry.allocate();
        self.place(Actor::mosquito(id, self.config.mosquito.fed_hunger, vaccinated), pos)?;
        self.vectors_seeded = true;
        Ok(id)
    }

    /// Take an actor off the grid and out of the registry.
    pub(crate) fn despawn(&mut self, id: ActorId) -> SimResult<(Actor, Position)> {
        if !self.registry.contains(id) {
            return Err(ActorError::Untracked(id).into());
        }
        let pos = self.grid.remove(id)?;
        let actor = self.registry.remove(id).ok_or(ActorError::Untracked(id))?;
        Ok((actor, pos))
    }

    /// The default death subscriber: remove the dead actor and spawn its
    /// replacement.
    ///
    /// A dead human is resettled with `resettle_chance` (placed like a new
    /// human) and otherwise reborn on the square it died on.  A dead
    /// mosquito is always replaced through mosquito placement.
    pub fn handle_death(&mut self, id: ActorId) -> SimResult<()> {
        let (actor, pos) = self.despawn(id)?;
        match actor.species() {
            Species::Human => {
                if self.rng.chance(self.config.human.resettle_chance) {
                    self.new_human()?;
                } else {
                    let use_net = self.net_roll();
                    self.spawn_human_at(pos, use_net)?;
                }
            }
            Species::Mosquito => {
                self.new_mosquito()?;
            }
        }
        Ok(())
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check that registry and grid describe the same set of actors.
    pub fn audit(&self) -> SimResult<()> {
        for actor in self.registry.iter() {
            let id = actor.id();
            let pos = self
                .grid
                .position_of(id)
                .map_err(|_| SimError::Inconsistent(format!("{id} is registered but not on the grid")))?;
            if !self.grid.square_at(pos)?.contains(&id) {
                return Err(SimError::Inconsistent(format!("{id} is recorded at {pos} but not in that square")));
            }
        }
        for (pos, members) in self.grid.squares() {
            for &id in members {
                if !self.registry.contains(id) {
                    return Err(SimError::Inconsistent(format!("{id} at {pos} is not registered")));
                }
                if self.grid.position_of(id)? != pos {
                    return Err(SimError::Inconsistent(format!("{id} appears in more than one square")));
                }
            }
        }
        let (live, tracked, occupancy) = (self.registry.len(), self.grid.tracked(), self.grid.occupancy());
        if live != tracked || live != occupancy {
            return Err(SimError::Inconsistent(format!(
                "{live} registered, {tracked} tracked, {occupancy} on squares"
            )));
        }
        Ok(())
    }
}
