//! The `Sim` driver and its step loop.

use tracing::debug;

use mal_actor::{Actor, Habitat, step_actor};
use mal_core::{ActorId, Event, HandlerId, Position, SimConfig, SimRng, Tick};

use crate::{ActorView, Campaigns, DeathNotice, SimError, SimObserver, SimResult, World};

/// The death channel.  Handlers get the world mutably.
pub type DeathEvent = Event<World, DeathNotice, SimError>;

/// What one call to [`Sim::step`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub tick:   Tick,
    /// Actors that took their turn.
    pub acted:  usize,
    /// Deaths announced this step, in the order they happened.
    pub deaths: Vec<DeathNotice>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// `Sim` owns the [`World`] and the `on_death` channel.  Its default death
/// handler, hooked at build time, removes the dead actor and spawns its
/// replacement.  Handlers added with [`subscribe_death`](Self::subscribe_death)
/// run after it, so they see the world with the replacement already placed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) world:    World,
    pub(crate) on_death: DeathEvent,
    replacement:         HandlerId,
}

impl Sim {
    pub(crate) fn new(world: World) -> Self {
        let mut on_death = DeathEvent::new("on_death");
        let replacement = on_death.hook(|world, notice| world.handle_death(notice.actor));
        Self { world, on_death, replacement }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the clock and let every actor alive at the start of the step
    /// take its turn, in spawn order.
    ///
    /// Actors spawned during the step first act on the next one.  A fatal
    /// error aborts the rest of the step; registry and grid are still
    /// consistent afterwards.
    pub fn step(&mut self) -> SimResult<StepReport> {
        let tick = self.world.clock.advance();
        let snapshot = self.world.registry.ids();

        let mut scope = StepScope {
            world:    &mut self.world,
            on_death: &mut self.on_death,
            deaths:   Vec::new(),
        };
        let mut acted = 0;
        for id in snapshot {
            let Some(species) = scope.world.registry.get(id).map(Actor::species) else {
                continue;
            };
            step_actor(id, species, &mut scope)?;
            acted += 1;
        }

        debug!(%tick, acted, deaths = scope.deaths.len(), "step complete");
        Ok(StepReport { tick, acted, deaths: scope.deaths })
    }

    /// Run `n` steps, reporting to `observer`.
    ///
    /// Death notices reach the observer after the step's actors have all
    /// acted, in the order the deaths happened.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_step_start(self.world.now() + 1, &self.world);
            let report = self.step()?;
            for notice in &report.deaths {
                observer.on_death(notice);
            }
            observer.on_step_end(report.tick, &self.world);
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.world.now()
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        self.world.config()
    }

    /// Live actors with their positions, in spawn order.
    pub fn actors(&self) -> impl Iterator<Item = ActorView<'_>> + '_ {
        self.world.actors()
    }

    pub fn actor(&self, id: ActorId) -> SimResult<&Actor> {
        self.world.actor(id)
    }

    /// Direct access for scenario set-up.  Changing `traits` to another
    /// species is not supported.
    pub fn actor_mut(&mut self, id: ActorId) -> SimResult<&mut Actor> {
        self.world.actor_mut(id)
    }

    /// The shared random stream, for hosting layers that save its state.
    pub fn rng(&mut self) -> &mut SimRng {
        self.world.rng()
    }

    // ── Campaigns ─────────────────────────────────────────────────────────

    #[inline]
    pub fn campaigns(&self) -> Campaigns {
        self.world.campaigns
    }

    /// Start or stop vaccinating newly spawned mosquitoes.
    pub fn set_vaccination_campaign(&mut self, active: bool) {
        self.world.campaigns.vaccination = active;
    }

    /// Start or stop handing bed nets to newly spawned humans.
    pub fn set_bed_net_campaign(&mut self, active: bool) {
        self.world.campaigns.bed_nets = active;
    }

    // ── Manual spawning ───────────────────────────────────────────────────

    pub fn spawn_human(&mut self, pos: Position, use_net: bool) -> SimResult<ActorId> {
        self.world.spawn_human_at(pos, use_net)
    }

    /// The new mosquito starts satiated (`hunger = fed_hunger`).
    pub fn spawn_mosquito(&mut self, pos: Position, vaccinated: bool) -> SimResult<ActorId> {
        self.world.spawn_mosquito_at(pos, vaccinated)
    }

    // ── Death channel ─────────────────────────────────────────────────────

    /// Add a death handler.  It runs after every handler hooked before it.
    pub fn subscribe_death<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&mut World, &DeathNotice) -> SimResult<()> + 'static,
    {
        self.on_death.hook(handler)
    }

    /// Remove a handler added with [`subscribe_death`](Self::subscribe_death).
    /// The default handler stays hooked.
    pub fn unsubscribe_death(&mut self, id: HandlerId) -> SimResult<()> {
        if id == self.replacement {
            return Err(SimError::BuiltInHandler(id));
        }
        Ok(self.on_death.unhook(id)?)
    }

    /// Number of death handlers, the default one included.
    pub fn death_subscribers(&self) -> usize {
        self.on_death.len()
    }
}

// ── StepScope ─────────────────────────────────────────────────────────────────

/// The [`Habitat`] actors see while a step is running.
struct StepScope<'a> {
    world:    &'a mut World,
    on_death: &'a mut DeathEvent,
    deaths:   Vec<DeathNotice>,
}

impl Habitat for StepScope<'_> {
    type Error = SimError;

    fn now(&self) -> Tick {
        self.world.now()
    }

    fn config(&self) -> &SimConfig {
        &self.world.config
    }

    fn rng(&mut self) -> &mut SimRng {
        &mut self.world.rng
    }

    fn actor(&self, id: ActorId) -> SimResult<&Actor> {
        self.world.actor(id)
    }

    fn actor_mut(&mut self, id: ActorId) -> SimResult<&mut Actor> {
        self.world.actor_mut(id)
    }

    fn shift(&mut self, id: ActorId, dx: i32, dy: i32) -> SimResult<bool> {
        let to = self.world.grid.position_of(id)?.offset(dx, dy);
        if !self.world.grid.in_bounds(to) {
            return Ok(false);
        }
        self.world.grid.relocate(id, to)?;
        Ok(true)
    }

    fn host_beside(&self, id: ActorId) -> SimResult<Option<ActorId>> {
        let registry = &self.world.registry;
        Ok(self.world.grid.square_of(id)?.iter().copied().find(|&a| registry.is_human(a)))
    }

    fn announce_death(&mut self, id: ActorId) -> SimResult<()> {
        let notice = DeathNotice {
            actor:    id,
            species:  self.world.actor(id)?.species(),
            position: self.world.position_of(id)?,
            tick:     self.world.now(),
        };
        let failures = self.on_death.fire(self.world, &notice);
        self.deaths.push(notice);
        match failures.into_iter().find(SimError::is_fatal) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
