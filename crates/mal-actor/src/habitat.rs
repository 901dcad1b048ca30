//! The `Habitat` trait — the world as seen by an actor during its step.

use mal_core::{ActorId, SimConfig, SimRng, Tick};

use crate::{Actor, ActorError};

/// Everything a fragment may read or change while its actor is stepping.
///
/// `mal-sim` implements this over its grid + registry + event channel; unit
/// tests implement it over a small in-memory map.
///
/// Methods take `&mut self` or `&self` individually and return short-lived
/// borrows, so a fragment reads the values it needs, releases the borrow,
/// draws from [`rng`](Self::rng), and then writes back.
pub trait Habitat {
    /// Error type of the implementing world.  Must absorb [`ActorError`] so
    /// fragments can report lookups of the wrong species.
    type Error: From<ActorError>;

    /// The current simulation tick.
    fn now(&self) -> Tick;

    fn config(&self) -> &SimConfig;

    /// The single shared random stream.
    fn rng(&mut self) -> &mut SimRng;

    /// Look up a live actor.  Fails for actors that are not tracked.
    fn actor(&self, id: ActorId) -> Result<&Actor, Self::Error>;

    fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, Self::Error>;

    /// Move `id` by `(dx, dy)`.  Returns `Ok(false)`, leaving the actor in
    /// place, if the target square is off the grid.
    fn shift(&mut self, id: ActorId, dx: i32, dy: i32) -> Result<bool, Self::Error>;

    /// The first human (in arrival order) on the square `id` occupies.
    fn host_beside(&self, id: ActorId) -> Result<Option<ActorId>, Self::Error>;

    /// Fire the death event for `id`.  Synchronous: when this returns, every
    /// death subscriber has run.
    fn announce_death(&mut self, id: ActorId) -> Result<(), Self::Error>;
}
