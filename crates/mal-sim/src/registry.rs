//! The ordered set of live actors.

use std::collections::BTreeMap;

use mal_actor::{Actor, Species};
use mal_core::ActorId;

/// Every live actor, keyed by ID.
///
/// IDs are handed out in increasing order and never reused, so ID order is
/// insertion order: iterating the registry visits actors in the order they
/// were spawned.
#[derive(Debug, Default, Clone)]
pub struct ActorRegistry {
    actors:  BTreeMap<ActorId, Actor>,
    next_id: ActorId,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next unused ID.
    pub fn allocate(&mut self) -> ActorId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    pub(crate) fn insert(&mut self, actor: Actor) {
        self.actors.insert(actor.id(), actor);
    }

    pub(crate) fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Whether `id` is a live human.
    #[inline]
    pub fn is_human(&self, id: ActorId) -> bool {
        self.get(id).is_some_and(Actor::is_human)
    }

    /// A snapshot of the live IDs, in spawn order.
    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.keys().copied().collect()
    }

    /// Live IDs of one species, in spawn order.
    pub fn ids_of(&self, species: Species) -> impl Iterator<Item = ActorId> + '_ {
        self.actors
            .values()
            .filter(move |a| a.species() == species)
            .map(Actor::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn count(&self, species: Species) -> usize {
        self.ids_of(species).count()
    }
}
