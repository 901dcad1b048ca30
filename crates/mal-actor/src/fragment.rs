//! Ordered behavior composition.
//!
//! Each [`Fragment`] is one independent piece of per-step behavior with two
//! hooks, `on_step_begin` and `on_step_end`.  A species is an ordered list
//! of fragments ([`Species::fragments`]); stepping an actor runs the list.
//!
//! | Fragment            | Species  | Begin                                   | End              |
//! |---------------------|----------|-----------------------------------------|------------------|
//! | `AcquiredImmunity`  | Human    | infected → immunity roll                | –                |
//! | `Infectable`        | both     | –                                       | –                |
//! | `NaturalDeath`      | Human    | age-dependent death roll, `age += 1`    | –                |
//! | `MalariaDeath`      | Human    | duration-dependent death roll           | –                |
//! | `Wander`            | Mosquito | move roll, random 8-neighbour           | –                |
//! | `Feed`              | Mosquito | hunger-scaled bite roll, bite           | –                |
//! | `Breed`             | Mosquito | disabled reproduction roll              | –                |
//! | `Hunger`            | Mosquito | `hunger += 1`                           | –                |
//! | `SimpleDeath`       | Mosquito | fixed death roll                        | –                |
//! | `DeathEvent`        | both     | –                                       | fire `on_death`  |
//!
//! `Infectable` carries no per-step logic; it is listed so the composition
//! names every state slice the species owns.

use mal_core::ActorId;

use crate::{Habitat, Species, mortality, vector};

/// One piece of per-step behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Fragment {
    AcquiredImmunity,
    Infectable,
    NaturalDeath,
    MalariaDeath,
    Wander,
    Feed,
    Breed,
    Hunger,
    SimpleDeath,
    DeathEvent,
}

impl Fragment {
    pub fn on_step_begin<H: Habitat>(self, id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
        match self {
            Fragment::AcquiredImmunity => acquired_immunity(id, habitat),
            Fragment::NaturalDeath => mortality::natural_death(id, habitat),
            Fragment::MalariaDeath => mortality::malaria_death(id, habitat),
            Fragment::SimpleDeath => mortality::simple_death(id, habitat),
            Fragment::Wander => vector::wander(id, habitat),
            Fragment::Feed => vector::feed(id, habitat),
            Fragment::Breed => vector::breed(habitat),
            Fragment::Hunger => vector::grow_hungry(id, habitat),
            Fragment::Infectable | Fragment::DeathEvent => Ok(()),
        }
    }

    pub fn on_step_end<H: Habitat>(self, id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
        match self {
            Fragment::DeathEvent => mortality::mourn(id, habitat),
            _ => Ok(()),
        }
    }
}

/// Run one full step for `id`: every fragment's begin hook, then every
/// fragment's end hook, in composition order.
pub fn step_actor<H: Habitat>(id: ActorId, species: Species, habitat: &mut H) -> Result<(), H::Error> {
    let fragments = species.fragments();
    for fragment in fragments {
        fragment.on_step_begin(id, habitat)?;
    }
    for fragment in fragments {
        fragment.on_step_end(id, habitat)?;
    }
    Ok(())
}

/// Infected humans may become permanently immune.  Already-immune humans
/// still roll.
fn acquired_immunity<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let infection = habitat.actor(id)?.infection;
    if !infection.infected {
        return Ok(());
    }
    let params = &habitat.config().human;
    let p = params.resistance_base
        + f64::from(infection.infection_count) * params.infection_resistance_factor;
    if habitat.rng().chance(p) {
        habitat.actor_mut(id)?.infection.immune = true;
    }
    Ok(())
}
