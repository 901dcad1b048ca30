//! Death fragments and the death event.
//!
//! The three death causes only ever *set* `vitals.dead`.  Removing the actor
//! is the death subscribers' job, triggered from [`mourn`] at the end of the
//! same step.

use tracing::debug;

use mal_core::ActorId;

use crate::Habitat;

/// Linear growth of malaria death risk per tick of untreated infection.
const MALARIA_RISK_PER_TICK: f64 = 1.0 / 10_000.0;

/// `age * age_death_factor + death_base`; age advances whatever the roll.
pub fn natural_death<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let age = habitat.actor(id)?.vitals.age;
    let params = &habitat.config().human;
    let p = age as f64 * params.age_death_factor + params.death_base;
    let dies = habitat.rng().chance(p);

    let vitals = &mut habitat.actor_mut(id)?.vitals;
    if dies {
        vitals.dead = true;
    }
    vitals.age += 1;
    Ok(())
}

/// Only infected, non-immune humans are at risk.
pub fn malaria_death<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let infection = habitat.actor(id)?.infection;
    if !infection.infected || infection.immune {
        return Ok(());
    }
    let duration = infection.infected_for(habitat.now()) as f64;
    let p = habitat.config().human.malaria_death_chance + duration * MALARIA_RISK_PER_TICK;
    if habitat.rng().chance(p) {
        habitat.actor_mut(id)?.vitals.dead = true;
    }
    Ok(())
}

pub fn simple_death<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let p = habitat.config().mosquito.simple_death_chance;
    if habitat.rng().chance(p) {
        habitat.actor_mut(id)?.vitals.dead = true;
    }
    Ok(())
}

/// Fire the death event once for a dead actor.
pub fn mourn<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let vitals = &mut habitat.actor_mut(id)?.vitals;
    if !vitals.dead || vitals.mourned {
        return Ok(());
    }
    vitals.mourned = true;
    debug!(actor = %id, tick = %habitat.now(), "actor died");
    habitat.announce_death(id)
}
