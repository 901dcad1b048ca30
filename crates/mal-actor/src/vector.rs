//! Mosquito-only fragments: wandering, feeding, hunger and breeding.

use tracing::trace;

use mal_core::{ActorId, NEIGHBOUR_OFFSETS};

use crate::{ActorError, Habitat, Species, Transmission, transmit};

fn hunger_of<H: Habitat>(id: ActorId, habitat: &H) -> Result<f64, H::Error> {
    habitat
        .actor(id)?
        .hunger()
        .ok_or_else(|| ActorError::WrongSpecies { actor: id, expected: Species::Mosquito }.into())
}

/// With `move_chance`, try one random 8-neighbour step.  Stepping off the
/// grid means staying put.
pub fn wander<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let p = habitat.config().mosquito.move_chance;
    if !habitat.rng().chance(p) {
        return Ok(());
    }
    if let Some(&(dx, dy)) = habitat.rng().choose(&NEIGHBOUR_OFFSETS) {
        habitat.shift(id, dx, dy)?;
    }
    Ok(())
}

/// Feeding decision.  One draw is always taken; a satiated mosquito
/// (`hunger < 0`) never bites, otherwise the chance is
/// `bite_chance * hunger / -fed_hunger`.
pub fn feed<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let roll = habitat.rng().uniform();
    let hunger = hunger_of(id, habitat)?;
    if hunger < 0.0 {
        return Ok(());
    }
    let params = &habitat.config().mosquito;
    if roll < params.bite_chance * (hunger / -params.fed_hunger) {
        bite(id, habitat)?;
    }
    Ok(())
}

/// Bite the first human on the mosquito's square, if there is one.
fn bite<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    if hunger_of(id, habitat)? < 0.0 {
        return Ok(());
    }
    let Some(host) = habitat.host_beside(id)? else {
        return Ok(());
    };

    let (base, fed) = {
        let m = &habitat.config().mosquito;
        (m.base_bite_nutrition, m.fed_hunger)
    };
    let nutrition = base + habitat.rng().uniform() * (fed - base);
    if let Some(hunger) = habitat.actor_mut(id)?.hunger_mut() {
        *hunger -= nutrition;
    }

    let now = habitat.now();
    let rates = Transmission::from_config(habitat.config());
    let mut vector = habitat.actor(id)?.infection;
    let mut victim = habitat.actor(host)?.infection;
    let outcome = transmit(&mut victim, &mut vector, now, habitat.rng(), rates);
    habitat.actor_mut(host)?.infection = victim;
    habitat.actor_mut(id)?.infection = vector;

    trace!(mosquito = %id, human = %host, ?outcome, "bite");
    Ok(())
}

/// Reproduction is disabled.  The roll is still taken so that every
/// mosquito step consumes the same number of draws.
pub fn breed<H: Habitat>(habitat: &mut H) -> Result<(), H::Error> {
    let p = habitat.config().mosquito.reproduction_chance;
    let _ = habitat.rng().chance(p);
    Ok(())
}

pub fn grow_hungry<H: Habitat>(id: ActorId, habitat: &mut H) -> Result<(), H::Error> {
    let actor = habitat.actor_mut(id)?;
    match actor.hunger_mut() {
        Some(hunger) => {
            *hunger += 1.0;
            Ok(())
        }
        None => Err(ActorError::WrongSpecies { actor: id, expected: Species::Mosquito }.into()),
    }
}
