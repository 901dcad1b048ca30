//! Unit tests for mal-actor.

use std::collections::BTreeMap;

use mal_core::{ActorId, Position, SimConfig, SimRng, Tick};

use crate::{
    Actor, ActorError, BiteOutcome, Fragment, Habitat, Infection, Species, Transmission, step_actor,
    transmit,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// In-memory habitat: a bounded plane, a map of actors, and a death log.
struct TestHabitat {
    now:       Tick,
    config:    SimConfig,
    rng:       SimRng,
    actors:    BTreeMap<ActorId, Actor>,
    positions: BTreeMap<ActorId, Position>,
    deaths:    Vec<ActorId>,
}

impl TestHabitat {
    fn new(config: SimConfig) -> Self {
        Self {
            now: Tick(1),
            config,
            rng: SimRng::new(42),
            actors: BTreeMap::new(),
            positions: BTreeMap::new(),
            deaths: Vec::new(),
        }
    }

    fn place(&mut self, actor: Actor, pos: Position) -> ActorId {
        let id = actor.id();
        self.actors.insert(id, actor);
        self.positions.insert(id, pos);
        id
    }

    fn get(&self, id: ActorId) -> &Actor {
        &self.actors[&id]
    }
}

impl Habitat for TestHabitat {
    type Error = ActorError;

    fn now(&self) -> Tick {
        self.now
    }

    fn config(&self) -> &SimConfig {
        &self.config
    }

    fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    fn actor(&self, id: ActorId) -> Result<&Actor, ActorError> {
        self.actors.get(&id).ok_or(ActorError::Untracked(id))
    }

    fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, ActorError> {
        self.actors.get_mut(&id).ok_or(ActorError::Untracked(id))
    }

    fn shift(&mut self, id: ActorId, dx: i32, dy: i32) -> Result<bool, ActorError> {
        let (w, h) = (self.config.grid.width as i32, self.config.grid.height as i32);
        let pos = self.positions.get_mut(&id).ok_or(ActorError::Untracked(id))?;
        let to = pos.offset(dx, dy);
        if to.x < 0 || to.y < 0 || to.x >= w || to.y >= h {
            return Ok(false);
        }
        *pos = to;
        Ok(true)
    }

    fn host_beside(&self, id: ActorId) -> Result<Option<ActorId>, ActorError> {
        let here = *self.positions.get(&id).ok_or(ActorError::Untracked(id))?;
        Ok(self
            .actors
            .values()
            .find(|a| a.is_human() && self.positions.get(&a.id()) == Some(&here))
            .map(Actor::id))
    }

    fn announce_death(&mut self, id: ActorId) -> Result<(), ActorError> {
        self.deaths.push(id);
        Ok(())
    }
}

/// Config with every death and movement probability switched off.
fn quiet_config() -> SimConfig {
    let mut c = SimConfig::default();
    c.grid.width = 10;
    c.grid.height = 10;
    c.human.age_death_factor = 0.0;
    c.human.death_base = 0.0;
    c.human.malaria_death_chance = 0.0;
    c.human.resistance_base = 0.0;
    c.human.infection_resistance_factor = 0.0;
    c.mosquito.move_chance = 0.0;
    c.mosquito.simple_death_chance = 0.0;
    c
}

fn infected() -> Infection {
    let mut i = Infection::default();
    i.infect(Tick(0));
    i
}

fn always() -> Transmission {
    Transmission { to_vector: 1.0, to_host: 1.0 }
}

// ── Infection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod infection {
    use super::*;

    #[test]
    fn first_infection_records_onset() {
        let mut i = Infection::default();
        assert_eq!(i.infection_count, 0);
        assert!(i.infect(Tick(5)));
        assert!(i.infected);
        assert_eq!(i.onset, Tick(5));
        assert_eq!(i.infection_count, 1);
    }

    #[test]
    fn reinfection_counts_but_keeps_onset() {
        let mut i = Infection::default();
        i.infect(Tick(5));
        i.infect(Tick(9));
        assert_eq!(i.onset, Tick(5));
        assert_eq!(i.infection_count, 2);
        assert_eq!(i.infected_for(Tick(9)), 4);
    }

    #[test]
    fn vaccinated_cannot_be_infected() {
        let mut i = Infection { vaccinated: true, ..Infection::default() };
        assert!(!i.infect(Tick(3)));
        assert!(!i.infected);
        assert_eq!(i.infection_count, 0);
    }

    #[test]
    fn vaccinate_cures_and_clears_immunity() {
        let mut i = infected();
        i.immune = true;
        i.vaccinate();
        assert!(i.vaccinated);
        assert!(!i.infected);
        assert!(!i.immune);
        // History is kept.
        assert_eq!(i.infection_count, 1);
    }

    #[test]
    fn clean_actor_has_no_duration() {
        assert_eq!(Infection::default().infected_for(Tick(100)), 0);
    }
}

// ── Bite protocol ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod bite {
    use super::*;

    #[test]
    fn vaccinated_vector_vaccinates_infected_immune_host() {
        let mut host = infected();
        host.immune = true;
        let mut vector = Infection { vaccinated: true, ..Infection::default() };
        let mut rng = SimRng::new(1);

        let out = transmit(&mut host, &mut vector, Tick(2), &mut rng, always());
        assert!(out.host_vaccinated);
        assert!(host.vaccinated);
        assert!(!host.infected);
        assert!(!host.immune);
        assert!(!vector.infected);
    }

    #[test]
    fn clean_pair_draws_nothing() {
        let mut host = Infection::default();
        let mut vector = Infection::default();
        let mut rng = SimRng::new(7);
        let mut reference = SimRng::new(7);

        let out = transmit(&mut host, &mut vector, Tick(2), &mut rng, always());
        assert_eq!(out, BiteOutcome::default());
        assert_eq!(rng.uniform(), reference.uniform());
    }

    #[test]
    fn net_blocks_both_directions() {
        let mut rng = SimRng::new(3);

        let mut host = Infection { use_net: true, ..Infection::default() };
        let mut vector = infected();
        let out = transmit(&mut host, &mut vector, Tick(2), &mut rng, always());
        assert!(out.blocked);
        assert!(!host.infected);

        let mut host = Infection { use_net: true, ..infected() };
        let mut vector = Infection::default();
        let out = transmit(&mut host, &mut vector, Tick(2), &mut rng, always());
        assert!(out.blocked);
        assert!(!vector.infected);
    }

    #[test]
    fn infected_vector_infects_host() {
        let mut host = Infection::default();
        let mut vector = infected();
        let mut rng = SimRng::new(5);
        let rates = Transmission { to_vector: 0.0, to_host: 1.0 };

        let out = transmit(&mut host, &mut vector, Tick(4), &mut rng, rates);
        assert!(out.host_infected);
        assert!(host.infected);
        assert_eq!(host.onset, Tick(4));
        assert_eq!(vector.infection_count, 1);
    }

    #[test]
    fn infected_host_infects_vector() {
        let mut host = infected();
        let mut vector = Infection::default();
        let mut rng = SimRng::new(5);
        let rates = Transmission { to_vector: 1.0, to_host: 0.0 };

        let out = transmit(&mut host, &mut vector, Tick(4), &mut rng, rates);
        assert!(out.vector_infected);
        assert!(vector.infected);
        // The freshly infected vector rolls for the host; p = 0.
        assert_eq!(host.infection_count, 1);
    }

    #[test]
    fn zero_rates_never_transmit() {
        let mut host = Infection::default();
        let mut vector = infected();
        let mut rng = SimRng::new(11);
        let rates = Transmission { to_vector: 0.0, to_host: 0.0 };
        for t in 0..50 {
            transmit(&mut host, &mut vector, Tick(t), &mut rng, rates);
        }
        assert!(!host.infected);
    }

    #[test]
    fn rates_follow_config() {
        let c = SimConfig::default();
        let rates = Transmission::from_config(&c);
        assert_eq!(rates.to_vector, c.human.mosquito_infection_chance);
        assert_eq!(rates.to_host, c.mosquito.human_infection_chance);
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod composition {
    use super::*;

    #[test]
    fn human_fragment_order() {
        assert_eq!(
            Species::Human.fragments(),
            &[
                Fragment::AcquiredImmunity,
                Fragment::Infectable,
                Fragment::NaturalDeath,
                Fragment::MalariaDeath,
                Fragment::DeathEvent,
            ]
        );
    }

    #[test]
    fn mosquito_fragment_order() {
        let f = Species::Mosquito.fragments();
        assert_eq!(f.first(), Some(&Fragment::Wander));
        assert_eq!(f.last(), Some(&Fragment::DeathEvent));
        let feed = f.iter().position(|x| *x == Fragment::Feed);
        let breed = f.iter().position(|x| *x == Fragment::Breed);
        let hunger = f.iter().position(|x| *x == Fragment::Hunger);
        assert!(feed < breed && breed < hunger);
    }

    #[test]
    fn species_of_actor() {
        assert_eq!(Actor::human(ActorId(0), false).species(), Species::Human);
        assert_eq!(Actor::mosquito(ActorId(1), -10.0, false).species(), Species::Mosquito);
        assert_eq!(Species::Mosquito.to_string(), "mosquito");
    }

    #[test]
    fn human_has_no_hunger() {
        let mut h = Actor::human(ActorId(0), true);
        assert_eq!(h.hunger(), None);
        assert!(h.hunger_mut().is_none());
        assert!(h.infection.use_net);
        assert!(!h.born_vaccinated());
    }
}

// ── Human step ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod human_step {
    use super::*;

    #[test]
    fn survivor_ages_one_step() {
        let mut hab = TestHabitat::new(quiet_config());
        let id = hab.place(Actor::human(ActorId(0), false), Position::new(1, 1));
        step_actor(id, Species::Human, &mut hab).unwrap();
        step_actor(id, Species::Human, &mut hab).unwrap();
        assert_eq!(hab.get(id).vitals.age, 2);
        assert!(!hab.get(id).vitals.dead);
        assert!(hab.deaths.is_empty());
    }

    #[test]
    fn certain_death_is_announced_once() {
        let mut config = quiet_config();
        config.human.death_base = 1.0;
        let mut hab = TestHabitat::new(config);
        let id = hab.place(Actor::human(ActorId(0), false), Position::new(1, 1));

        step_actor(id, Species::Human, &mut hab).unwrap();
        assert!(hab.get(id).vitals.dead);
        assert!(hab.get(id).vitals.mourned);
        assert_eq!(hab.deaths, vec![id]);

        // Still registered in the mock, so a second step must not re-announce.
        step_actor(id, Species::Human, &mut hab).unwrap();
        assert_eq!(hab.deaths, vec![id]);
    }

    #[test]
    fn certain_immunity_for_infected() {
        let mut config = quiet_config();
        config.human.resistance_base = 1.0;
        let mut hab = TestHabitat::new(config);
        let id = hab.place(Actor::human(ActorId(0), false), Position::new(0, 0));
        hab.actor_mut(id).unwrap().infection.infect(Tick(0));

        step_actor(id, Species::Human, &mut hab).unwrap();
        assert!(hab.get(id).infection.immune);
    }

    #[test]
    fn clean_human_never_gains_immunity() {
        let mut config = quiet_config();
        config.human.resistance_base = 1.0;
        let mut hab = TestHabitat::new(config);
        let id = hab.place(Actor::human(ActorId(0), false), Position::new(0, 0));
        step_actor(id, Species::Human, &mut hab).unwrap();
        assert!(!hab.get(id).infection.immune);
    }

    #[test]
    fn malaria_kills_only_non_immune_infected() {
        let mut config = quiet_config();
        config.human.malaria_death_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let sick = hab.place(Actor::human(ActorId(0), false), Position::new(0, 0));
        let immune = hab.place(Actor::human(ActorId(1), false), Position::new(0, 0));
        let clean = hab.place(Actor::human(ActorId(2), false), Position::new(0, 0));
        hab.actor_mut(sick).unwrap().infection.infect(Tick(0));
        hab.actor_mut(immune).unwrap().infection.infect(Tick(0));
        hab.actor_mut(immune).unwrap().infection.immune = true;

        for id in [sick, immune, clean] {
            step_actor(id, Species::Human, &mut hab).unwrap();
        }
        assert_eq!(hab.deaths, vec![sick]);
    }

    #[test]
    fn untracked_actor_is_an_error() {
        let mut hab = TestHabitat::new(quiet_config());
        let err = step_actor(ActorId(9), Species::Human, &mut hab).unwrap_err();
        assert_eq!(err, ActorError::Untracked(ActorId(9)));
    }
}

// ── Mosquito step ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mosquito_step {
    use super::*;

    #[test]
    fn satiated_mosquito_only_gets_hungrier() {
        let mut hab = TestHabitat::new(quiet_config());
        let m = hab.place(Actor::mosquito(ActorId(0), -10.0, false), Position::new(2, 2));
        let h = hab.place(Actor::human(ActorId(1), false), Position::new(2, 2));
        hab.actor_mut(m).unwrap().infection.infect(Tick(0));

        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert_eq!(hab.get(m).hunger(), Some(-9.0));
        assert!(!hab.get(h).infection.infected);
    }

    #[test]
    fn hungry_infected_mosquito_infects_co_located_host() {
        let mut config = quiet_config();
        config.mosquito.bite_chance = 1.0;
        config.mosquito.human_infection_chance = 1.0;
        config.human.mosquito_infection_chance = 0.0;
        let mut hab = TestHabitat::new(config);
        let m = hab.place(Actor::mosquito(ActorId(0), 10.0, false), Position::new(4, 4));
        let h = hab.place(Actor::human(ActorId(1), false), Position::new(4, 4));
        hab.actor_mut(m).unwrap().infection.infect(Tick(0));

        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert!(hab.get(h).infection.infected);
        assert_eq!(hab.get(h).infection.onset, Tick(1));
        assert_eq!(hab.get(m).infection.infection_count, 1);
        // Fed: nutrition is within [fed_hunger, base_bite_nutrition].
        let hunger = hab.get(m).hunger().unwrap();
        assert!((6.0..=21.0).contains(&hunger), "hunger {hunger}");
    }

    #[test]
    fn bites_only_the_first_co_located_host() {
        let mut config = quiet_config();
        config.mosquito.bite_chance = 1.0;
        config.mosquito.human_infection_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let m = hab.place(Actor::mosquito(ActorId(0), 10.0, false), Position::new(4, 4));
        let first = hab.place(Actor::human(ActorId(1), false), Position::new(4, 4));
        let second = hab.place(Actor::human(ActorId(2), false), Position::new(4, 4));
        hab.actor_mut(m).unwrap().infection.infect(Tick(0));

        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert!(hab.get(first).infection.infected);
        assert!(!hab.get(second).infection.infected);
    }

    #[test]
    fn no_host_means_no_feeding() {
        let mut config = quiet_config();
        config.mosquito.bite_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let m = hab.place(Actor::mosquito(ActorId(0), 10.0, false), Position::new(4, 4));
        hab.place(Actor::human(ActorId(1), false), Position::new(5, 5));

        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert_eq!(hab.get(m).hunger(), Some(11.0));
    }

    #[test]
    fn wandering_stays_on_grid() {
        let mut config = quiet_config();
        config.grid.width = 1;
        config.grid.height = 1;
        config.mosquito.move_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let m = hab.place(Actor::mosquito(ActorId(0), -10.0, false), Position::new(0, 0));
        for _ in 0..20 {
            step_actor(m, Species::Mosquito, &mut hab).unwrap();
        }
        assert_eq!(hab.positions[&m], Position::new(0, 0));
    }

    #[test]
    fn wandering_moves_one_square() {
        let mut config = quiet_config();
        config.mosquito.move_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let start = Position::new(5, 5);
        let m = hab.place(Actor::mosquito(ActorId(0), -10.0, false), start);
        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert_eq!(hab.positions[&m].chebyshev(start), 1);
    }

    #[test]
    fn disabled_breeding_still_draws() {
        let mut config = quiet_config();
        config.mosquito.reproduction_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let mut reference = SimRng::new(42);

        Fragment::Breed.on_step_begin(ActorId(0), &mut hab).unwrap();
        reference.uniform();
        assert_eq!(hab.rng.uniform(), reference.uniform());
        assert!(hab.actors.is_empty());
    }

    #[test]
    fn simple_death_is_announced() {
        let mut config = quiet_config();
        config.mosquito.simple_death_chance = 1.0;
        let mut hab = TestHabitat::new(config);
        let m = hab.place(Actor::mosquito(ActorId(3), -10.0, true), Position::new(0, 0));
        step_actor(m, Species::Mosquito, &mut hab).unwrap();
        assert_eq!(hab.deaths, vec![m]);
        assert!(hab.get(m).born_vaccinated());
    }

    #[test]
    fn hunger_on_a_human_is_wrong_species() {
        let mut hab = TestHabitat::new(quiet_config());
        let h = hab.place(Actor::human(ActorId(0), false), Position::new(0, 0));
        let err = Fragment::Hunger.on_step_begin(h, &mut hab).unwrap_err();
        assert_eq!(err, ActorError::WrongSpecies { actor: h, expected: Species::Mosquito });
    }
}
