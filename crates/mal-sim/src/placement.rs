//! Where new actors go: initial seeding and replacement spawning.
//!
//! # Human placement
//!
//! 1. If clustering is on and a `cluster_chance` roll succeeds, visit the
//!    live humans in shuffled order and take the first in-bounds neighbour
//!    square (fixed offset order) that holds no human.
//! 2. Otherwise, or if no human has a free neighbour: once mosquitoes have
//!    been seeded, pick uniformly among squares without a human.  Before
//!    that, probe random squares for an empty one, up to one probe per
//!    square, then fall back to a uniform pick among the empty squares.
//! 3. Nothing left → [`SimError::Saturated`].
//!
//! # Mosquito placement
//!
//! Once the first mosquito exists, with clustering on and a successful
//! `cluster_chance` roll, join the square of a uniformly chosen live
//! mosquito.  Otherwise pick any square uniformly.
//!
//! Campaign rolls (`use_net_chance`, `vax_rate`) are only drawn while the
//! matching campaign is active.

use tracing::{debug, info};

use mal_actor::Species;
use mal_core::{ActorId, Position};
use mal_grid::GridError;

use crate::{SimError, SimResult, World};

impl World {
    /// Seed the initial population: humans first, then mosquitoes.
    ///
    /// The first human is always infected; every later one with
    /// `pre_infection_prob`.
    pub(crate) fn populate(&mut self) -> SimResult<()> {
        let humans = self.config.initial_humans();
        let mut infected = 0usize;
        for i in 0..humans {
            let id = self.new_human()?;
            if i == 0 || self.rng.chance(self.config.human.pre_infection_prob) {
                let now = self.now();
                self.actor_mut(id)?.infection.infect(now);
                infected += 1;
            }
        }

        for _ in 0..self.config.mosquito.count {
            self.new_mosquito()?;
        }

        info!(
            humans,
            infected,
            mosquitoes = self.config.mosquito.count,
            width = self.grid.width(),
            height = self.grid.height(),
            "population seeded"
        );
        Ok(())
    }

    /// Place and spawn a human, rolling for a bed net.
    pub(crate) fn new_human(&mut self) -> SimResult<ActorId> {
        let pos = self.human_square()?;
        let use_net = self.net_roll();
        self.spawn_human_at(pos, use_net)
    }

    /// Place and spawn a mosquito, rolling for the vaccine.
    pub(crate) fn new_mosquito(&mut self) -> SimResult<ActorId> {
        let pos = self.mosquito_square()?;
        let vaccinated = self.vax_roll();
        self.spawn_mosquito_at(pos, vaccinated)
    }

    pub(crate) fn net_roll(&mut self) -> bool {
        self.campaigns.bed_nets && self.rng.chance(self.config.human.use_net_chance)
    }

    pub(crate) fn vax_roll(&mut self) -> bool {
        self.campaigns.vaccination && self.rng.chance(self.config.mosquito.vax_rate)
    }

    fn human_square(&mut self) -> SimResult<Position> {
        let params = &self.config.human;
        if params.cluster && self.rng.chance(params.cluster_chance) {
            if let Some(pos) = self.beside_a_human()? {
                return Ok(pos);
            }
        }

        if self.vectors_seeded {
            let registry = &self.registry;
            let found = self
                .grid
                .random_square_where(&mut self.rng, |members| !members.iter().any(|&a| registry.is_human(a)));
            return saturated_if_none(found, Species::Human);
        }

        let (width, height) = (self.grid.width(), self.grid.height());
        for _ in 0..self.grid.square_count() {
            let x = self.rng.gen_range(0..width);
            let y = self.rng.gen_range(0..height);
            let pos = Position::new(x as i32, y as i32);
            if self.grid.square_at(pos)?.is_empty() {
                return Ok(pos);
            }
        }
        debug!("random probing found no empty square, scanning");
        let found = self.grid.random_square_where(&mut self.rng, <[ActorId]>::is_empty);
        saturated_if_none(found, Species::Human)
    }

    /// First free square next to a human, visiting humans in shuffled order.
    fn beside_a_human(&mut self) -> SimResult<Option<Position>> {
        let mut humans: Vec<ActorId> = self.registry.ids_of(Species::Human).collect();
        self.rng.shuffle(&mut humans);
        for id in humans {
            let here = self.grid.position_of(id)?;
            for pos in self.grid.neighbours(here) {
                if !self.has_human(pos)? {
                    return Ok(Some(pos));
                }
            }
        }
        Ok(None)
    }

    fn mosquito_square(&mut self) -> SimResult<Position> {
        let params = &self.config.mosquito;
        if self.vectors_seeded && params.cluster && self.rng.chance(params.cluster_chance) {
            let mosquitoes: Vec<ActorId> = self.registry.ids_of(Species::Mosquito).collect();
            if let Some(&other) = self.rng.choose(&mosquitoes) {
                return Ok(self.grid.position_of(other)?);
            }
            debug!("no live mosquito to cluster with");
        }
        let found = self.grid.random_square(&mut self.rng);
        saturated_if_none(found, Species::Mosquito)
    }
}

fn saturated_if_none(found: Result<Position, GridError>, species: Species) -> SimResult<Position> {
    match found {
        Ok(pos) => Ok(pos),
        Err(GridError::NoMatchingSquare) => Err(SimError::Saturated { species }),
        Err(e) => Err(e.into()),
    }
}
