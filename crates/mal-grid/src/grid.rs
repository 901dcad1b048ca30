//! Dense square storage plus an actor → position reverse index.
//!
//! # Layout
//!
//! Squares are stored column-major in a flat `Vec`:
//!
//!   index = x * height + y
//!
//! so iterating the `Vec` visits `(0,0), (0,1), …, (0,H-1), (1,0), …`.  That
//! order is what uniform and predicated random square selection index into,
//! so it is part of the reproducibility contract.
//!
//! Each square keeps its members in insertion order (a `Vec`, not a set), so
//! "first human on the square" is deterministic.
//!
//! # Invariant
//!
//! `positions[a] == p` ⟺ `a ∈ squares[index(p)]`.  Every mutating method
//! updates both sides before returning, and validates its inputs before
//! touching either side, so a failed call leaves the grid unchanged.

use rustc_hash::FxHashMap;

use mal_core::{ActorId, GridConfig, Position, SimRng};

use crate::{GridError, GridResult};

/// The bounded simulation plane.
#[derive(Debug, Clone)]
pub struct Grid {
    width:     u32,
    height:    u32,
    squares:   Vec<Vec<ActorId>>,
    positions: FxHashMap<ActorId, Position>,
}

impl Grid {
    /// Create an empty `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            squares:   vec![Vec::new(); count],
            positions: FxHashMap::default(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.width, config.height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> GridResult<usize> {
        if self.in_bounds(pos) {
            Ok(pos.x as usize * self.height as usize + pos.y as usize)
        } else {
            Err(GridError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }

    #[inline]
    fn position_at(&self, index: usize) -> Position {
        let h = self.height as usize;
        Position::new((index / h) as i32, (index % h) as i32)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `actor` on the square at `pos`.
    ///
    /// Adding an actor to the square it already occupies is a no-op; adding
    /// it anywhere else fails with [`GridError::AlreadyTracked`].
    pub fn add(&mut self, actor: ActorId, pos: Position) -> GridResult<()> {
        let idx = self.index(pos)?;
        if let Some(&at) = self.positions.get(&actor) {
            return if at == pos {
                Ok(())
            } else {
                Err(GridError::AlreadyTracked { actor, at })
            };
        }
        self.squares[idx].push(actor);
        self.positions.insert(actor, pos);
        Ok(())
    }

    /// Take `actor` off the grid, returning the position it occupied.
    pub fn remove(&mut self, actor: ActorId) -> GridResult<Position> {
        let pos = self.position_of(actor)?;
        let idx = self.index(pos)?;
        let square = &mut self.squares[idx];
        if let Some(i) = square.iter().position(|&a| a == actor) {
            square.remove(i);
        }
        self.positions.remove(&actor);
        Ok(pos)
    }

    /// Move `actor` to `to`, returning the position it left.
    ///
    /// Fails without side effects if `to` is out of bounds or the actor is
    /// not tracked.
    pub fn relocate(&mut self, actor: ActorId, to: Position) -> GridResult<Position> {
        self.index(to)?;
        let from = self.remove(actor)?;
        self.add(actor, to)?;
        Ok(from)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn position_of(&self, actor: ActorId) -> GridResult<Position> {
        self.positions
            .get(&actor)
            .copied()
            .ok_or(GridError::UntrackedActor(actor))
    }

    #[inline]
    pub fn contains_actor(&self, actor: ActorId) -> bool {
        self.positions.contains_key(&actor)
    }

    /// Members of the square `actor` stands on, `actor` included.
    pub fn square_of(&self, actor: ActorId) -> GridResult<&[ActorId]> {
        let pos = self.position_of(actor)?;
        self.square_at(pos)
    }

    /// Members of the square at `pos`, in arrival order.
    pub fn square_at(&self, pos: Position) -> GridResult<&[ActorId]> {
        let idx = self.index(pos)?;
        Ok(&self.squares[idx])
    }

    /// In-bounds 8-neighbours of `pos`, in `NEIGHBOUR_OFFSETS` order.
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbours().filter(move |&p| self.in_bounds(p))
    }

    /// Every square with its members, in storage order.
    pub fn squares(&self) -> impl Iterator<Item = (Position, &[ActorId])> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, members)| (self.position_at(i), members.as_slice()))
    }

    /// Number of actors with a recorded position.
    #[inline]
    pub fn tracked(&self) -> usize {
        self.positions.len()
    }

    /// Sum of all square sizes.  Equals [`tracked`](Self::tracked) whenever
    /// the grid is consistent.
    pub fn occupancy(&self) -> usize {
        self.squares.iter().map(Vec::len).sum()
    }

    // ── Random selection ──────────────────────────────────────────────────

    /// A uniformly chosen square.
    pub fn random_square(&self, rng: &mut SimRng) -> GridResult<Position> {
        if self.squares.is_empty() {
            return Err(GridError::NoMatchingSquare);
        }
        let idx = rng.gen_range(0..self.squares.len());
        Ok(self.position_at(idx))
    }

    /// A square chosen uniformly among those whose members satisfy
    /// `predicate`.
    pub fn random_square_where<P>(&self, rng: &mut SimRng, mut predicate: P) -> GridResult<Position>
    where
        P: FnMut(&[ActorId]) -> bool,
    {
        let matching: Vec<usize> = self
            .squares
            .iter()
            .enumerate()
            .filter(|(_, members)| predicate(members.as_slice()))
            .map(|(i, _)| i)
            .collect();
        rng.choose(&matching)
            .map(|&i| self.position_at(i))
            .ok_or(GridError::NoMatchingSquare)
    }
}
