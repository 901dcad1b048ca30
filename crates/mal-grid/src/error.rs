//! Grid error type.

use thiserror::Error;

use mal_core::{ActorId, Position};

/// Errors produced by `mal-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Recoverable: callers such as movement fall back to staying put.
    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Position, width: u32, height: u32 },

    /// The actor is not on the grid.  Indicates a broken registry/grid
    /// invariant.
    #[error("{0} is not on the grid")]
    UntrackedActor(ActorId),

    #[error("{actor} is already on the grid at {at}")]
    AlreadyTracked { actor: ActorId, at: Position },

    /// Recoverable: placement tries its next strategy.
    #[error("no square satisfies the placement predicate")]
    NoMatchingSquare,
}

pub type GridResult<T> = Result<T, GridError>;
