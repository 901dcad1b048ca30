use thiserror::Error;

use mal_actor::{ActorError, Species};
use mal_core::{CoreError, HandlerId};
use mal_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("actor error: {0}")]
    Actor(#[from] ActorError),

    /// Every placement strategy ran out of candidate squares.
    #[error("no square left to place a {species}")]
    Saturated { species: Species },

    /// The built-in death handler keeps the world consistent and cannot be
    /// removed.
    #[error("death handler {0} is built in and cannot be unsubscribed")]
    BuiltInHandler(HandlerId),

    /// Registry and grid disagree.  Only reported by `World::audit`.
    #[error("world is inconsistent: {0}")]
    Inconsistent(String),
}

impl SimError {
    /// Whether the error must abort the current step.
    ///
    /// Death subscribers can fail without stopping the others; a fatal
    /// failure is still returned from `Sim::step` once they have all run.
    pub fn is_fatal(&self) -> bool {
        match self {
            SimError::Config(_) | SimError::Core(_) | SimError::BuiltInHandler(_) => false,
            SimError::Grid(e) => !matches!(e, GridError::OutOfBounds { .. } | GridError::NoMatchingSquare),
            SimError::Actor(_) | SimError::Saturated { .. } | SimError::Inconsistent(_) => true,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
