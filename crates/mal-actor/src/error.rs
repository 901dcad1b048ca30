use thiserror::Error;

use mal_core::ActorId;

use crate::Species;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActorError {
    #[error("{0} is not a live actor")]
    Untracked(ActorId),

    #[error("{actor} is not a {expected:?}")]
    WrongSpecies { actor: ActorId, expected: Species },
}

pub type ActorResult<T> = Result<T, ActorError>;
