//! `mal-actor` — the actor model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`species`]     | `Species` — the closed `{Human, Mosquito}` tag              |
//! | [`actor`]       | `Actor`, `Vitals`, `Traits`                                 |
//! | [`infection`]   | `Infection` — infected/immune/vaccinated/net state          |
//! | [`habitat`]     | `Habitat` — what an acting actor may see and change         |
//! | [`fragment`]    | `Fragment` and `step_actor` — ordered per-step composition  |
//! | [`mortality`]   | natural, malaria and simple death; the death event          |
//! | [`vector`]      | mosquito wandering, feeding, hunger, disabled breeding      |
//! | [`bite`]        | `transmit` — what happens when a mosquito bites a human     |
//! | [`error`]       | `ActorError`, `ActorResult<T>`                              |
//!
//! # Design notes
//!
//! An actor's per-step update is the ordered list returned by
//! [`Species::fragments`].  [`step_actor`] runs every fragment's
//! `on_step_begin` in list order, then every fragment's `on_step_end` in list
//! order.  Fragments never hold borrows across calls into the [`Habitat`]:
//! each one reads what it needs, draws from the shared RNG, and writes back.
//! That keeps every fragment's view of the actor consistent with what the
//! fragments before it wrote.

pub mod actor;
pub mod bite;
pub mod error;
pub mod fragment;
pub mod habitat;
pub mod infection;
pub mod mortality;
pub mod species;
pub mod vector;

#[cfg(test)]
mod tests;

pub use actor::{Actor, Traits, Vitals};
pub use bite::{BiteOutcome, Transmission, transmit};
pub use error::{ActorError, ActorResult};
pub use fragment::{Fragment, step_actor};
pub use habitat::Habitat;
pub use infection::Infection;
pub use species::Species;
