//! `mal-core` — foundational types for the malaria host/vector simulation.
//!
//! This crate is a dependency of every other `mal-*` crate.  It has no
//! `mal-*` dependencies and few external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `ActorId`                                               |
//! | [`position`]   | `Position`, the 8-neighbourhood offsets                 |
//! | [`time`]       | `Tick`, `SimClock`                                      |
//! | [`rng`]        | `SimRng` — the single shared random stream              |
//! | [`config`]     | `SimConfig`, `GridConfig`, `HumanParams`, `MosquitoParams` |
//! | [`event`]      | `Event<C, E, X>` — named multi-subscriber channel       |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod position;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridConfig, HumanParams, MosquitoParams, SimConfig};
pub use error::{CoreError, CoreResult};
pub use event::Event;
pub use ids::{ActorId, HandlerId};
pub use position::{NEIGHBOUR_OFFSETS, Position};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
