//! `mal-sim` — step driver for the malaria simulation.
//!
//! # Step loop
//!
//! ```text
//! step():
//!   ① advance the clock
//!   ② snapshot live actor IDs (spawn order)
//!   ③ for each ID still alive:
//!        run every fragment's on_step_begin, then every on_step_end
//!        (the DeathEvent fragment fires on_death for a dead actor:
//!         the default handler removes it and spawns a replacement,
//!         which first acts on the next step)
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`registry`]    | `ActorRegistry` — live actors in spawn order             |
//! | [`world`]       | `World`, `Campaigns`, `DeathNotice`, `ActorView`, audit  |
//! | [`placement`]   | clustering placement, seeding, replacement spawning      |
//! | [`sim`]         | `Sim`, `StepReport`, the `on_death` channel              |
//! | [`builder`]     | `SimBuilder`                                             |
//! | [`observer`]    | `SimObserver`, `NoopObserver`                            |
//! | [`error`]       | `SimError`, `SimResult<T>`                               |

pub mod builder;
pub mod error;
pub mod observer;
pub mod placement;
pub mod registry;
pub mod sim;
pub mod world;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use registry::ActorRegistry;
pub use sim::{DeathEvent, Sim, StepReport};
pub use world::{ActorView, Campaigns, DeathNotice, World};
