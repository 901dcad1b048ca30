//! `mal-grid` — the bounded simulation plane.
//!
//! # Crate layout
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`grid`]    | `Grid` — square membership + reverse index     |
//! | [`error`]   | `GridError`, `GridResult<T>`                   |
//!
//! The grid knows nothing about species.  Predicated queries take a closure
//! over a square's member slice, and callers resolve member IDs against
//! their own registry.

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::Grid;
