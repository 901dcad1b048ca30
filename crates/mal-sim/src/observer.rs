//! Simulation observer trait for progress reporting and data collection.

use mal_core::Tick;

use crate::{DeathNotice, World};

/// Callbacks invoked by [`Sim::run_steps`][crate::Sim::run_steps] around
/// every step.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, world: &World) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} actors", world.registry().len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the step that will run at `tick`.
    fn on_step_start(&mut self, _tick: Tick, _world: &World) {}

    /// Called once per death of the step just run, in death order.
    fn on_death(&mut self, _notice: &DeathNotice) {}

    /// Called after the step, with the world as the step left it.
    fn on_step_end(&mut self, _tick: Tick, _world: &World) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_steps` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
