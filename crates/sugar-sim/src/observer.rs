//! Model observer trait for progress reporting.

use sugar_core::Tick;

/// Callbacks invoked by [`run_with`][crate::SugarscapeModel::run_with] at
/// step boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, living: usize) {
///         if tick.0.is_multiple_of(self.interval) {
///             println!("{tick}: {living} foragers alive");
///         }
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called before each step, with the tick about to be processed.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each step completes.
    ///
    /// `living` is the forager count after this step's starvation deaths.
    fn on_step_end(&mut self, _tick: Tick, _living: usize) {}

    /// Called once after the final step of a run.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`ModelObserver`] that does nothing.  Used by
/// [`run_model`][crate::SugarscapeModel::run_model] when no callbacks are
/// needed.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
