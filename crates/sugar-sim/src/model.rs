//! The `SugarscapeModel` struct and its tick loop.

use sugar_agent::{Forager, SugarPatch};
use sugar_core::{Entity, EntityKind, ForagerId, ModelConfig, SimRng, Tick};
use sugar_grid::MultiGrid;
use sugar_output::DataCollector;
use sugar_schedule::TypeSchedule;

use crate::{ModelObserver, NoopObserver, SimResult};

/// Steps executed by [`run_model`][SugarscapeModel::run_model] callers that
/// want the standard batch length.
pub const DEFAULT_STEP_COUNT: u64 = 200;

/// Name of the living-forager-count metrics series registered at
/// construction.
pub const FORAGER_SERIES: &str = "foragers";

/// The constant-growback simulation model.
///
/// Owns all simulation state: the grid, the per-type schedule, the patch
/// and forager stores, the metrics collector, and the single shared RNG.
/// Mutated only by the one control thread driving [`step`][Self::step] /
/// [`run_model`][Self::run_model].
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct SugarscapeModel {
    /// Construction parameters (grid size, population, seed, verbosity).
    pub config: ModelConfig,

    /// Non-toroidal multi-occupancy grid.
    pub grid: MultiGrid,

    /// Random-activation-by-type scheduler; also owns the tick counter.
    pub schedule: TypeSchedule,

    /// Patch store, indexed by `PatchId` = grid cell index.
    pub patches: Vec<SugarPatch>,

    /// Forager store, indexed by `ForagerId`.  Dead foragers stay in the
    /// store with `alive == false`; they hold no grid or schedule entry.
    pub foragers: Vec<Forager>,

    /// Per-tick metrics time series (one sample at construction, one per
    /// step thereafter).
    pub metrics: DataCollector<TypeSchedule>,

    /// The single shared random source driving every randomized decision.
    pub rng: SimRng,

    /// Set at the end of construction; cleared by nothing in scope today.
    pub running: bool,
}

impl SugarscapeModel {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    pub fn step(&mut self) -> SimResult<()> {
        let order = self.schedule.activation_order(&mut self.rng);
        for entity in order {
            match entity {
                Entity::Patch(id) => self.patches[id.index()].regrow(),
                Entity::Forager(id) => self.step_forager(id)?,
            }
        }

        self.schedule.advance();
        self.metrics.collect(self.schedule.time(), &self.schedule);

        if self.config.verbose {
            println!("[{}, {}]", self.schedule.time().0, self.living_foragers());
        }
        Ok(())
    }

    /// Run `step_count` steps sequentially with no observer callbacks.
    pub fn run_model(&mut self, step_count: u64) -> SimResult<()> {
        self.run_with(step_count, &mut NoopObserver)
    }

    /// Run `step_count` steps, invoking observer hooks at step boundaries.
    ///
    /// When `config.verbose` is set, banner lines with the starting and
    /// ending living-forager counts are printed before the first and after
    /// the last step.
    pub fn run_with<O: ModelObserver>(
        &mut self,
        step_count: u64,
        observer: &mut O,
    ) -> SimResult<()> {
        if self.config.verbose {
            println!("Initial number of foragers: {}", self.living_foragers());
        }

        for _ in 0..step_count {
            observer.on_step_start(self.schedule.time());
            self.step()?;
            observer.on_step_end(self.schedule.time(), self.living_foragers());
        }
        observer.on_run_end(self.schedule.time());

        if self.config.verbose {
            println!();
            println!("Final number of foragers: {}", self.living_foragers());
        }
        Ok(())
    }

    /// Living foragers right now, as reported by the schedule.
    #[inline]
    pub fn living_foragers(&self) -> usize {
        self.schedule.count(EntityKind::Forager)
    }

    /// The current tick.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.schedule.time()
    }

    // ── One forager's activation ──────────────────────────────────────────

    /// Move, harvest, and possibly die.  Each phase observes all effects of
    /// earlier activations this tick — sequential by design of the
    /// activation discipline.
    fn step_forager(&mut self, id: ForagerId) -> SimResult<()> {
        if !self.foragers[id.index()].alive {
            return Ok(());
        }

        // Move to the best visible cell (possibly the current one).
        let from = self.foragers[id.index()].pos;
        let dest = self.foragers[id.index()].choose_destination(
            &self.grid,
            &self.patches,
            &mut self.rng,
        );
        if dest != from {
            self.grid.relocate(Entity::Forager(id), from, dest)?;
            self.foragers[id.index()].pos = dest;
        }

        // Harvest the cell and pay metabolism.
        let cell = self.grid.cell_index(dest);
        let starved = {
            let forager = &mut self.foragers[id.index()];
            forager.harvest(&mut self.patches[cell]);
            forager.is_starved()
        };

        // Starvation: remove from grid and schedule immediately so later
        // activations this tick already see the cell vacated.
        if starved {
            self.foragers[id.index()].alive = false;
            self.grid.remove(Entity::Forager(id), dest)?;
            self.schedule.remove(Entity::Forager(id))?;
        }
        Ok(())
    }
}
