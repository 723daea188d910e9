//! Fluent builder for constructing a [`SugarscapeModel`].

use sugar_agent::{Forager, SugarPatch};
use sugar_core::{Entity, EntityKind, ForagerId, GridPos, ModelConfig, PatchId, SimRng};
use sugar_grid::{MultiGrid, SugarMap};
use sugar_output::DataCollector;
use sugar_schedule::TypeSchedule;

use crate::{FORAGER_SERIES, SimError, SimResult, SugarscapeModel};

/// Fluent builder for [`SugarscapeModel`].
///
/// # Required inputs
///
/// - [`ModelConfig`] — grid dimensions, population, seed, verbosity
/// - [`SugarMap`] — the resource-capacity matrix; its dimensions must match
///   the configured grid exactly
///
/// # Example
///
/// ```rust,ignore
/// let map = SugarMap::from_path(Path::new("sugar-map.txt"))?;
/// let mut model = ModelBuilder::new(ModelConfig::default())
///     .sugar_map(map)
///     .build()?;
/// model.run_model(DEFAULT_STEP_COUNT)?;
/// ```
pub struct ModelBuilder {
    config: ModelConfig,
    map: Option<SugarMap>,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self { config, map: None }
    }

    /// Supply the resource-distribution map.
    pub fn sugar_map(mut self, map: SugarMap) -> Self {
        self.map = Some(map);
        self
    }

    /// Validate inputs, populate the world, and return a ready-to-run model.
    ///
    /// Construction order matters for reproducibility: patches are created
    /// in row-major cell order, then foragers in ID order, each drawing
    /// position and attributes from the shared RNG in a fixed sequence.
    pub fn build(self) -> SimResult<SugarscapeModel> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        let config = self.config;
        let map = self.map.ok_or(SimError::MissingMap)?;

        if map.dimensions() != (config.width, config.height) {
            let (got_width, got_height) = map.dimensions();
            return Err(SimError::MapDimensionMismatch {
                width: config.width,
                height: config.height,
                got_width,
                got_height,
            });
        }

        // ── Collaborators ─────────────────────────────────────────────────
        let mut rng = SimRng::new(config.seed);
        let mut grid = MultiGrid::new(config.width, config.height);
        let mut schedule = TypeSchedule::new();

        let mut metrics = DataCollector::new();
        metrics.register(FORAGER_SERIES, |s: &TypeSchedule| {
            s.count(EntityKind::Forager) as f64
        });

        // ── Sugar patches: one per cell, capacity from the map ────────────
        let mut patches = Vec::with_capacity(config.cell_count());
        for y in 0..config.height {
            for x in 0..config.width {
                let pos = GridPos::new(x, y);
                let id = PatchId(patches.len() as u32);
                patches.push(SugarPatch::new(pos, map.capacity_at(pos)));
                grid.place(Entity::Patch(id), pos)?;
                schedule.register(Entity::Patch(id));
            }
        }

        // ── Foragers: random placement, with replacement ──────────────────
        let mut foragers = Vec::with_capacity(config.initial_population as usize);
        for i in 0..config.initial_population {
            let x = rng.gen_range(0..config.width);
            let y = rng.gen_range(0..config.height);
            let pos = GridPos::new(x, y);
            let id = ForagerId(i);
            foragers.push(Forager::draw(pos, &mut rng));
            grid.place(Entity::Forager(id), pos)?;
            schedule.register(Entity::Forager(id));
        }

        // ── Step-0 snapshot ───────────────────────────────────────────────
        let mut model = SugarscapeModel {
            config,
            grid,
            schedule,
            patches,
            foragers,
            metrics,
            rng,
            running: true,
        };
        model.metrics.collect(model.schedule.time(), &model.schedule);

        Ok(model)
    }
}
