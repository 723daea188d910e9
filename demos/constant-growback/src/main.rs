//! constant-growback — the classic sugarscape scenario.
//!
//! 100 foragers on a 50×50 two-peak sugar landscape, 200 steps.  Foragers
//! climb toward the mounds, the population thins out as the badlands
//! starve their occupants, and the survivor count settles near the
//! landscape's carrying capacity.

mod map;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sugar_core::{ModelConfig, Tick};
use sugar_grid::SugarMap;
use sugar_output::export_csv;
use sugar_sim::{DEFAULT_STEP_COUNT, ModelBuilder, ModelObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH: u32 = 50;
const HEIGHT: u32 = 50;
const INITIAL_POPULATION: u32 = 100;
const SEED: u64 = 42;
const PROGRESS_INTERVAL: u64 = 20;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl ModelObserver for ProgressPrinter {
    fn on_step_end(&mut self, tick: Tick, living: usize) {
        if tick.0.is_multiple_of(self.interval) {
            println!("{tick}: {living} foragers alive");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== constant-growback — sugarscape ===");
    println!(
        "Grid: {WIDTH}x{HEIGHT}  |  Foragers: {INITIAL_POPULATION}  |  Steps: {DEFAULT_STEP_COUNT}  |  Seed: {SEED}"
    );
    println!();

    // 1. Build the two-peak sugar distribution and parse it like a map file.
    let map_text = map::two_peak_map(WIDTH, HEIGHT);
    let map = SugarMap::from_reader(Cursor::new(map_text))?;
    println!(
        "Sugar map: {}x{}, total capacity {}",
        map.width(),
        map.height(),
        map.total_capacity()
    );

    // 2. Construct the model.
    let config = ModelConfig {
        width: WIDTH,
        height: HEIGHT,
        initial_population: INITIAL_POPULATION,
        seed: SEED,
        verbose: false,
    };
    let mut model = ModelBuilder::new(config).sugar_map(map).build()?;
    println!("Initial foragers: {}", model.living_foragers());
    println!();

    // 3. Run.
    let t0 = Instant::now();
    model.run_with(
        DEFAULT_STEP_COUNT,
        &mut ProgressPrinter { interval: PROGRESS_INTERVAL },
    )?;
    let elapsed = t0.elapsed();
    println!();

    // 4. Export the metrics time series.
    std::fs::create_dir_all("output/constant-growback")?;
    let csv_path = Path::new("output/constant-growback/metrics.csv");
    export_csv(&model.metrics, csv_path)?;

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  survivors : {} / {}",
        model.living_foragers(),
        INITIAL_POPULATION
    );
    println!(
        "  metrics   : {} rows -> {}",
        model.metrics.sample_count(),
        csv_path.display()
    );
    println!();

    // 6. Survivor table (first ten).
    println!(
        "{:<10} {:<10} {:<8} {:<11} {:<7}",
        "Forager", "Position", "Stock", "Metabolism", "Vision"
    );
    println!("{}", "-".repeat(48));
    for (i, f) in model.foragers.iter().enumerate().filter(|(_, f)| f.alive).take(10) {
        println!(
            "{:<10} {:<10} {:<8} {:<11} {:<7}",
            i,
            f.pos.to_string(),
            f.sugar,
            f.metabolism,
            f.vision
        );
    }

    Ok(())
}
