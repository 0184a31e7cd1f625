use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use tessella::generators::Pattern;

use crate::config::TessellaConfig;
use crate::io::output::PatternOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Generates the pattern described by `config` and writes `pattern_<algorithm>.json` and
/// `pattern_<algorithm>.svg` to `output_folder`.
pub fn run(config: TessellaConfig, output_folder: &Path) -> Result<PatternOutput> {
    if !output_folder.exists() {
        fs::create_dir_all(output_folder).with_context(|| {
            format!("could not create output folder: {}", output_folder.display())
        })?;
    }

    let algorithm = config.to_algorithm();
    let name = algorithm.name();
    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    info!("[GEN] running {name} with {:?}", config.algorithm);
    let start = Instant::now();
    let pattern = algorithm.execute(&mut rng)?;
    info!(
        "[GEN] generated {} shapes in {:.3}ms",
        pattern.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    if let Pattern::Packing(report) = &pattern {
        let stats = report.stats;
        info!(
            "[PACK] accepted {}/{} ({:.1}%), rejected {} overlapping and {} outside",
            stats.accepted,
            stats.attempts,
            stats.acceptance_rate() * 100.0,
            stats.rejected_overlap,
            stats.rejected_outside
        );
    }

    let svg = io::svg_export::pattern_to_svg(
        &pattern,
        &config.canvas,
        config.svg_draw_options,
        name,
    );
    io::write_svg(&svg, &output_folder.join(format!("pattern_{name}.svg")))?;

    let output = PatternOutput {
        n_shapes: pattern.len(),
        config,
        pattern,
        generated_at: jiff::Timestamp::now().to_string(),
        run_time_sec: EPOCH.elapsed().as_secs_f64(),
    };
    io::write_json(&output, &output_folder.join(format!("pattern_{name}.json")))?;

    Ok(output)
}
