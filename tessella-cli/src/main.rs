use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use tessella_cli::config::TessellaConfig;
use tessella_cli::io::cli::Cli;
use tessella_cli::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TessellaConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    let config = match args.algorithm {
        Some(kind) => config.override_algorithm(kind),
        None => config,
    };

    info!("[MAIN] Successfully parsed TessellaConfig: {config:?}");

    let output = tessella_cli::run(config, &args.output_folder)?;

    info!(
        "[MAIN] finished {} ({} shapes) after {:.3}s",
        output.config.algorithm.name(),
        output.n_shapes,
        EPOCH.elapsed().as_secs_f64()
    );
    Ok(())
}
