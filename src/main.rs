use std::path::PathBuf;
use std::process::ExitCode;

use backdrop::prelude::*;
use clap::Parser;

#[derive(Parser)]
#[command(name = "backdrop")]
#[command(about = "Interactive particle field and triangle swarm in a window", long_about = None)]
struct Cli {
    /// JSON config file; defaults are used for anything it leaves out
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match EffectConfig::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EffectConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match Stage::new().with_config(config).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
