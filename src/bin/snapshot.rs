use std::path::PathBuf;
use std::process::ExitCode;

use backdrop::config::EffectConfig;
use backdrop::snapshot::Script;
use backdrop::SnapshotError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "backdrop-snapshot")]
#[command(about = "Render a scripted pointer session to a PNG", long_about = None)]
struct Cli {
    /// Output PNG file
    #[arg(short, long, default_value = "backdrop.png")]
    output: PathBuf,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width, defaults to the configured window width
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height, defaults to the configured window height
    #[arg(long)]
    height: Option<u32>,

    /// Frames to simulate before rendering
    #[arg(short, long, default_value_t = 120)]
    frames: u32,

    /// RNG seed
    #[arg(short, long, default_value_t = 1)]
    seed: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match render(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(cli: &Cli) -> Result<(), SnapshotError> {
    let mut config = match &cli.config {
        Some(path) => EffectConfig::load(path)?,
        None => EffectConfig::default(),
    };
    config.seed = Some(cli.seed);

    let defaults = Script::for_config(&config);
    let script = Script {
        width: cli.width.unwrap_or(defaults.width),
        height: cli.height.unwrap_or(defaults.height),
        frames: cli.frames,
        ..defaults
    };

    script.write_png(config, &cli.output)
}
