mod n2yo;
mod station;
mod web;

use clap::Parser;
use std::process::ExitCode;

use crate::web::Config;

#[derive(Parser)]
#[command(name = "groundlink")]
#[command(about = "Satellite tracking and antenna control gateway")]
struct Cli {
    /// Listen address, overrides TRACK_BIND
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(bind) = cli.bind {
        config.web.bind = bind;
    }

    log::info!(
        "station at {:.4}, {:.4} tracking {}",
        config.station.latitude_deg,
        config.station.longitude_deg,
        config.tracking.default_satellite_id
    );

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
