//! knightstar — find and display a shortest knight path.

use std::io;
use std::process::ExitCode;

use knightstar_lib::{Config, Reporter, report};
use knightstar_paths::{ChessStar, SearchOutcome};
use log::{info, warn};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    info!(
        "searching {} -> {} with a budget of {} steps",
        config.start, config.finish, config.max_depth
    );

    let mut search = ChessStar::new(config.start, config.finish);
    let mut reporter = Reporter::new(io::stdout().lock(), config.color.enabled());
    let outcome = search.step(config.max_depth, &mut reporter);
    let mut out = reporter.finish()?;

    match outcome {
        SearchOutcome::Found(path) => {
            info!("found a {}-move path in {} steps", path.len() - 1, search.steps());
            report::write_path(&mut out, &search, &path)?;
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Exhausted => {
            warn!("open set exhausted after {} steps", search.steps());
            eprintln!("no path from {} to {}", config.start, config.finish);
            Ok(ExitCode::FAILURE)
        }
        SearchOutcome::DepthLimitReached => {
            warn!("step budget of {} spent", config.max_depth);
            eprintln!(
                "no path found within {} steps; raise {}",
                config.max_depth,
                knightstar_lib::config::MAX_DEPTH_VAR
            );
            Ok(ExitCode::from(2))
        }
    }
}
