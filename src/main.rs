use anyhow::Context;
use clap::Parser;
use course_planner::utils::{logger, validation::Validate};
use course_planner::{CliConfig, Session};
use std::io;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-planner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    // A failed initial load is reported like any other load; the session
    // still starts with whatever the catalog holds (nothing, in that case).
    if let Some(path) = &config.data_file {
        session.load_from(Path::new(path))?;
    }

    session.run().context("Interactive session failed")?;

    Ok(())
}
