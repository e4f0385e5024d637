//! # homeboardd — homeboard daemon
//!
//! Composition root for the simulated smart-home dashboard.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the state container (seeded or empty) inside a provider scope
//! - Log a summary whenever the state changes
//! - Feed JSON actions read line by line from stdin to the container
//! - Print the final dashboard summary on EOF or Ctrl-C
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;
mod driver;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use homeboard_app::context::HomeProvider;
use homeboard_app::dashboard::DashboardSummary;
use homeboard_app::store::HomeStore;
use homeboard_domain::state::HomeState;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let provider = if config.store.seed {
        HomeProvider::seeded()?
    } else {
        HomeProvider::new(HomeStore::new(HomeState::default()))
    };
    tracing::info!(seeded = config.store.seed, "state container ready");

    let logger = tokio::spawn(driver::log_changes(provider.store().subscribe()));
    let handle = provider.handle();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                driver::apply_line(&handle, &line)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, shutting down");
                break;
            }
        }
    }

    let summary = DashboardSummary::from_state(&provider.store().state());
    drop(provider);
    logger.await?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
