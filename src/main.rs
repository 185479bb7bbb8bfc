use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use time::UtcOffset;
use tracing::info;

mod app;
mod cli;
mod config;
mod controller;
mod defaults;
mod logging;
mod quotes;
mod screens;
mod state;
mod store;
mod ui;

use crate::cli::Cli;
use crate::config::Config;
use crate::controller::Controller;
use crate::quotes::HttpQuoteSource;
use crate::store::FileStore;

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    // must be read while the process is still single-threaded
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    logging::init(&config.log_file)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    let _guard = runtime.enter();

    let store = FileStore::open(config.store_path())
        .with_context(|| format!("opening store {}", config.store_path().display()))?;
    info!(path = %store.path().display(), "store ready");

    let source = HttpQuoteSource::new(config.quotes_url.clone(), config.fetch_timeout)
        .context("building HTTP client")?;

    let mut controller = Controller::new(Box::new(store), Arc::new(source), config.unlock_delay);
    if config.offline {
        info!("offline: skipping quote request");
    } else {
        controller.load_quotes();
    }

    app::run(&config, controller, offset)
}
