//! Navigation playground built on the rat-nav router.

mod application;
mod cli;
mod component;
mod destinations;
mod host;
mod modal;
mod nav_path;
mod pages;

use crate::application::Application;
use crate::cli::Cli;
use crate::component::Screen;
use crate::destinations::{register_destinations, Destination};
use crate::host::Host;
use crate::pages::Menu;
use anyhow::Context as _;
use clap::Parser;
use rat_nav::NavRouter;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_file.as_deref())?;

    // Built once here and handed to whatever registers or resolves.
    let router = NavRouter::<Screen>::new();
    register_destinations(&router)?;
    router.ensure_registered(Destination::ALL.iter().copied())?;
    tracing::info!(destinations = router.len(), "destinations registered");

    let mut host = Host::new(Arc::new(router), Box::new(Menu::new()));
    if let Some(key) = &cli.deep_link {
        host.open(key);
    }
    tracing::info!(screen = %host.current_title(), "starting on screen");

    Application::new(Duration::from_millis(cli.tick_ms)).run(host)
}

fn setup_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rat_nav_demo=info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();

    tracing::info!(path = %path.display(), "tracing initialized");
    Ok(())
}
