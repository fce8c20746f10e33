#![warn(missing_docs)]

//! Entry point for the `dotenv-manager` binary.

mod app;
mod cli;
mod error;
mod keys;
mod render;
mod settings;
mod theme;
mod watch;

use std::{fs::File, process, sync::Mutex};

use clap::Parser;
use editor::State;
use logging::forward;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    app::App,
    cli::Cli,
    error::Result,
    settings::Settings,
    theme::Theme,
    watch::FileWatcher,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, load the file and run the editor.
fn run() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so the fmt layer only writes to a file.
    let file_layer = match &cli.log.log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(File::create(path)?)),
        ),
        None => None,
    };
    registry()
        .with(logging::env_filter_from_spec(&cli.log.spec()))
        .with(file_layer)
        .with(forward::layer())
        .try_init()
        .ok();

    let settings = Settings::load(cli.config.as_deref())?;
    let theme = Theme::from_spec(&settings.theme)?;
    let (text, doc) = app::read_document(&cli.file)?;
    info!(path = %cli.file.display(), groups = doc.model.len(), "loaded");
    let state = State::new(doc, cli.file.clone()).with_glyphs(settings.glyphs);

    let watcher = if cli.no_watch {
        None
    } else {
        FileWatcher::spawn(&cli.file)
            .inspect_err(|err| warn!(%err, "not watching for external changes"))
            .ok()
    };

    let (tx, rx) = crossbeam_channel::bounded(64);
    forward::set_sink(tx);
    let result = App::new(state, theme, text, watcher, rx, cli.tick_rate).run();
    forward::clear_sink();

    if let Some(msg) = result? {
        println!("{msg}");
    }
    let dropped = forward::dropped();
    if dropped > 0 {
        info!(dropped, "log events not shown in the status line");
    }
    Ok(())
}
