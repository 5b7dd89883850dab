use anyhow::{Context, Result};
use tracing::{info, warn};

use segregator::{Config, EventQueue, Segregator, WatchEvent};

use crate::cli::Cli;

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let (config, warnings) =
        Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    for warning in &warnings {
        let location = warning
            .line
            .map(|line| format!("{}:{}", warning.file.display(), line))
            .unwrap_or_else(|| warning.file.display().to_string());
        match &warning.suggestion {
            Some(suggestion) => warn!(
                "Unknown config key '{}' in {location} (did you mean '{suggestion}'?)",
                warning.key
            ),
            None => warn!("Unknown config key '{}' in {location}", warning.key),
        }
    }

    let dirs = config
        .with_env_overrides()
        .merge(cli.overrides())
        .directories();
    let segregator = Segregator::new(dirs);
    let json = cli.json;
    let render = move |event: WatchEvent| render_event(&event, json);

    if cli.once {
        segregator.run_once(render).context("sweep failed")?;
        return Ok(());
    }

    let queue = EventQueue::new();
    let shutdown = queue.shutdown_handle();
    ctrlc::set_handler(move || shutdown.request()).context("failed to set Ctrl+C handler")?;

    segregator.run(queue, render).context("watcher stopped")?;
    Ok(())
}

/// NDJSON on stdout, or a log line for the events the library does not log.
fn render_event(event: &WatchEvent, json: bool) {
    if json {
        println!("{}", event.to_json());
        return;
    }

    match event {
        WatchEvent::SweepComplete {
            moved,
            unmatched,
            failed,
        } => info!("Initial sweep: {moved} moved, {unmatched} left in place, {failed} failed"),
        WatchEvent::Watching { source } => info!("Watching {source} (Ctrl+C to stop)"),
        WatchEvent::Shutdown { reason } => info!(?reason, "Segregator stopped"),
        _ => {}
    }
}
