//! The watch loop

use std::fs;
use std::path::Path;

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, error, info, trace, warn};

use crate::config::Directories;
use crate::error::{SegregatorError, SegregatorResult};
use crate::fs::ensure_directories;
use crate::router::{CreationClock, FileSystemClock, Outcome, Router};

use super::event::{is_vanished, StopReason, SweepSummary, WatchEvent, WatchPhase};
use super::queue::{EventQueue, Signal};

/// Moves jar and xml files out of the watched directory as they appear.
#[derive(Debug, Clone)]
pub struct Segregator<C = FileSystemClock> {
    router: Router<C>,
}

impl Segregator {
    pub fn new(dirs: Directories) -> Self {
        Self::with_router(Router::new(dirs))
    }
}

impl<C: CreationClock> Segregator<C> {
    pub fn with_router(router: Router<C>) -> Self {
        Self { router }
    }

    pub fn directories(&self) -> &Directories {
        self.router.directories()
    }

    /// Ensure directories, sweep once and return without watching.
    pub fn run_once(&self, on_event: impl Fn(WatchEvent)) -> SegregatorResult<SweepSummary> {
        self.initialize(&on_event)?;
        let summary = self.sweep(&on_event);
        on_event(summary.into());
        Ok(summary)
    }

    /// Run until shutdown is requested or the watched directory disappears.
    ///
    /// Only startup failures are returned as errors; problems with a single
    /// file are reported through `on_event` and the loop carries on.
    pub fn run(
        &self,
        queue: EventQueue,
        on_event: impl Fn(WatchEvent),
    ) -> SegregatorResult<StopReason> {
        self.initialize(&on_event)?;

        let source = self.directories().home().to_path_buf();
        let (tx, rx) = queue.into_parts();

        // Registered before the sweep so nothing created during the sweep is
        // missed; entries the sweep already moved are skipped as vanished.
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(Signal::Fs(res));
        })
        .map_err(|source_err| SegregatorError::Watch {
            path: source.clone(),
            source: source_err,
        })?;
        watcher
            .watch(&source, RecursiveMode::NonRecursive)
            .map_err(|source_err| SegregatorError::Watch {
                path: source.clone(),
                source: source_err,
            })?;
        info!("WatchService registered for dir: {}", source.display());

        let summary = self.sweep(&on_event);
        on_event(summary.into());

        enter(WatchPhase::Watching);
        on_event(WatchEvent::Watching {
            source: source.display().to_string(),
        });

        let reason = loop {
            let Ok(signal) = rx.recv() else {
                break StopReason::Disconnected;
            };

            match signal {
                Signal::Shutdown => break StopReason::Requested,
                Signal::Fs(Err(err)) => {
                    error!("Watch event error: {err}");
                    on_event(WatchEvent::EventError {
                        message: err.to_string(),
                    });
                }
                Signal::Fs(Ok(event)) => match disposition(&event) {
                    Disposition::Overflow => {
                        error!("{OVERFLOW_MESSAGE}");
                        on_event(WatchEvent::EventError {
                            message: OVERFLOW_MESSAGE.to_string(),
                        });
                    }
                    Disposition::Created => self.handle_created(&source, event, &on_event),
                    Disposition::Other => {
                        trace!(kind = ?event.kind, "Ignoring non-creation event");
                        if !source.is_dir() {
                            warn!("Watched directory {} is gone", source.display());
                            break StopReason::SourceRemoved;
                        }
                    }
                },
            }
        };

        drop(watcher);
        enter(WatchPhase::Stopped);
        on_event(WatchEvent::Shutdown { reason });
        Ok(reason)
    }

    /// Route every path named by a creation event, one at a time.
    fn handle_created(&self, source: &Path, event: Event, on_event: &impl Fn(WatchEvent)) {
        for path in event.paths {
            let Some(name) = path.file_name() else {
                continue;
            };
            let full_path = source.join(name);
            info!("New file detected in directory: {}", full_path.display());
            on_event(WatchEvent::FileDetected {
                path: full_path.display().to_string(),
            });
            let _ = self.dispatch(&full_path, on_event);
        }
    }

    /// Route every entry currently in the watched directory.
    ///
    /// A directory that cannot be listed is logged and yields an empty
    /// summary.
    pub fn sweep(&self, on_event: &impl Fn(WatchEvent)) -> SweepSummary {
        enter(WatchPhase::Sweeping);
        let source = self.directories().home();
        let mut summary = SweepSummary::default();

        let entries = match fs::read_dir(source) {
            Ok(entries) => entries,
            Err(err) => {
                error!("Cannot list {}: {err}", source.display());
                return summary;
            }
        };

        for entry in entries {
            match entry {
                Ok(entry) => summary.record(&self.dispatch(&entry.path(), on_event)),
                Err(err) => {
                    warn!("Skipping unreadable entry in {}: {err}", source.display());
                    summary.failed += 1;
                }
            }
        }

        debug!(?summary, "Initial sweep finished");
        summary
    }

    fn initialize(&self, on_event: &impl Fn(WatchEvent)) -> SegregatorResult<()> {
        enter(WatchPhase::Initializing);
        let dirs = self.directories();
        on_event(WatchEvent::WatchStarted {
            source: dirs.home().display().to_string(),
            dev: dirs.dev().display().to_string(),
            test: dirs.test().display().to_string(),
        });

        for created in ensure_directories(dirs)? {
            info!("Created directory {}", created.display());
            on_event(WatchEvent::DirectoryCreated {
                path: created.display().to_string(),
            });
        }
        info!("Segregator directories existence has been ensured");
        info!("DEV directory = {}", dirs.dev().display());
        info!("TEST directory = {}", dirs.test().display());
        Ok(())
    }

    /// Process one path and report the result. Never fails the caller.
    fn dispatch(&self, path: &Path, on_event: &impl Fn(WatchEvent)) -> SegregatorResult<Outcome> {
        let result = self.router.process(path);

        match &result {
            Ok(Outcome::Moved {
                from,
                to,
                destination,
            }) => on_event(WatchEvent::FileMoved {
                from: from.display().to_string(),
                to: to.display().to_string(),
                destination: *destination,
            }),
            Ok(Outcome::Unmatched { path }) => on_event(WatchEvent::FileUnmatched {
                path: path.display().to_string(),
            }),
            Err(err) if is_vanished(err) => {
                debug!("{} vanished before it could be routed", path.display());
            }
            Err(err) => {
                warn!("{err}");
                on_event(WatchEvent::FileFailed {
                    path: path.display().to_string(),
                    message: err.to_string(),
                });
            }
        }

        result
    }
}

const OVERFLOW_MESSAGE: &str = "event queue overflowed; some creations may have been missed";

/// How the loop treats one filesystem event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// The backend dropped events; they are not recovered
    Overflow,
    /// Entry creation, including renames into the watched directory
    Created,
    Other,
}

pub(crate) fn disposition(event: &Event) -> Disposition {
    if event.need_rescan() {
        return Disposition::Overflow;
    }
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            Disposition::Created
        }
        _ => Disposition::Other,
    }
}

fn enter(phase: WatchPhase) {
    debug!(?phase, "Entering phase");
}
