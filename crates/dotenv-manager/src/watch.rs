//! Watch the edited file for external changes.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crossbeam_channel::{Receiver, Sender, unbounded};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::error::Result;

/// Watches the parent directory and reports events that touch the file.
///
/// Watching the directory rather than the file keeps working when editors
/// replace the file by renaming a new one over it, which is also how
/// [`envfile::save_to_path`] writes.
pub struct FileWatcher {
    /// Keeps the OS watch alive.
    _watcher: RecommendedWatcher,
    /// One message per relevant event.
    rx: Receiver<()>,
}

/// True when `event` is a content change to a file named `name`.
fn is_relevant(event: &Event, name: &OsString) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == name.as_os_str()))
}

impl FileWatcher {
    /// Start watching `path`.
    pub fn spawn(path: &Path) -> Result<Self> {
        let target: PathBuf = fs::canonicalize(path)?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = target.file_name().map(OsString::from).unwrap_or_default();

        let (tx, rx): (Sender<()>, Receiver<()>) = unbounded();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_relevant(&event, &name) {
                    debug!(kind = ?event.kind, "watched file touched");
                    let _ignored = tx.send(());
                }
            }
            Err(err) => warn!(%err, "file watch error"),
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(dir = %dir.display(), "watching");

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain pending events; true if there were any.
    pub fn changed(&self) -> bool {
        self.rx.try_iter().count() > 0
    }
}
