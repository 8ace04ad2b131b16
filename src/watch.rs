//! File-backed document observation.
//!
//! A saved page stands in for the live document. The watcher subscribes to filesystem events for
//! the directory holding the page and feeds every change to the page into a [`Debouncer`], so a
//! burst of writes produces a single pass once the file has settled. The directory is watched
//! rather than the file so that editors which save by renaming a temporary file are still seen.
//! Removal alone is not a change.

use crate::debounce::Debouncer;
use crate::error::Result;
use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Watches one file for modifications.
pub struct FileWatcher {
    path: PathBuf,
    name: Option<OsString>,
    events: Receiver<notify::Result<Event>>,
    debouncer: Debouncer,
    // Dropping the watcher ends the event stream.
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Starts watching from the file's current state, which counts as already seen.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory containing `path` cannot be watched.
    pub fn new(path: impl Into<PathBuf>, quiet: Duration) -> Result<Self> {
        let path = path.into();
        let (tx, events) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            NotifyConfig::default(),
        )?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %dir.display(), "watching directory");

        Ok(Self {
            name: path.file_name().map(OsString::from),
            path,
            events,
            debouncer: Debouncer::new(quiet),
            _watcher: watcher,
        })
    }

    #[must_use]
    /// Path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Waits up to `timeout` for filesystem events and reports whether a re-extraction pass
    /// should run now.
    ///
    /// # Errors
    ///
    /// Returns an error if the event stream has closed.
    pub fn wait(&mut self, timeout: Duration) -> Result<bool> {
        match self.events.recv_timeout(timeout) {
            Ok(res) => self.record(res, Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(notify::Error::generic("file watcher stopped").into());
            }
        }
        Ok(self.poll(Instant::now()))
    }

    /// Drains events that have already arrived and reports whether a pass should run at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        while let Ok(res) = self.events.try_recv() {
            self.record(res, now);
        }
        self.debouncer.fire(now)
    }

    fn record(&mut self, res: notify::Result<Event>, now: Instant) {
        match res {
            Ok(event) if self.concerns(&event) => {
                tracing::trace!(path = %self.path.display(), kind = ?event.kind, "change detected");
                self.debouncer.notify(now);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("file watcher error: {e}"),
        }
    }

    fn concerns(&self, event: &Event) -> bool {
        let changed = matches!(
            event.kind,
            EventKind::Any | EventKind::Create(_) | EventKind::Modify(_)
        );
        changed
            && event
                .paths
                .iter()
                .any(|p| p.file_name() == self.name.as_deref())
    }
}

#[cfg(test)]
#[path = "tests/watch.rs"]
mod tests;
