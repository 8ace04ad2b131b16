//! Serialisable outline snapshots and the sinks that receive them.
//!
//! Units hold references into the parsed document, which cannot leave the crate. Exporting
//! strips those references and truncates long text so that stored snapshots stay small. Each
//! extraction pass produces a whole new snapshot which replaces the previous one in the sink.

use crate::classify::truncate;
use crate::error::{Error, Result};
use crate::section::Section;
use crate::unit::{Role, Unit, UnitKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Unit stripped of its source reference.
pub struct ExportedUnit {
    /// Identifier used to locate the unit in the live document.
    pub id: String,
    /// Author of the enclosing message.
    pub role: Role,
    /// Display text, truncated for storage.
    pub text: String,
    #[serde(flatten)]
    /// Structural type, flattened into `contentType`, `headingLevel` and `language`.
    pub kind: UnitKind,
    /// Nesting level under preceding headings.
    pub depth: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Section of exported units.
pub struct ExportedSection {
    /// Identifier derived from the message that opened the section.
    pub id: String,
    /// Section title, truncated for storage.
    pub title: String,
    /// Units in document order.
    pub units: Vec<ExportedUnit>,
}

impl ExportedUnit {
    #[must_use]
    /// Copies a unit without its source reference, truncating text beyond `max_len` characters.
    pub fn from_unit(unit: &Unit<'_>, max_len: usize) -> Self {
        Self {
            id: unit.id.clone(),
            role: unit.role,
            text: truncate(&unit.text, max_len),
            kind: unit.kind.clone(),
            depth: unit.depth,
        }
    }
}

#[must_use]
/// Converts extracted sections into a snapshot suitable for storage.
pub fn export(sections: &[Section<'_>], max_len: usize) -> Vec<ExportedSection> {
    sections
        .iter()
        .map(|section| ExportedSection {
            id: section.id.clone(),
            title: truncate(&section.title, max_len),
            units: section
                .units
                .iter()
                .map(|unit| ExportedUnit::from_unit(unit, max_len))
                .collect(),
        })
        .collect()
}

/// Loads a snapshot previously written by a sink.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a snapshot.
pub fn load_snapshot(path: &Path) -> Result<Vec<ExportedSection>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

/// Receiver of the latest outline snapshot.
pub trait OutlineSink {
    /// Replaces whatever the sink held with a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    fn publish(&mut self, snapshot: &[ExportedSection]) -> Result<()>;
}

/// Writes each snapshot as pretty-printed JSON to a stream, one document per pass.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    /// Wraps a writer such as stdout.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutlineSink for JsonSink<W> {
    fn publish(&mut self, snapshot: &[ExportedSection]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, snapshot)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps a file holding only the most recent snapshot.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Targets the given path, which is overwritten on every publish.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutlineSink for FileSink {
    fn publish(&mut self, snapshot: &[ExportedSection]) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        tracing::debug!(path = %self.path.display(), sections = snapshot.len(), "snapshot written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
