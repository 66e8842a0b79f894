//! CSV export of user records.
//!
//! # Responsibility
//! - Write the record sequence as `ID,Name,Email` rows in store order.
//! - Report I/O failures to the caller instead of terminating.
//!
//! # Invariants
//! - An empty sequence performs no file I/O at all.
//! - Fields are written verbatim; embedded commas or quotes are not
//!   escaped, so a field containing `,` shifts the columns of its row.
//! - The file handle is scoped to the write and released before return,
//!   on success and on failure alike.

use crate::model::user::User;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// First line of every exported file.
pub const CSV_HEADER: &str = "ID,Name,Email";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export-layer error for file interaction.
#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: io::Error },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Successful export outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The store was empty; no file was touched.
    NothingToExport,
    /// A file was written with this many records.
    Written { path: PathBuf, records: usize },
}

/// Writes `users` to `path` as CSV in current order.
///
/// # Side effects
/// - Creates or truncates `path` when the sequence is non-empty.
/// - Emits `csv_export` logging events with duration and status.
pub fn export_users(users: &[User], path: &Path) -> ExportResult<ExportOutcome> {
    if users.is_empty() {
        info!("event=csv_export module=export status=skipped reason=empty_store");
        return Ok(ExportOutcome::NothingToExport);
    }

    let started_at = Instant::now();
    info!(
        "event=csv_export module=export status=start records={} path={}",
        users.len(),
        path.display()
    );

    match write_rows(users, path) {
        Ok(()) => {
            info!(
                "event=csv_export module=export status=ok records={} duration_ms={} path={}",
                users.len(),
                started_at.elapsed().as_millis(),
                path.display()
            );
            Ok(ExportOutcome::Written {
                path: path.to_path_buf(),
                records: users.len(),
            })
        }
        Err(err) => {
            error!(
                "event=csv_export module=export status=error duration_ms={} path={} error={}",
                started_at.elapsed().as_millis(),
                path.display(),
                err
            );
            Err(ExportError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

fn write_rows(users: &[User], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write!(writer, "{CSV_HEADER}{LINE_ENDING}")?;
    for user in users {
        write!(
            writer,
            "{},{},{}{LINE_ENDING}",
            user.id, user.name, user.email
        )?;
    }

    writer.flush()
}
