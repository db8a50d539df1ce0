//! Loader for the optional status table.

use std::path::Path;

use tracing::{debug, warn};

use crate::{formats::StatusCodeFile, traits::Parser, types::StatusTable};

/// Loads `dir/file_name` as a status table.
///
/// Status metadata is optional, so any failure, including a missing file,
/// yields `None` instead of an error.
pub fn load_status_table(dir: &Path, file_name: &str) -> Option<StatusTable> {
    let path = dir.join(file_name);
    match StatusCodeFile::read_from(&path) {
        Ok(file) => {
            debug!(
                file = %path.display(),
                entries = file.entries.len(),
                "loaded status table"
            );
            Some(file.entries)
        }
        Err(e) if path.is_file() => {
            warn!(file = %path.display(), error = %e, "ignoring undecodable status table");
            None
        }
        Err(_) => {
            debug!(file = %path.display(), "no status table");
            None
        }
    }
}
