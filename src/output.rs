//! Writes the aggregated result set.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::OutputError;

/// Truncates `path` and writes `lines` joined by `\n`, without a trailing newline.
pub fn write_output(path: &Path, lines: &[String], create_parent: bool) -> Result<(), OutputError> {
    let wrap = |source: std::io::Error| OutputError {
        path: path.to_path_buf(),
        source,
    };

    if create_parent {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(lines.join("\n").as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)
}
