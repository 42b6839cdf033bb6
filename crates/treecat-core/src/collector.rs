use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::config::CollectorConfig;
use crate::error::CollectError;
use crate::report::CollectReport;

/// Walk `config.root` and append one block per matching regular file to
/// `config.output_path`:
///
/// ```text
/// \n\n// === File: <path-relative-to-root> ===\n<file contents>
/// ```
///
/// Traversal is depth-first with siblings in lexicographic file-name order,
/// so output is byte-identical across runs and platforms. A file whose body
/// cannot be read as text keeps its header and gets an
/// `// Error reading file: ...` placeholder instead; the run continues.
/// A missing root, an unwritable sink, or a traversal failure aborts the run
/// and may leave the sink partially written.
pub fn collect(config: &CollectorConfig) -> Result<CollectReport, CollectError> {
    if !config.root.is_dir() {
        return Err(CollectError::RootNotFound {
            path: config.root.clone(),
        });
    }
    if config.extensions.is_empty() {
        return Err(CollectError::NoExtensions);
    }

    let sink = File::create(&config.output_path)?;
    // The sink may itself live under root with a matching extension; resolve
    // it now so traversal can skip it instead of reading it mid-write.
    let sink_id = fs::canonicalize(&config.output_path)?;
    let mut out = BufWriter::new(sink);
    let mut report = CollectReport::default();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches_extension(entry.path(), &config.extensions) {
            tracing::debug!("Skipping {}: extension not included", entry.path().display());
            continue;
        }
        if fs::canonicalize(entry.path()).is_ok_and(|p| p == sink_id) {
            tracing::debug!("Skipping own output file {}", entry.path().display());
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(&config.root)
            .unwrap_or(entry.path());

        write!(out, "\n\n// === File: {} ===\n", rel_path.display())?;
        report.files_written += 1;

        match fs::read_to_string(entry.path()) {
            Ok(contents) => out.write_all(contents.as_bytes())?,
            Err(e) => {
                tracing::warn!("Unreadable file {}: {e}", entry.path().display());
                write!(out, "// Error reading file: {e}")?;
                report.read_errors += 1;
            }
        }
    }

    out.flush()?;
    report.bytes_written = out.get_ref().metadata()?.len();

    tracing::debug!(
        "Snapshot complete: {} file(s), {} byte(s), {} read error(s)",
        report.files_written,
        report.bytes_written,
        report.read_errors
    );
    Ok(report)
}

/// Exact, case-sensitive match of the path's final extension (with its
/// leading dot) against the included set. Files without an extension,
/// dotfiles included, never match.
fn matches_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.contains(&format!(".{ext}")),
        None => false,
    }
}
