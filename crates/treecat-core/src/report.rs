use serde::Serialize;

/// Counts observable after a completed run. A run that fails fatally
/// produces no report.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CollectReport {
    /// Header + body blocks written to the snapshot.
    pub files_written: usize,
    /// Blocks whose body is the unreadable-file placeholder.
    pub read_errors: usize,
    /// Total size of the snapshot file in bytes.
    pub bytes_written: u64,
}
