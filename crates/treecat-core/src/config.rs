use std::collections::BTreeSet;
use std::path::PathBuf;

/// Explicit configuration for one collector run.
///
/// The root is read-only for the run's duration; the output path is owned
/// exclusively by the run and truncated when the run starts.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    /// Included extensions, each stored with its leading dot (`.js`).
    /// Membership is exact and case-sensitive.
    pub extensions: BTreeSet<String>,
}

impl CollectorConfig {
    /// Build a config, normalizing each extension to its dotted form.
    pub fn new<I, S>(root: PathBuf, output_path: PathBuf, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            root,
            output_path,
            extensions: extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
        }
    }
}

/// Accept `js` and `.js` alike at the CLI edge; the stored form always
/// carries the dot so the membership test itself never normalizes.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
