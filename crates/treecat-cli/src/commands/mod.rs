pub mod collect;
pub mod version;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a directory tree and write the snapshot file
    Collect(collect::CollectArgs),
    /// Print version information
    Version,
}
