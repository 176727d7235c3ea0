use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quire",
    about = "Quire — line diff and three-way merge for collaborative pages",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show line changes between two page snapshots
    Diff(DiffArgs),
    /// Reconcile two divergent snapshots against their common ancestor
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Old snapshot file, or `-` for an empty page
    pub old: String,
    /// New snapshot file, or `-` for an empty page
    pub new: String,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Common ancestor file, or `-` for an empty page
    pub ancestor: String,
    /// Currently persisted snapshot file, or `-` for an empty page
    pub theirs: String,
    /// Newly submitted snapshot file, or `-` for an empty page
    pub ours: String,
    /// Write the merged page to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
