use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "numlist", bin_name = "numlist", version)]
#[command(about = "Interactive menu for managing a list of integers", long_about = None)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// File the export option writes to
    #[arg(long, value_name = "PATH")]
    pub export_file: Option<PathBuf>,

    /// Start with an empty list instead of the seed
    #[arg(long)]
    pub empty: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
