use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML file with simulation settings (instruments, capital, agent policy)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after this many rounds. Runs until 'q' or Ctrl-C when omitted.
    #[arg(long)]
    pub rounds: Option<u64>,

    /// Milliseconds between rounds, overrides the configured interval
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Seed for the price feed, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wait for Enter before every round instead of running on a timer
    #[arg(long, default_value_t = false)]
    pub step: bool,
}
