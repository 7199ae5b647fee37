use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "multitimer")]
#[command(about = "Several independent stopwatches in one terminal")]
#[command(long_about = "multitimer - several stopwatches in one terminal

Run without a command to open the timer screen. Each timer can be started
and stopped independently; totals can be saved for next time and every
start/stop interval can be exported to CSV.

QUICK START:
  multitimer                 Open the timer screen
  multitimer list            Show saved timers and their totals
  multitimer add \"Email\"     Add a saved timer
  multitimer paths           Show where files are kept

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Saved-timers file (default: ~/.multi_timer_config.json)
    #[arg(long, env = "MULTITIMER_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Directory for CSV exports (default: ~/Desktop)
    #[arg(long, env = "MULTITIMER_EXPORT_DIR", global = true)]
    pub export_dir: Option<PathBuf>,

    /// Settings file (default: ~/.multitimer/config.yaml)
    #[arg(long, env = "MULTITIMER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer screen (default)
    ///
    /// Keys: j/k select, space toggles, a adds, r renames, d removes,
    /// s saves, e exports, q quits.
    Tui,

    /// List saved timers
    ///
    /// Shows each saved timer's label and accumulated time. A missing or
    /// unreadable file lists nothing.
    #[command(alias = "ls")]
    List,

    /// Add a timer to the saved list
    ///
    /// # Examples
    ///
    ///   multitimer add
    ///   multitimer add "Client calls"
    ///   multitimer add "Backfill" --elapsed 5400
    Add {
        /// Label (default: "Timer N")
        label: Option<String>,

        /// Starting accumulated time in seconds
        #[arg(long, default_value_t = 0.0)]
        elapsed: f64,
    },

    /// Rename a saved timer
    Rename {
        /// Position as shown by `list` (1-based)
        index: usize,

        /// New label
        label: String,
    },

    /// Remove a saved timer
    #[command(alias = "rm")]
    Remove {
        /// Position as shown by `list` (1-based)
        index: usize,
    },

    /// Zero saved totals
    Reset {
        /// Position as shown by `list` (1-based); all timers if omitted
        index: Option<usize>,
    },

    /// Show resolved file locations
    Paths,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   multitimer completions zsh > ~/.zsh/completions/_multitimer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
