use clap::Parser;
use colored::Colorize;

use multitimer::cli::args::{Cli, Commands};
use multitimer::cli::commands::{self, Context};
use multitimer::config::Paths;
use multitimer::error::TimerError;
use multitimer::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TimerError> {
    let cli = Cli::parse();
    let base = Paths::default();

    // The TUI owns the terminal, so its logs go to a file.
    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File(base.log_file.clone()),
        Some(_) => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&target, cli.verbose) {
        eprintln!("{}: {e:#}", "warning".yellow().bold());
    }

    let ctx = Context::resolve(&cli, base);
    let format = cli.output;

    let output = match cli.command {
        None | Some(Commands::Tui) => {
            multitimer::tui::run(&ctx)?;
            String::new()
        }
        Some(Commands::List) => commands::list(&ctx, format)?,
        Some(Commands::Add { label, elapsed }) => commands::add(&ctx, label, elapsed, format)?,
        Some(Commands::Rename { index, label }) => {
            commands::rename(&ctx, index, &label, format)?
        }
        Some(Commands::Remove { index }) => commands::remove(&ctx, index, format)?,
        Some(Commands::Reset { index }) => commands::reset(&ctx, index, format)?,
        Some(Commands::Paths) => commands::paths(&ctx, format)?,
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
