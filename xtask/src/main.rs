mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/smoke).
    Preflight,
    /// Run the release launcher against a stub JDK and check exit status propagation.
    Smoke {
        /// Reuse an existing release build instead of rebuilding.
        #[arg(long, default_value_t = false)]
        no_build: bool,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::Smoke { no_build } => {
            cmd::smoke::run(no_build)?;
        }
    }
    Ok(())
}
