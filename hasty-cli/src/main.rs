use anyhow::Result;
use clap::{Parser, Subcommand};
use hasty_cli::EmitMode;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hasty", version, about = "HastyUI compiler")]
struct Cli {
    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a .hsty file, or every .hsty file in a directory, to JSX.
    Build {
        /// Path to a .hsty file or a directory
        input: PathBuf,
        /// Output directory (default: target/hasty-gen)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// What to emit: the JSX component or a dump of one pipeline stage
        #[arg(long, value_enum, default_value_t = EmitMode::Jsx)]
        emit: EmitMode,
    },
    /// Rebuild a directory whenever one of its .hsty files changes.
    Watch {
        dir: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Polling interval in milliseconds
        #[arg(long, default_value_t = 300)]
        interval_ms: u64,
    },
    /// Print a .hsty file followed by its compiled output.
    Show { input: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Build {
            input,
            out_dir,
            emit,
        } => {
            for path in hasty_cli::build_cmd(&input, out_dir.as_deref(), emit)? {
                println!("Generated: {}", path.display());
            }
        }
        Commands::Watch {
            dir,
            out_dir,
            interval_ms,
        } => hasty_cli::watch_cmd(&dir, out_dir.as_deref(), Duration::from_millis(interval_ms))?,
        Commands::Show { input } => print!("{}", hasty_cli::show_cmd(&input)?),
    }
    Ok(())
}
