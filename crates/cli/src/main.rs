mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vlock_lib::lock::LockStore;
use vlock_lib::platform::{OsFilesystem, VoltPaths};

use crate::output::OutputFormat;

/// vlock - consistency-checked lock file for installed plugins
#[derive(Parser)]
#[command(name = "vlock")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Data root holding lock.json and repos/ (default: $VOLTPATH or ~/volt)
  #[arg(long, global = true, value_name = "DIR")]
  volt_path: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Load lock.json and report whether it is consistent
  Check,

  /// Print the current lock state
  Show {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Write an initial lock.json if none exists
  Init,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let paths = cli.volt_path.map(VoltPaths::at).unwrap_or_else(VoltPaths::current);
  debug!(root = ?paths.root(), "using data root");
  let store = LockStore::new(paths, OsFilesystem);

  match cli.command {
    Commands::Check => cmd::cmd_check(&store),
    Commands::Show { output } => cmd::cmd_show(&store, output),
    Commands::Init => cmd::cmd_init(&store),
  }
}
