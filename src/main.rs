mod commands;

use clap::{Parser, Subcommand};
use railjson_gen::core::config::GeneratorConfig;
use railjson_gen::core::error::{InfraError, InfraResult, print_error};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build railway infrastructure descriptions into RailJson documents
#[derive(Parser)]
#[command(name = "railjson")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Enable debug logging (RUST_LOG overrides)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  // ============================================================================
  // Export
  // ============================================================================
  /// Validate a description and write its RailJson document
  Generate {
    /// Infrastructure description (.toml or .json)
    input: PathBuf,
    /// Output file (default: output.path from railjson.toml, else <INPUT>.railjson.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write the document even if checks fail
    #[arg(long)]
    skip_checks: bool,
    /// Print the summary in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Run validation checks on a description
  Check {
    /// Infrastructure description (.toml or .json)
    input: PathBuf,
    /// Also run expensive checks (track connectivity)
    #[arg(long)]
    thorough: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
  },

  // ============================================================================
  // Inspection
  // ============================================================================
  /// Show version compatibility and collection counts of a RailJson document
  Inspect {
    /// RailJson document to read
    document: PathBuf,
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the RailJson schema version written by this build
  SchemaVersion,

  // ============================================================================
  // Setup
  // ============================================================================
  /// Write a default railjson.toml in the current directory
  Init {
    /// Overwrite an existing configuration
    #[arg(short, long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  use anstyle::{AnsiColor, Style};

  let paint = |color: AnsiColor| Style::new().fg_color(Some(color.into()));
  let heading = paint(AnsiColor::Yellow).bold().underline();

  clap::builder::Styles::styled()
    .usage(heading)
    .header(heading)
    .literal(paint(AnsiColor::Green))
    .invalid(paint(AnsiColor::Red).bold())
    .error(paint(AnsiColor::Red).bold())
    .valid(paint(AnsiColor::Green).bold().underline())
    .placeholder(paint(AnsiColor::White))
}

fn init_logging(verbose: bool) {
  let level = if verbose {
    tracing::Level::DEBUG
  } else {
    tracing::Level::WARN
  };
  let filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let current_dir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(InfraError::Io(e).context("Failed to get current directory")),
  };

  // Not loaded for init: it must run next to a broken railjson.toml
  let load_config = || -> InfraResult<GeneratorConfig> { GeneratorConfig::load_or_default(&current_dir) };

  let result = match cli.command {
    // Export
    Commands::Generate {
      input,
      output,
      skip_checks,
      json,
    } => load_config().and_then(|config| commands::run_generate(&config, &input, output, skip_checks, json)),
    Commands::Check {
      input,
      thorough,
      json,
      strict,
    } => load_config().and_then(|config| commands::run_check(&config, &input, thorough, json, strict)),

    // Inspection
    Commands::Inspect { document, json } => commands::run_inspect(&document, json),
    Commands::SchemaVersion => commands::run_schema_version(),

    // Setup
    Commands::Init { force } => commands::run_init(&current_dir, force),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: InfraError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().code());
}
