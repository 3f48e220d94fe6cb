use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmds;

#[derive(Parser)]
#[command(name = "builder-gen")]
#[command(about = "Fluent builder generator for marked setter methods", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder sources from candidate manifests
    Generate {
        /// Candidate manifests (YAML, or JSON with a .json extension), one invocation each
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output directory for generated sources
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /// Marker to process, overriding the manifest's own marker
        #[arg(short = 'm', long = "marker", value_name = "NAME")]
        marker: Option<String>,

        /// Print generated sources to stdout instead of writing files
        #[arg(long = "stdout")]
        stdout: bool,

        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /// Validate candidate manifests and show the builders that would be generated
    Check {
        /// Candidate manifests (YAML, or JSON with a .json extension)
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Marker to process, overriding the manifest's own marker
        #[arg(short = 'm', long = "marker", value_name = "NAME")]
        marker: Option<String>,

        /// Enable verbose output
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Generate { verbose, .. } | Commands::Check { verbose, .. } => *verbose,
        }
    }
}

/* RUST_LOG wins; otherwise --verbose turns on debug output */
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    match cli.command {
        Commands::Generate {
            files,
            output_dir,
            marker,
            stdout,
            verbose,
        } => {
            cmds::generate::run(files, output_dir, marker, stdout, verbose)?;
        }

        Commands::Check {
            files,
            marker,
            verbose,
        } => {
            cmds::check::run(files, marker, verbose)?;
        }
    }

    Ok(())
}
