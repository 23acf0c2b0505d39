//! Microbench - Development Tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use microbench_core::workloads::Workload;
use microbench_tools::{scaffold, validate};

#[derive(Parser)]
#[command(name = "microbench")]
#[command(about = "Scaffold and configure Criterion micro-benchmarks")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a bench config file
    Validate {
        /// Path to RON config file
        #[arg(default_value = "bench.ron")]
        path: PathBuf,
    },

    /// Create a new bench file from the template
    New {
        /// Bench target name (snake_case)
        name: String,

        /// Placeholder workload to time
        #[arg(short, long, default_value = "string")]
        workload: Workload,

        /// Directory to write the bench file into
        #[arg(short, long, default_value = "benches")]
        dir: PathBuf,
    },

    /// List available placeholder workloads
    List,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating bench config: {}", path.display());
            match validate::validate_config_file(&path) {
                Ok(_) => tracing::info!("Validation passed"),
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::New {
            name,
            workload,
            dir,
        } => {
            let created = scaffold::bench_manifest_entry(&name).and_then(|entry| {
                scaffold::write_template(&dir, &name, workload).map(|path| (path, entry))
            });
            match created {
                Ok((path, entry)) => {
                    println!("Created {}", path.display());
                    println!();
                    println!("Add this to Cargo.toml:");
                    println!();
                    print!("{entry}");
                }
                Err(e) => {
                    tracing::error!("Could not create bench: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List => {
            for workload in Workload::all() {
                println!("{:<8} {}", workload.name(), workload.description());
            }
        }
    }
}
