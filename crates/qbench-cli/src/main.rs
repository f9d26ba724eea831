//! qbench Command-Line Interface
//!
//! Inspect the device and native gateset catalog that benchmark compilation
//! targets are drawn from.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use qbench_catalog::{CatalogConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{common, device, devices, gateset, gatesets, resolve, version};

/// qbench - device and gateset catalog for quantum benchmark compilation
#[derive(Parser)]
#[command(name = "qbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog configuration file (YAML)
    #[arg(short, long, global = true, env = "QBENCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog devices
    Devices,

    /// Show a device target
    Device {
        /// Device name (see `qbench devices`)
        name: String,

        /// Print the full target as JSON
        #[arg(long)]
        json: bool,
    },

    /// List native gatesets
    Gatesets,

    /// Show a native gateset scaffolded to a qubit count
    Gateset {
        /// Gateset name (see `qbench gatesets`)
        name: String,

        /// Number of qubits (defaults to the configured width)
        #[arg(short, long)]
        num_qubits: Option<u32>,

        /// Print the full target as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the target a compilation request would use
    Resolve {
        /// Benchmark level (alg, indep, nativegates, mapped or 0-3)
        #[arg(short, long)]
        level: String,

        /// Gateset or device name
        #[arg(short, long)]
        target: Option<String>,

        /// Circuit width
        #[arg(short, long)]
        num_qubits: u32,

        /// Optimization level (0-3)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        opt_level: i64,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match CatalogConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose, &config.logging);

    let catalog = common::build_catalog(config);

    // Execute command
    let result = match cli.command {
        Commands::Devices => devices::execute(&catalog),
        Commands::Device { name, json } => device::execute(&catalog, &name, json),
        Commands::Gatesets => gatesets::execute(&catalog),
        Commands::Gateset {
            name,
            num_qubits,
            json,
        } => gateset::execute(&catalog, &name, num_qubits, json),
        Commands::Resolve {
            level,
            target,
            num_qubits,
            opt_level,
        } => resolve::execute(&catalog, &level, target.as_deref(), num_qubits, opt_level),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
