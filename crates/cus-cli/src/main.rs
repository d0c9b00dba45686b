//! CUs Command-Line Interface
//!
//! Builds Grover controlled-diffuser circuits and reports their gate counts.
//!
//! ```text
//! cus build --inputs 3 --barriers
//! cus build -n 5 --format summary
//! cus count 4
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use cus_cli::commands::build::OutputFormat;
use cus_cli::commands::{build, count, version};

/// CUs - Grover controlled-diffuser circuit builder
#[derive(Parser)]
#[command(name = "cus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a controlled diffuser over N input qubits and one output qubit
    Build {
        /// Number of input qubits
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        inputs: u32,

        /// Wrap the diffuser in barriers
        #[arg(short, long)]
        barriers: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Qasm, env = "CUS_FORMAT")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the gate count of a diffuser over QUBITS qubits (inputs plus output)
    Count {
        /// Total number of qubits
        qubits: usize,

        /// Show the per-gate breakdown
        #[arg(long)]
        breakdown: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build {
            inputs,
            barriers,
            format,
            output,
        } => build::execute(inputs, barriers, format, output.as_deref()),

        Commands::Count { qubits, breakdown } => count::execute(qubits, breakdown),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
