//! Pallet allocation runner CLI

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use u_pallet::{AllocationResult, Config, PalletPacker, Solver};
use u_pallet_cli::{JobParser, PalletJob, Report};

#[derive(Parser)]
#[command(name = "pallet-runner")]
#[command(about = "Allocates box orders onto pallets layer by layer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in AZ job (42 x 42 x 90 pallet)
    Demo {
        /// Replace the built-in order with a CSV file (name,qty per line)
        #[arg(long)]
        order_csv: Option<PathBuf>,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Run a job from a JSON file
    Run {
        /// Path to the JSON job file
        file: PathBuf,

        /// Replace the job's order with a CSV file (name,qty per line)
        #[arg(long)]
        order_csv: Option<PathBuf>,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Write the built-in job as JSON, as a starting point for new jobs
    Template {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunOptions {
    /// Charge every layer this height and cap layers at floor(pallet height / h)
    #[arg(long)]
    uniform_height: Option<f64>,

    /// Skip the gap-fill pass after greedy placement
    #[arg(long)]
    no_gap_fill: bool,

    /// Output file for the full result (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunOptions {
    fn config(&self) -> Config {
        let config = Config::new().with_gap_fill(!self.no_gap_fill);
        match self.uniform_height {
            Some(h) => config.with_uniform_layer_height(h),
            None => config,
        }
    }
}

/// Initialize tracing for log output.
///
/// Enable with `RUST_LOG=u_pallet_d3=debug` or `RUST_LOG=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn load_order(job: PalletJob, order_csv: Option<&Path>) -> anyhow::Result<PalletJob> {
    match order_csv {
        Some(path) => {
            let order = JobParser::new().parse_order_file(path)?;
            log::info!("loaded {} order lines from {}", order.len(), path.display());
            Ok(job.with_order(&order))
        }
        None => Ok(job),
    }
}

fn run_job(job: &PalletJob, options: &RunOptions) -> anyhow::Result<()> {
    let info = job.info();
    println!(
        "Job '{}': {} box types, {} boxes ordered",
        info.name, info.box_types, info.total_boxes
    );

    let packer = PalletPacker::new(options.config());
    let start = Instant::now();
    let result: AllocationResult = packer.solve(&job.bounds, &job.catalog(), &job.order())?;
    let elapsed_ms = start.elapsed().as_millis();

    print!("{}", Report(&result));
    println!("Computed in {}ms", elapsed_ms);

    if let Some(path) = &options.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(path, json)?;
        println!("Result saved to: {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { order_csv, options } => {
            let job = load_order(PalletJob::default_job(), order_csv.as_deref())?;
            run_job(&job, &options)?;
        }

        Commands::Run {
            file,
            order_csv,
            options,
        } => {
            let job = JobParser::new().parse_file(&file)?;
            let job = load_order(job, order_csv.as_deref())?;
            run_job(&job, &options)?;
        }

        Commands::Template { output } => {
            let json = serde_json::to_string_pretty(&PalletJob::default_job())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Template saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}
