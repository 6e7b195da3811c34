use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use profnet::{
    profile::Profiler,
    train::TrainConfig,
    workloads::{matrix_chain, sqrt_sum, train_demo},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Workload {
    All,
    Train,
    SqrtSum,
    MatrixChain,
}

/// Runs the toy numeric workloads under a call-timing profiler and writes
/// the report as JSON.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Which workload(s) to run
    #[arg(short, long, value_enum, default_value_t = Workload::All)]
    workload: Workload,
    /// JSON training config; missing fields take their defaults
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Directory the report is written to (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "profiling_output")]
    output_dir: PathBuf,
    /// Name of the report file inside the output directory
    #[arg(short, long, default_value = "profile.json")]
    file_name: String,
    /// Upper bound of the square-root loop
    #[arg(long, value_name = "INT", default_value_t = 100_000)]
    sqrt_n: u64,
    /// Seed for the matrix-chain inputs
    #[arg(long, default_value_t = 42)]
    chain_seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    let runs = |w: Workload| args.workload == Workload::All || args.workload == w;

    let mut profiler = Profiler::new();

    if runs(Workload::SqrtSum) {
        let total = profiler.record("sqrt_sum", || sqrt_sum(args.sqrt_n));
        info!("sqrt_sum({}) = {total}", args.sqrt_n);
    }
    if runs(Workload::MatrixChain) {
        let result = profiler.record("matrix_chain", || matrix_chain(args.chain_seed))?;
        info!("matrix_chain -> {:?}", result.shape());
    }
    if runs(Workload::Train) {
        let loss = profiler.record("train", || train_demo(&config))?;
        if let Some(loss) = loss {
            info!("final training loss = {loss:.6}");
        }
    }

    let report = profiler.report();
    print!("{report}");
    let path = report.save_json(&args.output_dir, &args.file_name)?;
    println!("Profile output saved to: {}", path.display());
    Ok(())
}
