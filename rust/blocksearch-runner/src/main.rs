use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use blocksearch_core::Algorithm;
use blocksearch_runner::{config, Harness, ResultFormat};

/// Smallest grid that fits the fixed start/goal layout.
const MIN_GRID: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "blocksearch-runner", version, about = "Run every search strategy over growing block-world grids")]
struct Args {
    /// Results artifact, created or truncated
    #[arg(long = "out", value_name = "PATH", default_value = "SearchResultsAgent.csv")]
    out: PathBuf,

    #[arg(long = "min-size", value_name = "N", default_value_t = MIN_GRID)]
    min_size: i32,

    #[arg(long = "max-size", value_name = "N", default_value_t = 20)]
    max_size: i32,

    /// Strategy to run (bfs, dfs, ids, astar); repeat for several, defaults to all
    #[arg(long = "algorithm", value_name = "NAME")]
    algorithms: Vec<Algorithm>,

    #[arg(long = "format", value_enum, default_value_t = ResultFormat::Csv)]
    format: ResultFormat,

    /// JSON file with search options
    #[arg(long = "options", value_name = "PATH")]
    options: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long = "log-json")]
    log_json: bool,
}

impl Args {
    fn validate(&self) -> Result<(), String> {
        if self.min_size < MIN_GRID {
            return Err(format!("--min-size must be at least {MIN_GRID}, got {}", self.min_size));
        }
        if self.min_size > self.max_size {
            return Err(format!("--min-size {} is larger than --max-size {}", self.min_size, self.max_size));
        }
        Ok(())
    }

    fn algorithm_order(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            return Algorithm::DRIVER_ORDER.to_vec();
        }
        let mut order = Vec::with_capacity(self.algorithms.len());
        for a in &self.algorithms {
            if !order.contains(a) {
                order.push(*a);
            }
        }
        order
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(msg) = args.validate() {
        Args::command().error(ErrorKind::ValueValidation, msg).exit();
    }
    init_tracing(args.log_json);

    let options = config::from_env(args.options.as_deref())?;
    info!(max_retained_bytes = options.max_retained_bytes, ids_max_depth = ?options.ids_max_depth, "search options");

    let file = File::create(&args.out).with_context(|| format!("creating {:?}", args.out))?;
    let sink = args.format.writer(BufWriter::new(file));
    let mut harness = Harness::new(options, sink).with_algorithms(args.algorithm_order());
    let reports = harness.run_sweep(args.min_size..=args.max_size)?;

    info!(sizes = reports.len(), disabled = ?harness.disabled(), out = ?args.out, "sweep finished");
    Ok(())
}
