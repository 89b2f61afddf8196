use crate::build_info;
use crate::config::*;
use crate::error::Result;
use crate::heatmap;
use crate::init::{Corners, InitMode};
use crate::matrix_io;
use crate::monitor::HostBlas;
use crate::solver::*;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// relax2d steady state diffusion solver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Accuracy, stop once the measured error is at or below this.
    #[arg(short, long, default_value = "1e-6")]
    pub eps: f64,

    /// Grid size, assume square.
    #[arg(short, long, default_value = "10")]
    pub size: usize,

    /// Max count of iterations.
    #[arg(short, long, default_value = "1000000")]
    pub iterations: usize,

    /// Measure convergence every this many iterations.
    #[arg(short = 'k', long, default_value = "70")]
    pub check_period: usize,

    /// Start interior cells at the mean of the corners instead of zero.
    #[arg(long)]
    pub init_mean: bool,

    /// Convergence measurement strategy.
    #[arg(long, default_value = "direct")]
    pub strategy: Strategy,

    /// Corner values: up-left down-left up-right down-right.
    #[arg(
        long,
        num_args = 4,
        value_names = ["UL", "DL", "UR", "DR"],
        allow_negative_numbers = true,
        default_values_t = [10.0, 20.0, 20.0, 30.0]
    )]
    pub corners: Vec<f64>,

    /// Save the result matrix.
    #[arg(long)]
    pub show: bool,

    /// Where `--show` writes the result matrix.
    #[arg(long, default_value = "matrix.txt")]
    pub matrix_file: PathBuf,

    /// Print the result matrix to stdout.
    #[arg(long)]
    pub print: bool,

    /// Write a heatmap of the result, WARNING: one pixel per cell.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// The number of threads to use, rayon decides if unset.
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Debug level logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

/// Default filter directive when `RUST_LOG` is not set.
fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber, called once from the binary.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        setup_logging(args.verbose, args.quiet);

        if let Some(threads) = args.threads {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("rayon_thread_{}", i))
                .build_global()
            {
                tracing::warn!("could not configure thread pool: {e}");
            }
        }

        args
    }

    pub fn corners(&self) -> Corners {
        let c = |i: usize| self.corners.get(i).copied().unwrap_or(f64::NAN);
        Corners {
            up_left: c(0),
            down_left: c(1),
            up_right: c(2),
            down_right: c(3),
        }
    }

    pub fn configuration(&self) -> Configuration {
        Configuration {
            accuracy: self.eps,
            size: self.size,
            max_iterations: self.iterations,
            corners: self.corners(),
            check_period: self.check_period,
            init_mode: if self.init_mean {
                InitMode::MeanOfCorners
            } else {
                InitMode::Zero
            },
            strategy: self.strategy,
            chunk_size: self.chunk_size,
        }
    }

    pub fn print_settings(&self) {
        println!("Current settings:");
        println!("\tEPS: {}", self.eps);
        println!("\tMax iteration: {}", self.iterations);
        println!("\tSize: {}x{}", self.size, self.size);
        println!("\tCheck period: {}", self.check_period);
        println!("\tMean Value: {}", self.init_mean);
        println!("\tStrategy: {:?}", self.strategy);
    }

    /// Solve, report and write the requested outputs.
    pub fn run(&self) -> Result<ResultReport> {
        let config = self.configuration();
        self.print_settings();

        let report = match config.strategy {
            Strategy::Direct => SolverRun::new(config).run()?,
            Strategy::Delegated => {
                let mut handle = HostBlas::create(config.chunk_size);
                let report = SolverRun::new(config).with_backend(&handle).run();
                handle.destroy();
                report?
            }
        };

        println!("Time: {} s", report.elapsed_secs());
        println!("Iterations: {}", report.iterations);
        println!("Error: {}", report.error);

        if self.print {
            let stdout = std::io::stdout();
            matrix_io::write_matrix(&mut stdout.lock(), &report.grid, 4)?;
        }
        if self.show {
            matrix_io::write_matrix_file(&report.grid, &self.matrix_file)?;
        }
        if let Some(path) = &self.image {
            heatmap::write_image(&report.grid, path)?;
        }

        Ok(report)
    }
}
