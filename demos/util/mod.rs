#![allow(dead_code)]

use clap::{Parser, ValueEnum};
use stencil_calculus::build_info;
use stencil_calculus::util::linspace;
use stencil_calculus::Stencil;

#[cfg(feature = "profile-with-puffin")]
static PUFFIN_SERVER: std::sync::Mutex<Option<puffin_http::Server>> =
    std::sync::Mutex::new(None);

/// Functions with known derivatives to try stencils on.
#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum TestFunction {
    #[default]
    Sin,
    /// exp(-x)
    Exp,
    Identity,
}

impl TestFunction {
    pub fn value(&self, x: f64) -> f64 {
        self.derivative(x, 0)
    }

    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        match self {
            TestFunction::Sin => match order % 4 {
                0 => x.sin(),
                1 => x.cos(),
                2 => -x.sin(),
                _ => -x.cos(),
            },
            TestFunction::Exp => {
                let sign = if order % 2 == 0 { 1.0 } else { -1.0 };
                sign * (-x).exp()
            }
            TestFunction::Identity => match order {
                0 => x,
                1 => 1.0,
                _ => 0.0,
            },
        }
    }

    pub fn antiderivative(&self, x: f64) -> f64 {
        match self {
            TestFunction::Sin => -x.cos(),
            TestFunction::Exp => -(-x).exp(),
            TestFunction::Identity => 0.5 * x * x,
        }
    }
}

/// Apply a finite difference stencil to a sampled test function
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stencil offsets, e.g. "-1,0,1" or "[0, 1, 2]".
    #[arg(short, long, default_value = "-1,0,1", allow_hyphen_values = true)]
    pub stencil: Stencil,

    /// Derivative or Taylor order.
    #[arg(short = 'n', long, default_value = "1")]
    pub order: usize,

    /// Number of samples.
    #[arg(short = 'm', long, default_value = "1000")]
    pub samples: usize,

    /// First sample position.
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub start: f64,

    /// Last sample position.
    #[arg(long, default_value = "10.0", allow_hyphen_values = true)]
    pub end: f64,

    #[arg(short, long, value_enum, default_value_t = TestFunction::Sin)]
    pub function: TestFunction,

    /// Use the banded operator instead of the dense matrix.
    #[arg(short, long)]
    pub banded: bool,

    /// Chunk size to use for parallelism in the banded operator.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Number of threads for the banded operator.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Optional CSV output with sample, numeric and analytic columns.
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Print build information and exit.
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        println!("EXAMPLE: {}", name);
        println!("GIT: {}", env!("GIT_DESCRIBE"));
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        #[cfg(feature = "profile-with-puffin")]
        {
            println!("Initializing profiling server:");
            let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            println!("Run this to view profiling data:  puffin_viewer {server_addr}");
            let server = puffin_http::Server::new(&server_addr).unwrap();
            *PUFFIN_SERVER.lock().unwrap() = Some(server);
            profiling::puffin::set_scopes_on(true);
        }

        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
            .unwrap();

        args
    }

    pub fn grid(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.samples)
    }

    pub fn finish(&self) {
        #[cfg(feature = "profile-with-puffin")]
        {
            profiling::finish_frame!();
            println!("Flushing profiler");
            PUFFIN_SERVER.lock().unwrap().take();
        }
    }
}

/// Largest absolute difference over the samples in `range`.
pub fn max_error(
    numeric: &[f64],
    analytic: &[f64],
    range: std::ops::Range<usize>,
) -> f64 {
    range
        .map(|i| (numeric[i] - analytic[i]).abs())
        .fold(0.0, f64::max)
}
