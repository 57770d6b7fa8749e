//! Times the tableau simplex on one problem across worker counts.
//!
//! The problem is either a standard-form text file or a seeded random
//! dense LP with `≤` rows and positive data, which is always feasible
//! and bounded.  For every worker count the output is
//!
//! ```text
//! Parallel 4
//! The optimum is -123.456
//! Time difference = 12[ms]
//! ```

use clap::{Parser, ValueEnum};
use pivotal::algebra::*;
use pivotal::io::{read_standard_form, ConfigurablePrintTarget};
use pivotal::solver::*;
use rand::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Variant {
    /// single threaded elimination
    Serial,
    /// rayon row-parallel elimination
    Parallel,
}

#[derive(Parser, Debug)]
#[command(name = "simplex-bench")]
#[command(version)]
#[command(about = "Time the dense tableau simplex across worker counts")]
struct Cli {
    /// Standard-form problem file
    #[arg(value_name = "FILE", required_unless_present = "random")]
    input: Option<PathBuf>,

    /// Generate a random dense problem with ROWS constraints and COLS variables
    #[arg(long, num_args = 2, value_names = ["ROWS", "COLS"], conflicts_with = "input")]
    random: Option<Vec<usize>>,

    /// Seed for the random problem
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Elimination engine
    #[arg(long, value_enum, default_value = "parallel")]
    variant: Variant,

    /// Comma separated worker counts
    #[arg(long, value_delimiter = ',', default_value = "1")]
    workers: Vec<u32>,

    /// Solves per worker count
    #[arg(long, default_value = "1")]
    repeat: usize,

    /// Print solver progress
    #[arg(short, long)]
    verbose: bool,
}

#[allow(non_snake_case)]
fn random_problem(m: usize, n: usize, seed: u64) -> StandardForm<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let data = (0..m * n).map(|_| rng.random_range(1.0..10.0)).collect();
    let A = Matrix { m, n, data };
    let b = (0..m).map(|_| rng.random_range(10.0..100.0)).collect();
    let c = (0..n).map(|_| rng.random_range(-10.0..-1.0)).collect();

    StandardForm::from_parts(A, b, c)
}

fn load_problem(cli: &Cli) -> Result<StandardForm<f64>, Box<dyn std::error::Error>> {
    if let Some(ref dims) = cli.random {
        return Ok(random_problem(dims[0], dims[1], cli.seed));
    }
    match cli.input {
        Some(ref path) => {
            let file = File::open(path)?;
            Ok(read_standard_form(BufReader::new(file))?)
        }
        None => Err("no problem given".into()),
    }
}

fn outcome(solution: &DefaultSolution<f64>) -> String {
    match solution.status {
        SolverStatus::Solved => format!("The optimum is {}", solution.obj_val),
        SolverStatus::Unbounded => "unbounded".to_string(),
        SolverStatus::PrimalInfeasible => "infeasible".to_string(),
        SolverStatus::MaxIterations => "iteration limit".to_string(),
        status => status.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let problem = load_problem(&cli)?;

    for &workers in &cli.workers {
        let settings = DefaultSettingsBuilder::default()
            .verbose(cli.verbose)
            .parallel_enable(cli.variant == Variant::Parallel)
            .parallel_min_rows(0)
            .max_threads(workers)
            .build()?;

        for _ in 0..cli.repeat {
            let mut solver = DefaultSolver::from_standard_form(problem.clone(), settings.clone())?;
            if !cli.verbose {
                solver.print_to_sink();
            }

            println!("Parallel {workers}");
            let start = Instant::now();
            solver.solve();
            let elapsed = start.elapsed();

            println!("{}", outcome(&solver.solution));
            println!("Time difference = {}[ms]", elapsed.as_millis());
        }
    }

    Ok(())
}
