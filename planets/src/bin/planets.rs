// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Command-line driver
//!
//! Reads a body file, assigns stand-in radii to planets and dwarf planets,
//! and prints the gravitational potential of every body:
//!
//! ```bash
//! planets planetary-system.csv --precision 8
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use planets::decorate::{decorate_radii, DEFAULT_SEED};
use planets::ingest::{BodyParser, CsvBodyParser, ParserRegistry};
use planets::potential::{PotentialSolver, GRAVITATIONAL_CONSTANT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Gravitational potential of every body in a system")]
struct Args {
    /// Body file to read
    #[arg(env = "PLANETS_INPUT", default_value = "planetary-system.csv")]
    input: PathBuf,

    /// Seed for the stand-in radii of planets and dwarf planets
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Digits after the decimal point
    #[arg(long, default_value_t = 8)]
    precision: usize,

    /// Gravitational constant (m³/(kg⋅s²))
    #[arg(long, default_value_t = GRAVITATIONAL_CONSTANT)]
    g: f64,

    /// Fail on the first malformed record instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Evaluate on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Worker threads for parallel evaluation (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !(args.g >= 0.0 && args.g.is_finite()) {
        anyhow::bail!("gravitational constant must be non-negative and finite, got {}", args.g);
    }

    let mut registry = ParserRegistry::with_defaults();
    if args.strict {
        let strict: Box<dyn BodyParser> = Box::new(CsvBodyParser::strict());
        registry
            .replace(strict)
            .map_err(anyhow::Error::msg)
            .context("failed to configure strict parsing")?;
    }

    let parsed = registry
        .parse(&args.input)
        .with_context(|| format!("failed to load bodies from '{}'", args.input.display()))?;

    if !parsed.rejected.is_empty() {
        eprintln!(
            "Info: Skipped {} malformed record(s) in '{}'",
            parsed.rejected.len(),
            args.input.display()
        );
    }

    let mut bodies = parsed.bodies;
    decorate_radii(&mut bodies, args.seed);

    let solver = PotentialSolver::new(args.g);
    let potentials = if args.sequential {
        solver.potentials_sequential(&bodies)
    } else {
        evaluate_parallel(&solver, &bodies, args.threads)?
    };

    for (body, potential) in bodies.iter().zip(&potentials) {
        println!(
            "{}, potential = {:.*}",
            body.label(),
            args.precision,
            potential
        );
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn evaluate_parallel(
    solver: &PotentialSolver,
    bodies: &[planets::Body],
    threads: usize,
) -> Result<Vec<f64>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to start worker threads")?;
    Ok(pool.install(|| solver.potentials(bodies)))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel(
    solver: &PotentialSolver,
    bodies: &[planets::Body],
    _threads: usize,
) -> Result<Vec<f64>> {
    Ok(solver.potentials(bodies))
}
