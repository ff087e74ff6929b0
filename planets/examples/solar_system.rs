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
//! Solar system example
//!
//! Loads the bundled sample system, decorates planets and dwarf planets
//! with stand-in radii, and prints every body's gravitational potential
//! alongside a check against the dominant star-only term.
//!
//! Run with: cargo run --example solar_system

use planets::decorate::{decorate_radii, DEFAULT_SEED};
use planets::ingest::ParserRegistry;
use planets::potential::{potential_of, PotentialSolver};
use planets::BodyKind;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Planets - Solar System Example");
    println!("==============================\n");

    let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("planetary-system.csv");
    let parsed = ParserRegistry::with_defaults().parse(&sample)?;
    let mut bodies = parsed.bodies;
    println!("Loaded {} bodies from {}", bodies.len(), sample.display());

    let decorated = decorate_radii(&mut bodies, DEFAULT_SEED);
    println!("Assigned stand-in radii to {} bodies\n", decorated);

    let solver = PotentialSolver::default();
    let potentials = solver.potentials(&bodies);

    // The star dominates every planet's potential
    let stars: Vec<_> = bodies.iter().filter(|b| b.kind() == BodyKind::Star).collect();

    println!("{:<10} {:<16} {:>16} {:>16} {:>8}", "Body", "Category", "Potential (J)", "Star term (J)", "Share");
    for (body, potential) in bodies.iter().zip(&potentials) {
        let star_term = if body.kind() == BodyKind::Star {
            0.0
        } else {
            potential_of(body, &stars, None)
        };
        let share = if *potential != 0.0 { star_term / potential } else { 0.0 };

        let radius = body
            .radius()
            .map(|r| format!(" (r = {:.0})", r))
            .unwrap_or_default();

        println!(
            "{:<10} {:<16} {:>16.6e} {:>16.6e} {:>7.2}%{}",
            body.label(),
            body.kind().to_string(),
            potential,
            star_term,
            share * 100.0,
            radius
        );
    }

    Ok(())
}
