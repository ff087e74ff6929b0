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
//! # Planets
//!
//! Computes the gravitational potential of every body in a small celestial
//! system by direct pairwise summation.
//!
//! ## Features
//!
//! - **Body Model**: Plain body records wrapped by bodies with checked,
//!   category-specific attributes (radius for planets and dwarf planets)
//! - **Potential Engine**: Naive O(n²) summation with index-based self exclusion
//! - **Parallelization**: Optional Rayon integration for multi-threaded evaluation
//! - **Ingestion**: Pluggable parsers behind a versioned registry, with a
//!   line-oriented CSV format built in
//!
//! ## Example
//!
//! ```rust
//! use planets::body::{Body, BodyData, BodyKind};
//! use planets::potential::potentials_of;
//!
//! let bodies = vec![
//!     Body::new(BodyData::new([0.0; 3], [0.0; 3], 1000.0, "Sun", BodyKind::Star)),
//!     Body::new(BodyData::new([1.0, 2.0, 3.0], [0.0; 3], 7.0, "Rock", BodyKind::Planetary)),
//! ];
//!
//! let potentials = potentials_of(&bodies);
//! assert_eq!(potentials.len(), 2);
//! assert!(potentials[0] < 0.0);
//! ```

#![warn(missing_docs)]

/// Body records, bodies, and category specializations
pub mod body;

/// Gravitational potential by direct summation
pub mod potential;

/// Ingestion of bodies from textual sources
pub mod ingest;

/// Pseudo-random display attributes for non-stellar bodies
pub mod decorate;

pub use body::{Body, BodyData, BodyError, BodyKind, DwarfPlanet, Planet};
pub use ingest::{BodyParser, CsvBodyParser, IngestError, ParserRegistry};
pub use potential::{potentials_of, PotentialSolver, GRAVITATIONAL_CONSTANT};
