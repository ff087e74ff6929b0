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
//! Gravitational potential by direct summation
//!
//! The potential of a body with mass M at position **r** with respect to a
//! system of bodies is
//!
//! **U = -G · M · Σᵢ mᵢ / |r - rᵢ|**
//!
//! where the sum runs over every system member except the body itself.
//!
//! # Self exclusion
//!
//! A body is identified within its system only by its index. Passing
//! `Some(i)` skips element `i`, avoiding the zero-distance self term.
//! Passing `None` means the body is not a member of the system and every
//! element is summed, including an exact duplicate of the body if one is
//! present. Callers are responsible for choosing the index correctly.
//!
//! # Degenerate geometry
//!
//! Two summed bodies at the same position divide by zero. This is not
//! guarded: the result is infinite or NaN and is returned as is. The
//! [`PotentialSolver`] can report such values on stderr.
//!
//! # Complexity
//!
//! One potential costs O(k) for a system of k bodies; a whole system costs
//! O(n²). No acceleration structure is used.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2014 recommended value.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Anything with a position and a mass can take part in the summation
pub trait PointMass {
    /// Position (x, y, z)
    fn position(&self) -> [f64; 3];

    /// Mass
    fn mass(&self) -> f64;
}

impl PointMass for crate::body::BodyData {
    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

impl<T: PointMass + ?Sized> PointMass for &T {
    fn position(&self) -> [f64; 3] {
        (**self).position()
    }

    fn mass(&self) -> f64 {
        (**self).mass()
    }
}

/// Euclidean distance between two points
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Σ mᵢ / |r - rᵢ| over the system, skipping `self_index`
fn mass_over_distance<B, S>(body: &B, system: &[S], self_index: Option<usize>) -> f64
where
    B: PointMass + ?Sized,
    S: PointMass,
{
    let position = body.position();
    system
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != self_index)
        .map(|(_, other)| other.mass() / distance(position, other.position()))
        .sum()
}

/// Gravitational potential of `body` with respect to `system`
///
/// # Arguments
///
/// * `body` - The body under evaluation
/// * `system` - The bodies making up the system, which may or may not include `body`
/// * `self_index` - Index of `body` within `system`, or `None` if it is not a member
///
/// An index past the end of `system` excludes nothing.
///
/// # Examples
///
/// ```
/// use planets::body::{BodyData, BodyKind};
/// use planets::potential::{potential_of, GRAVITATIONAL_CONSTANT};
///
/// let sun = BodyData::new([0.0; 3], [0.0; 3], 1000.0, "Sun", BodyKind::Star);
/// let rock = BodyData::new([3.0, 4.0, 0.0], [0.0; 3], 10.0, "Rock", BodyKind::Planetary);
///
/// let u = potential_of(&sun, &[rock], None);
/// assert!((u - (-GRAVITATIONAL_CONSTANT * 1000.0 * 10.0 / 5.0)).abs() < 1e-20);
/// ```
pub fn potential_of<B, S>(body: &B, system: &[S], self_index: Option<usize>) -> f64
where
    B: PointMass + ?Sized,
    S: PointMass,
{
    -GRAVITATIONAL_CONSTANT * body.mass() * mass_over_distance(body, system, self_index)
}

/// Potential of every body with respect to the whole system
///
/// `result[i]` is the potential of `bodies[i]` against `bodies` with itself
/// excluded by index. An empty system yields an empty result.
pub fn potentials_of<B: PointMass>(bodies: &[B]) -> Vec<f64> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| potential_of(body, bodies, Some(i)))
        .collect()
}

/// Configurable potential engine
///
/// Adds a tunable gravitational constant, optional parallel evaluation and
/// stderr warnings for non-finite results to the free functions of this
/// module.
///
/// # Example
///
/// ```rust
/// use planets::body::{Body, BodyData, BodyKind};
/// use planets::potential::PotentialSolver;
///
/// let bodies = vec![
///     Body::new(BodyData::new([0.0; 3], [0.0; 3], 1.0, "a", BodyKind::Star)),
///     Body::new(BodyData::new([1.0, 0.0, 0.0], [0.0; 3], 1.0, "b", BodyKind::Planetary)),
/// ];
///
/// // Unit gravitational constant for a dimensionless system
/// let solver = PotentialSolver::new(1.0);
/// assert_eq!(solver.potentials(&bodies), vec![-1.0, -1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct PotentialSolver {
    /// Gravitational constant (default: GRAVITATIONAL_CONSTANT)
    g_constant: f64,
    /// Bodies per parallel work item (0 = auto)
    chunk_size: usize,
    /// Whether to warn about non-finite potentials
    warn_on_invalid: bool,
}

impl PotentialSolver {
    /// Create a solver with the given gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` is negative or not finite.
    pub fn new(g_constant: f64) -> Self {
        assert!(
            g_constant >= 0.0 && g_constant.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );

        PotentialSolver {
            g_constant,
            chunk_size: 0,
            warn_on_invalid: true,
        }
    }

    /// Get the gravitational constant
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Set the number of bodies handled per parallel work item
    ///
    /// Set to 0 for automatic sizing based on the thread count.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size;
    }

    /// Get the configured chunk size (0 = auto)
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Set whether to warn about non-finite potentials
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }

    /// Gravitational potential of `body` with respect to `system`
    ///
    /// Same contract as [`potential_of`], scaled by this solver's constant.
    pub fn potential_of<B, S>(&self, body: &B, system: &[S], self_index: Option<usize>) -> f64
    where
        B: PointMass + ?Sized,
        S: PointMass,
    {
        -self.g_constant * body.mass() * mass_over_distance(body, system, self_index)
    }

    /// Potential of every body with respect to the whole system
    ///
    /// Runs across the Rayon pool when the `parallel` feature is enabled.
    /// Output order always matches input order.
    #[cfg(feature = "parallel")]
    pub fn potentials<B: PointMass + Sync>(&self, bodies: &[B]) -> Vec<f64> {
        let chunk_size = if self.chunk_size > 0 {
            self.chunk_size
        } else {
            // Aim for at least 4 chunks per thread for load balancing
            (bodies.len() / (rayon::current_num_threads() * 4)).max(1)
        };

        let mut potentials = vec![0.0; bodies.len()];
        potentials
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk, slots)| {
                let start = chunk * chunk_size;
                for (offset, slot) in slots.iter_mut().enumerate() {
                    let i = start + offset;
                    *slot = self.potential_of(&bodies[i], bodies, Some(i));
                }
            });

        self.report_invalid(&potentials);
        potentials
    }

    /// Potential of every body with respect to the whole system
    #[cfg(not(feature = "parallel"))]
    pub fn potentials<B: PointMass>(&self, bodies: &[B]) -> Vec<f64> {
        self.potentials_sequential(bodies)
    }

    /// Potential of every body, always on the calling thread
    pub fn potentials_sequential<B: PointMass>(&self, bodies: &[B]) -> Vec<f64> {
        let potentials: Vec<f64> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| self.potential_of(body, bodies, Some(i)))
            .collect();

        self.report_invalid(&potentials);
        potentials
    }

    fn report_invalid(&self, potentials: &[f64]) {
        if !self.warn_on_invalid {
            return;
        }
        for (i, potential) in potentials.iter().enumerate() {
            if !potential.is_finite() {
                eprintln!(
                    "Warning: Non-finite potential {} for body {} (coincident bodies?)",
                    potential, i
                );
            }
        }
    }
}

impl Default for PotentialSolver {
    fn default() -> Self {
        PotentialSolver::new(GRAVITATIONAL_CONSTANT)
    }
}
