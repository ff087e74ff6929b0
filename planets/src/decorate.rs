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
//! Pseudo-random display attributes for non-stellar bodies
//!
//! Input files carry no radii, so planets and dwarf planets get a stand-in
//! radius before display. Each gets `index + r`, where `r` is a raw `u32`
//! draw from a seeded ChaCha generator. The same seed always yields the same
//! radii.

use crate::body::Body;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Default seed for [`decorate_radii`]
pub const DEFAULT_SEED: u64 = 123456;

/// Assign stand-in radii to every planet and dwarf planet
///
/// Stars are skipped without consuming a random draw. Returns the number of
/// bodies that received a radius.
///
/// # Example
///
/// ```rust
/// use planets::body::{Body, BodyData, BodyKind};
/// use planets::decorate::{decorate_radii, DEFAULT_SEED};
///
/// let mut bodies = vec![
///     Body::new(BodyData::new([0.0; 3], [0.0; 3], 1000.0, "Sun", BodyKind::Star)),
///     Body::new(BodyData::new([1.0, 0.0, 0.0], [0.0; 3], 1.0, "Rock", BodyKind::Planetary)),
/// ];
///
/// assert_eq!(decorate_radii(&mut bodies, DEFAULT_SEED), 1);
/// assert_eq!(bodies[0].radius(), None);
/// assert!(bodies[1].radius().unwrap() >= 1.0);
/// ```
pub fn decorate_radii(bodies: &mut [Body], seed: u64) -> usize {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut decorated = 0;

    for (i, body) in bodies.iter_mut().enumerate() {
        if !body.kind().has_radius() {
            continue;
        }
        let draw: u32 = rng.random();
        if body.set_radius(i as f64 + f64::from(draw)).is_ok() {
            decorated += 1;
        }
    }

    decorated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyData, BodyKind};

    fn system() -> Vec<Body> {
        [BodyKind::Star, BodyKind::Planetary, BodyKind::DwarfPlanetary, BodyKind::Star, BodyKind::Planetary]
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Body::new(BodyData::new([i as f64; 3], [0.0; 3], 1.0, format!("b{}", i), kind)))
            .collect()
    }

    #[test]
    fn test_only_non_stars_decorated() {
        let mut bodies = system();
        assert_eq!(decorate_radii(&mut bodies, DEFAULT_SEED), 3);

        for (i, body) in bodies.iter().enumerate() {
            match body.kind() {
                BodyKind::Star => assert_eq!(body.radius(), None),
                _ => assert!(body.radius().unwrap() >= i as f64),
            }
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut first = system();
        let mut second = system();
        decorate_radii(&mut first, 7);
        decorate_radii(&mut second, 7);
        assert_eq!(first, second);

        let mut third = system();
        decorate_radii(&mut third, 8);
        assert_ne!(first, third);
    }

    #[test]
    fn test_physical_state_untouched() {
        let original = system();
        let mut bodies = original.clone();
        decorate_radii(&mut bodies, DEFAULT_SEED);

        for (before, after) in original.iter().zip(&bodies) {
            assert_eq!(before.data(), after.data());
        }
    }
}
