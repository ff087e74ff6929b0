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
//! Body records and categories
//!
//! A [`BodyData`] is plain data: everything about a body that is measured
//! rather than derived. It is kept apart from [`Body`](super::Body) so the
//! astronomical data can be swapped or rescaled without touching the
//! category-specific behavior that lives on the wrapper.

use std::fmt;

/// Category of a celestial body
///
/// The discriminant is the category index used by the line-oriented
/// ingestion format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// A star. Carries no radius.
    Star = 0,
    /// A planet
    Planetary = 1,
    /// A dwarf planet
    DwarfPlanetary = 2,
}

impl BodyKind {
    /// All categories in index order
    pub const ALL: [BodyKind; 3] = [BodyKind::Star, BodyKind::Planetary, BodyKind::DwarfPlanetary];

    /// Get the category index used in textual records
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a category by its textual record index
    ///
    /// Returns `None` for anything outside `0..=2`.
    pub fn from_index(index: i64) -> Option<BodyKind> {
        usize::try_from(index)
            .ok()
            .and_then(|i| BodyKind::ALL.get(i).copied())
    }

    /// Whether bodies of this category carry a radius
    pub fn has_radius(self) -> bool {
        !matches!(self, BodyKind::Star)
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyKind::Star => "Star",
            BodyKind::Planetary => "Planetary",
            BodyKind::DwarfPlanetary => "Dwarf planetary",
        };
        f.write_str(name)
    }
}

/// Physical state of a celestial body
///
/// All fields are public: they are modified frequently by clients and need
/// neither special treatment nor computation. No validation is performed,
/// so a negative mass or an empty label is representable.
///
/// # Examples
///
/// ```
/// use planets::body::{BodyData, BodyKind};
///
/// let data = BodyData::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], 7.0, "Kitten", BodyKind::Star);
/// assert_eq!(data.position[2], 3.0);
/// assert_eq!(data.label, "Kitten");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BodyData {
    /// Position (x, y, z)
    pub position: [f64; 3],
    /// Velocity (vx, vy, vz)
    pub velocity: [f64; 3],
    /// Mass, expected strictly positive
    pub mass: f64,
    /// Human-readable name, not necessarily unique
    pub label: String,
    /// Category of the body
    pub kind: BodyKind,
}

impl BodyData {
    /// Create a new body record from raw field values
    pub fn new(
        position: [f64; 3],
        velocity: [f64; 3],
        mass: f64,
        label: impl Into<String>,
        kind: BodyKind,
    ) -> Self {
        BodyData {
            position,
            velocity,
            mass,
            label: label.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_lookup() {
        assert_eq!(BodyKind::from_index(0), Some(BodyKind::Star));
        assert_eq!(BodyKind::from_index(1), Some(BodyKind::Planetary));
        assert_eq!(BodyKind::from_index(2), Some(BodyKind::DwarfPlanetary));
        assert_eq!(BodyKind::from_index(3), None);
        assert_eq!(BodyKind::from_index(-1), None);

        for kind in BodyKind::ALL {
            assert_eq!(BodyKind::from_index(kind.index() as i64), Some(kind));
        }
    }

    #[test]
    fn test_only_stars_lack_radius() {
        assert!(!BodyKind::Star.has_radius());
        assert!(BodyKind::Planetary.has_radius());
        assert!(BodyKind::DwarfPlanetary.has_radius());
    }

    #[test]
    fn test_record_accepts_invalid_values() {
        let data = BodyData::new([0.0; 3], [0.0; 3], -5.0, "", BodyKind::Planetary);
        assert_eq!(data.mass, -5.0);
        assert!(data.label.is_empty());
    }
}
