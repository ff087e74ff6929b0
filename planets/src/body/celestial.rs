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
//! The celestial body wrapper
//!
//! A [`Body`] owns exactly one [`BodyData`] and adds what depends on the
//! body's category. Stars, planets and dwarf planets share this one type, so
//! a heterogeneous system is just a `Vec<Body>`. The radius is reachable only
//! through checked accessors that consult the category first.

use super::{BodyData, BodyError, BodyKind};
use crate::potential::{self, PointMass};

/// A massive celestial object with a position, velocity and category
///
/// # Examples
///
/// ```
/// use planets::body::{Body, BodyData, BodyKind};
///
/// let mut earth = Body::new(BodyData::new([1.0, 0.0, 0.0], [0.0; 3], 5.97e24, "Earth", BodyKind::Planetary));
/// earth.set_radius(6.371e6).unwrap();
/// assert_eq!(earth.radius(), Some(6.371e6));
///
/// let sun = Body::new(BodyData::new([0.0; 3], [0.0; 3], 1.99e30, "Sun", BodyKind::Star));
/// assert_eq!(sun.radius(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    data: BodyData,
    /// Only meaningful while `data.kind.has_radius()`
    radius: f64,
}

impl Body {
    /// Create a body that takes ownership of the given record
    ///
    /// The record is not validated.
    pub fn new(data: BodyData) -> Self {
        Body { data, radius: 0.0 }
    }

    /// Get the underlying record
    pub fn data(&self) -> &BodyData {
        &self.data
    }

    /// Release the underlying record, dropping any radius
    pub fn into_data(self) -> BodyData {
        self.data
    }

    /// Get the position of the body
    pub fn position(&self) -> [f64; 3] {
        self.data.position
    }

    /// Replace the position of the body
    pub fn set_position(&mut self, position: [f64; 3]) {
        self.data.position = position;
    }

    /// Get the velocity of the body
    pub fn velocity(&self) -> [f64; 3] {
        self.data.velocity
    }

    /// Replace the velocity of the body
    pub fn set_velocity(&mut self, velocity: [f64; 3]) {
        self.data.velocity = velocity;
    }

    /// Get the mass of the body
    pub fn mass(&self) -> f64 {
        self.data.mass
    }

    /// Replace the mass of the body
    pub fn set_mass(&mut self, mass: f64) {
        self.data.mass = mass;
    }

    /// Get the label of the body
    pub fn label(&self) -> &str {
        &self.data.label
    }

    /// Replace the label of the body
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.data.label = label.into();
    }

    /// Get the category of the body
    pub fn kind(&self) -> BodyKind {
        self.data.kind
    }

    /// Replace the category of the body
    ///
    /// Moving a body to [`BodyKind::Star`] resets its radius to 0.0, so a
    /// later move back to a planetary category starts from the default.
    pub fn set_kind(&mut self, kind: BodyKind) {
        if !kind.has_radius() {
            self.radius = 0.0;
        }
        self.data.kind = kind;
    }

    /// Get the radius, if this body's category carries one
    ///
    /// Returns `None` for stars. Planets and dwarf planets report 0.0 until
    /// a radius is set.
    pub fn radius(&self) -> Option<f64> {
        self.data.kind.has_radius().then_some(self.radius)
    }

    /// Set the radius of a planet or dwarf planet
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::NoRadius`] for stars; the body is left untouched.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), BodyError> {
        if !self.data.kind.has_radius() {
            return Err(BodyError::NoRadius {
                label: self.data.label.clone(),
            });
        }
        self.radius = radius;
        Ok(())
    }

    /// Radius slot without the category check, for specializations that
    /// have already proven their category
    pub(super) fn radius_unchecked(&self) -> f64 {
        self.radius
    }

    pub(super) fn set_radius_unchecked(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Gravitational potential of this body with respect to `system`
    ///
    /// `self_index` is this body's position within `system`, or `None` when
    /// the body is not a member and nothing should be excluded. See
    /// [`potential::potential_of`].
    pub fn gravitational_potential<S: PointMass>(&self, system: &[S], self_index: Option<usize>) -> f64 {
        potential::potential_of(self, system, self_index)
    }
}

impl From<BodyData> for Body {
    fn from(data: BodyData) -> Self {
        Body::new(data)
    }
}

impl From<&BodyData> for Body {
    fn from(data: &BodyData) -> Self {
        Body::new(data.clone())
    }
}

impl PointMass for Body {
    fn position(&self) -> [f64; 3] {
        self.data.position
    }

    fn mass(&self) -> f64 {
        self.data.mass
    }
}
