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
//! Category specializations
//!
//! [`Planet`] and [`DwarfPlanet`] are bodies whose category is fixed by their
//! type, so their radius is always present and needs no check. They deref to
//! [`Body`] for every shared read and convert back into a plain [`Body`]
//! wherever one is expected. Going the other way is a checked `TryFrom`,
//! from either a [`Body`] or a [`BodyData`].
//! The category itself cannot be changed through a specialization; convert
//! to a [`Body`] first.

use super::{Body, BodyData, BodyError, BodyKind};
use crate::potential::PointMass;
use std::ops::Deref;

macro_rules! specialization {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Body);

        impl $name {
            /// Category every value of this type has
            pub const KIND: BodyKind = $kind;

            /// Create from a record, **re-categorising** it
            ///
            /// Whatever category the record carries is overwritten with
            /// [`Self::KIND`]. Use `TryFrom<BodyData>` to keep the record's
            /// category and reject a mismatch instead.
            pub fn new(mut data: BodyData) -> Self {
                data.kind = Self::KIND;
                $name(Body::new(data))
            }

            /// Get the radius
            pub fn radius(&self) -> f64 {
                self.0.radius_unchecked()
            }

            /// Replace the radius. No validation is performed.
            pub fn set_radius(&mut self, radius: f64) {
                self.0.set_radius_unchecked(radius);
            }

            /// Replace the position
            pub fn set_position(&mut self, position: [f64; 3]) {
                self.0.set_position(position);
            }

            /// Replace the velocity
            pub fn set_velocity(&mut self, velocity: [f64; 3]) {
                self.0.set_velocity(velocity);
            }

            /// Replace the mass
            pub fn set_mass(&mut self, mass: f64) {
                self.0.set_mass(mass);
            }

            /// Replace the label
            pub fn set_label(&mut self, label: impl Into<String>) {
                self.0.set_label(label);
            }
        }

        impl Deref for $name {
            type Target = Body;

            fn deref(&self) -> &Body {
                &self.0
            }
        }

        impl TryFrom<Body> for $name {
            type Error = BodyError;

            fn try_from(body: Body) -> Result<Self, Self::Error> {
                if body.kind() == Self::KIND {
                    Ok($name(body))
                } else {
                    Err(BodyError::KindMismatch {
                        expected: Self::KIND,
                        found: body.kind(),
                    })
                }
            }
        }

        impl TryFrom<BodyData> for $name {
            type Error = BodyError;

            fn try_from(data: BodyData) -> Result<Self, Self::Error> {
                $name::try_from(Body::new(data))
            }
        }

        /// Converts back into a plain body, keeping the radius
        impl From<$name> for Body {
            fn from(value: $name) -> Body {
                value.0
            }
        }

        impl PointMass for $name {
            fn position(&self) -> [f64; 3] {
                self.0.position()
            }

            fn mass(&self) -> f64 {
                self.0.mass()
            }
        }
    };
}

specialization!(
    /// A planet: a body with a radius
    ///
    /// # Examples
    ///
    /// ```
    /// use planets::body::{Body, BodyData, BodyKind, Planet};
    ///
    /// let rock = BodyData::new([1.0, 0.0, 0.0], [0.0; 3], 7.0, "Rock", BodyKind::Star);
    /// assert!(Planet::try_from(rock.clone()).is_err());
    ///
    /// // `new` re-categorises the record
    /// let mut planet = Planet::new(rock);
    /// assert_eq!(planet.kind(), BodyKind::Planetary);
    ///
    /// planet.set_radius(2.5);
    /// let body: Body = planet.into();
    /// assert_eq!(body.radius(), Some(2.5));
    /// ```
    Planet,
    BodyKind::Planetary
);

specialization!(
    /// A dwarf planet: a body with a radius
    DwarfPlanet,
    BodyKind::DwarfPlanetary
);
