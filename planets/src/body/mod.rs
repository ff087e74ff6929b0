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
//! Celestial bodies
//!
//! This module provides the body model: the plain [`BodyData`] record, the
//! [`Body`] that wraps it, and the [`Planet`] and [`DwarfPlanet`]
//! specializations that carry a radius.
//!
//! # Category-specific attributes
//!
//! Every body exposes the same capability set: position, velocity, mass,
//! label, category and gravitational potential. Only planets and dwarf
//! planets have a radius. On a [`Body`] the radius is reached through
//! [`Body::radius`] and [`Body::set_radius`], which check the category and
//! refuse stars; on a [`Planet`] or [`DwarfPlanet`] the category is known
//! statically and the accessors are infallible.

mod celestial;
mod data;
mod error;
mod specialized;

pub use celestial::Body;
pub use data::{BodyData, BodyKind};
pub use error::BodyError;
pub use specialized::{DwarfPlanet, Planet};
