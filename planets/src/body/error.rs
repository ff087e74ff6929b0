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
//! Errors raised by category-specific body operations

use super::BodyKind;
use std::error::Error;
use std::fmt;

/// Failure of a category-checked body operation
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// The body's category does not carry a radius
    NoRadius {
        /// Label of the offending body
        label: String,
    },
    /// A body was converted to a specialization of a different category
    KindMismatch {
        /// Category required by the specialization
        expected: BodyKind,
        /// Category the body actually has
        found: BodyKind,
    },
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::NoRadius { label } => {
                write!(f, "body '{}' is a star and has no radius", label)
            }
            BodyError::KindMismatch { expected, found } => {
                write!(f, "expected a {} body, found {}", expected, found)
            }
        }
    }
}

impl Error for BodyError {}
