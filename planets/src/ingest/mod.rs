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
//! Ingestion of bodies from textual sources
//!
//! A [`BodyParser`] turns a source identifier into an ordered sequence of
//! bodies. The line-oriented [`CsvBodyParser`] is built in; other formats
//! plug in by implementing the trait and registering with a
//! [`ParserRegistry`].
//!
//! # Error policy
//!
//! - An unreadable source aborts the whole call with
//!   [`IngestError::SourceUnreadable`].
//! - A malformed record affects only itself. Lenient parsers report it in
//!   [`ParsedBodies::rejected`] and keep going; strict parsers abort with
//!   [`IngestError::MalformedRecord`].
//! - Nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use planets::ingest::ParserRegistry;
//! use planets::potential::potentials_of;
//!
//! let registry = ParserRegistry::with_defaults();
//! let parsed = registry.parse("planetary-system.csv")?;
//! for record in &parsed.rejected {
//!     eprintln!("skipped {}", record);
//! }
//! let potentials = potentials_of(&parsed.bodies);
//! # Ok::<(), planets::ingest::IngestError>(())
//! ```

use crate::body::Body;
use std::path::Path;

mod csv;
mod error;
mod registry;

pub use csv::{write_bodies, write_file, CsvBodyParser, FIELD_COUNT};
pub use error::{IngestError, RecordError, RecordErrorKind};
pub use registry::ParserRegistry;

/// Version of the parser API
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning. A parser is
/// accepted by a [`ParserRegistry`] only if its API version is compatible.
pub const PARSER_API_VERSION: &str = "0.1.0";

/// Result of a successful ingestion call
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedBodies {
    /// Bodies in source order
    pub bodies: Vec<Body>,
    /// Records that were skipped, in source order
    pub rejected: Vec<RecordError>,
}

/// A source of celestial bodies
pub trait BodyParser: Send + Sync {
    /// Get the name of this parser
    ///
    /// Must be unique across all registered parsers.
    fn name(&self) -> &str;

    /// Get the version of this parser
    fn version(&self) -> &str;

    /// Get the parser API version this parser was built against
    ///
    /// Used for compatibility checking. Should return PARSER_API_VERSION.
    fn api_version(&self) -> &str {
        PARSER_API_VERSION
    }

    /// File extensions (without the dot, lowercase) this parser handles
    fn extensions(&self) -> &[&str] {
        &[]
    }

    /// Parse the bodies described by `source`
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::SourceUnreadable`] if the source cannot be read.
    fn parse_bodies(&self, source: &Path) -> Result<ParsedBodies, IngestError>;
}
