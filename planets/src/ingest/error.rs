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
//! Ingestion errors
//!
//! [`IngestError`] aborts a whole ingestion call. [`RecordError`] describes a
//! single bad record; lenient parsers collect these and keep going.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reason a single record was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RecordErrorKind {
    /// The record does not have exactly the expected number of fields
    FieldCount {
        /// Number of fields required
        expected: usize,
        /// Number of fields present
        found: usize,
    },
    /// A numeric field could not be parsed
    InvalidNumber {
        /// Name of the field
        field: &'static str,
        /// Text that failed to parse
        value: String,
    },
    /// The record is not valid UTF-8
    InvalidEncoding {
        /// Length of the valid UTF-8 prefix, in bytes
        valid_up_to: usize,
    },
    /// The category index is not one of the known categories
    UnknownCategory {
        /// Text of the category field
        value: String,
    },
}

/// A malformed record and where it was found
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError {
    /// 1-based line number within the source
    pub line: usize,
    /// What was wrong with the record
    pub kind: RecordErrorKind,
}

impl RecordError {
    /// Create a record error for the given line
    pub fn new(line: usize, kind: RecordErrorKind) -> Self {
        RecordError { line, kind }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            RecordErrorKind::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            RecordErrorKind::InvalidNumber { field, value } => {
                write!(f, "field '{}' is not a number: '{}'", field, value)
            }
            RecordErrorKind::InvalidEncoding { valid_up_to } => {
                write!(f, "invalid UTF-8 after byte {}", valid_up_to)
            }
            RecordErrorKind::UnknownCategory { value } => {
                write!(f, "unknown category index '{}'", value)
            }
        }
    }
}

impl Error for RecordError {}

/// Failure of a whole ingestion call
#[derive(Debug)]
pub enum IngestError {
    /// The source could not be opened or read
    SourceUnreadable {
        /// Identifier of the source
        source: PathBuf,
        /// Underlying I/O failure
        cause: io::Error,
    },
    /// A malformed record was found by a strict parser
    MalformedRecord {
        /// Identifier of the source
        source: PathBuf,
        /// The offending record
        record: RecordError,
    },
    /// No registered parser handles the source
    UnsupportedSource {
        /// Identifier of the source
        source: PathBuf,
    },
    /// A body label cannot be written without corrupting the record
    UnrepresentableLabel {
        /// The offending label
        label: String,
    },
    /// Writing bodies out failed
    Write(io::Error),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::SourceUnreadable { source, cause } => {
                write!(f, "cannot read '{}': {}", source.display(), cause)
            }
            IngestError::MalformedRecord { source, record } => {
                write!(f, "malformed record in '{}', {}", source.display(), record)
            }
            IngestError::UnsupportedSource { source } => {
                write!(f, "no parser registered for '{}'", source.display())
            }
            IngestError::UnrepresentableLabel { label } => {
                write!(f, "label {:?} cannot be written as a single record field", label)
            }
            IngestError::Write(cause) => write!(f, "failed to write bodies: {}", cause),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IngestError::SourceUnreadable { cause, .. } => Some(cause),
            IngestError::MalformedRecord { record, .. } => Some(record),
            IngestError::Write(cause) => Some(cause),
            _ => None,
        }
    }
}
