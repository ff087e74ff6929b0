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
//! Line-oriented CSV body format
//!
//! Each non-blank, non-comment line holds one body as nine comma-separated
//! fields, in fixed order and without a header row:
//!
//! ```text
//! x, y, z, vx, vy, vz, mass, label, category
//! ```
//!
//! `category` is `0` for a star, `1` for a planet and `2` for a dwarf
//! planet. Lines whose first character is `#` are comments. Fields are
//! trimmed, and a label wrapped in double quotes loses the quotes:
//!
//! ```text
//! # x, y, z, vx, vy, vz, mass, label, category
//! 100.0, 100.0, -4.0, 1200, 1200, 1200, 1.0e21, "JayWorld", 0
//! ```

use super::{BodyParser, IngestError, ParsedBodies, RecordError, RecordErrorKind};
use crate::body::{Body, BodyData, BodyKind};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Number of fields in every record
pub const FIELD_COUNT: usize = 9;

const DELIMITER: char = ',';
const COMMENT: char = '#';
const NUMERIC_FIELDS: [&str; 7] = ["x", "y", "z", "vx", "vy", "vz", "mass"];

/// Parser for the line-oriented CSV body format
///
/// By default the parser is lenient: malformed records are collected in
/// [`ParsedBodies::rejected`] and the remaining lines are still read. A
/// strict parser fails the whole call on the first malformed record.
///
/// # Example
///
/// ```rust
/// use planets::ingest::CsvBodyParser;
/// use std::path::Path;
///
/// let text = "# sample\n0,0,0,0,0,0,1000,Sun,0\n1,2,3,0,0,0,7,Rock,1\n";
/// let parsed = CsvBodyParser::new()
///     .parse_reader(text.as_bytes(), Path::new("<memory>"))
///     .unwrap();
/// assert_eq!(parsed.bodies.len(), 2);
/// assert_eq!(parsed.bodies[1].label(), "Rock");
/// ```
#[derive(Debug, Clone)]
pub struct CsvBodyParser {
    /// Fail on the first malformed record instead of skipping it
    strict: bool,
    /// Whether to warn about skipped records
    warn_on_invalid: bool,
}

impl CsvBodyParser {
    /// Create a lenient parser
    pub fn new() -> Self {
        CsvBodyParser {
            strict: false,
            warn_on_invalid: true,
        }
    }

    /// Create a parser that rejects the whole source on a malformed record
    pub fn strict() -> Self {
        CsvBodyParser {
            strict: true,
            ..CsvBodyParser::new()
        }
    }

    /// Set whether malformed records abort parsing
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Check whether the parser is strict
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Set whether to warn about skipped records
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }

    /// Parse a single record
    ///
    /// `line` is the 1-based line number used for error reporting.
    pub fn parse_record(record: &str, line: usize) -> Result<Body, RecordError> {
        let fields: Vec<&str> = record.split(DELIMITER).map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::new(
                line,
                RecordErrorKind::FieldCount {
                    expected: FIELD_COUNT,
                    found: fields.len(),
                },
            ));
        }

        let mut numbers = [0.0; NUMERIC_FIELDS.len()];
        for ((slot, field), name) in numbers.iter_mut().zip(&fields).zip(NUMERIC_FIELDS) {
            *slot = field.parse::<f64>().map_err(|_| {
                RecordError::new(
                    line,
                    RecordErrorKind::InvalidNumber {
                        field: name,
                        value: field.to_string(),
                    },
                )
            })?;
        }

        let category = fields[8];
        let index: i64 = category.parse().map_err(|_| {
            RecordError::new(
                line,
                RecordErrorKind::InvalidNumber {
                    field: "category",
                    value: category.to_string(),
                },
            )
        })?;
        let kind = BodyKind::from_index(index).ok_or_else(|| {
            RecordError::new(
                line,
                RecordErrorKind::UnknownCategory {
                    value: category.to_string(),
                },
            )
        })?;

        let [x, y, z, vx, vy, vz, mass] = numbers;
        Ok(Body::new(BodyData::new(
            [x, y, z],
            [vx, vy, vz],
            mass,
            unquote(fields[7]),
            kind,
        )))
    }

    /// Parse bodies from any buffered reader
    ///
    /// `source` only identifies the reader in errors.
    ///
    /// # Errors
    ///
    /// - [`IngestError::SourceUnreadable`] if reading fails part way
    ///
    /// A line that is not valid UTF-8 is a malformed record, not an
    /// unreadable source.
    /// - [`IngestError::MalformedRecord`] for the first bad record, if strict
    pub fn parse_reader<R: BufRead>(&self, mut reader: R, source: &Path) -> Result<ParsedBodies, IngestError> {
        let mut parsed = ParsedBodies::default();
        let mut buffer = Vec::new();
        let mut number = 0;

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|cause| IngestError::SourceUnreadable {
                    source: source.to_path_buf(),
                    cause,
                })?;
            if read == 0 {
                break;
            }
            number += 1;

            let bytes = strip_line_ending(&buffer);
            if bytes.first() == Some(&(COMMENT as u8)) {
                continue;
            }

            // Undecodable bytes only spoil their own record
            let result = match std::str::from_utf8(bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => Self::parse_record(line, number),
                Err(err) => Err(RecordError::new(
                    number,
                    RecordErrorKind::InvalidEncoding {
                        valid_up_to: err.valid_up_to(),
                    },
                )),
            };

            match result {
                Ok(body) => parsed.bodies.push(body),
                Err(record) if self.strict => {
                    return Err(IngestError::MalformedRecord {
                        source: source.to_path_buf(),
                        record,
                    });
                }
                Err(record) => {
                    if self.warn_on_invalid {
                        eprintln!(
                            "Warning: Skipping malformed record in '{}', {}",
                            source.display(),
                            record
                        );
                    }
                    parsed.rejected.push(record);
                }
            }
        }

        Ok(parsed)
    }
}

impl Default for CsvBodyParser {
    fn default() -> Self {
        CsvBodyParser::new()
    }
}

impl BodyParser for CsvBodyParser {
    fn name(&self) -> &str {
        "csv"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn extensions(&self) -> &[&str] {
        &["csv", "txt"]
    }

    fn parse_bodies(&self, source: &Path) -> Result<ParsedBodies, IngestError> {
        let file = File::open(source).map_err(|cause| IngestError::SourceUnreadable {
            source: source.to_path_buf(),
            cause,
        })?;
        self.parse_reader(BufReader::new(file), source)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn unquote(label: &str) -> &str {
    label
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(label)
}

/// Write bodies in the CSV body format, one record per line
///
/// Numbers are written in their shortest exact form, so reading the output
/// back reproduces every field bit for bit. Radii are not part of the
/// format and are dropped.
///
/// # Errors
///
/// - [`IngestError::UnrepresentableLabel`] if a label contains a delimiter,
///   quote or line break, or has surrounding whitespace
/// - [`IngestError::Write`] if the writer fails
pub fn write_bodies<W: Write>(mut writer: W, bodies: &[Body]) -> Result<(), IngestError> {
    for body in bodies {
        let label = body.label();
        if label.contains([DELIMITER, '"', '\n', '\r']) || label.trim() != label {
            return Err(IngestError::UnrepresentableLabel {
                label: label.to_string(),
            });
        }

        let [x, y, z] = body.position();
        let [vx, vy, vz] = body.velocity();
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            x,
            y,
            z,
            vx,
            vy,
            vz,
            body.mass(),
            label,
            body.kind().index()
        )
        .map_err(IngestError::Write)?;
    }

    writer.flush().map_err(IngestError::Write)
}

/// Write bodies to a file in the CSV body format
///
/// See [`write_bodies`].
pub fn write_file(path: impl AsRef<Path>, bodies: &[Body]) -> Result<(), IngestError> {
    let file = File::create(path.as_ref()).map_err(IngestError::Write)?;
    write_bodies(BufWriter::new(file), bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(text: &str) -> ParsedBodies {
        let mut parser = CsvBodyParser::new();
        parser.set_warn_on_invalid(false);
        parser.parse_reader(text.as_bytes(), Path::new("<test>")).unwrap()
    }

    #[test]
    fn test_parse_record() {
        let body = CsvBodyParser::parse_record(
            "100.0, 100.0, -4.0, 1200, 1200, 1200, 1.0e21, \"JayWorld\", 0",
            1,
        )
        .unwrap();

        assert_eq!(body.position(), [100.0, 100.0, -4.0]);
        assert_eq!(body.velocity(), [1200.0, 1200.0, 1200.0]);
        assert_eq!(body.mass(), 1.0e21);
        assert_eq!(body.label(), "JayWorld");
        assert_eq!(body.kind(), BodyKind::Star);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let parsed = parse("# header\n\n   \n1,2,3,4,5,6,7,Kitten,2\n#1,2,3,4,5,6,7,Ghost,1\n");
        assert_eq!(parsed.bodies.len(), 1);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.bodies[0].kind(), BodyKind::DwarfPlanetary);
    }

    #[test]
    fn test_field_count_is_exact() {
        let parsed = parse("1,2,3,4,5,6,7,Kitten\n1,2,3,4,5,6,7,Kitten,1,extra\n");
        assert!(parsed.bodies.is_empty());
        assert_eq!(
            parsed.rejected,
            vec![
                RecordError::new(1, RecordErrorKind::FieldCount { expected: 9, found: 8 }),
                RecordError::new(2, RecordErrorKind::FieldCount { expected: 9, found: 10 }),
            ]
        );
    }

    #[test]
    fn test_invalid_number_names_field() {
        let parsed = parse("1,2,3,4,five,6,7,Kitten,1\n");
        assert_eq!(
            parsed.rejected[0].kind,
            RecordErrorKind::InvalidNumber {
                field: "vy",
                value: "five".to_string()
            }
        );
    }

    #[test]
    fn test_category_bounds() {
        let parsed = parse("1,2,3,4,5,6,7,A,3\n1,2,3,4,5,6,7,B,-1\n1,2,3,4,5,6,7,C,x\n");
        let kinds: Vec<_> = parsed.rejected.iter().map(|r| r.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                RecordErrorKind::UnknownCategory { value: "3".to_string() },
                RecordErrorKind::UnknownCategory { value: "-1".to_string() },
                RecordErrorKind::InvalidNumber {
                    field: "category",
                    value: "x".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_malformed_record_does_not_stop_parsing() {
        let parsed = parse("0,0,0,0,0,0,1,A,0\nbroken\n1,1,1,0,0,0,2,B,1\n");
        let labels: Vec<&str> = parsed.bodies.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line, 2);
    }

    #[test]
    fn test_invalid_utf8_rejects_only_its_record() {
        let text: &[u8] = b"0,0,0,0,0,0,1,A,0\n1,1,1,0,0,0,2,\xff\xfe,1\r\n2,2,2,0,0,0,3,C,2\n";
        let mut parser = CsvBodyParser::new();
        parser.set_warn_on_invalid(false);
        let parsed = parser.parse_reader(text, Path::new("<test>")).unwrap();

        let labels: Vec<&str> = parsed.bodies.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["A", "C"]);
        assert_eq!(
            parsed.rejected,
            vec![RecordError::new(
                2,
                RecordErrorKind::InvalidEncoding { valid_up_to: 14 }
            )]
        );
    }

    #[test]
    fn test_strict_parser_rejects_invalid_utf8() {
        let text: &[u8] = b"0,0,0,0,0,0,1,A,0\n0,0,0,0,0,0,1,\xc3,0\n";
        match CsvBodyParser::strict().parse_reader(text, Path::new("<test>")) {
            Err(IngestError::MalformedRecord { record, .. }) => {
                assert_eq!(record.line, 2);
                assert!(matches!(record.kind, RecordErrorKind::InvalidEncoding { .. }));
            }
            other => panic!("expected a malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_parser_aborts() {
        assert!(CsvBodyParser::strict().is_strict());
        assert!(!CsvBodyParser::default().is_strict());

        let result = CsvBodyParser::strict().parse_reader(
            "0,0,0,0,0,0,1,A,0\n0,0,0,0,0,0,1,B,7\n".as_bytes(),
            Path::new("<test>"),
        );
        match result {
            Err(IngestError::MalformedRecord { record, .. }) => assert_eq!(record.line, 2),
            other => panic!("expected a malformed record error, got {:?}", other),
        }
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"Earth\""), "Earth");
        assert_eq!(unquote("Earth"), "Earth");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"Earth"), "\"Earth");
    }

    #[test]
    fn test_write_rejects_delimiters_in_labels() {
        let body = Body::new(BodyData::new([0.0; 3], [0.0; 3], 1.0, "a,b", BodyKind::Star));
        let mut out = Vec::new();
        assert!(matches!(
            write_bodies(&mut out, &[body]),
            Err(IngestError::UnrepresentableLabel { .. })
        ));
    }

    #[test]
    fn test_written_records_read_back_exactly() {
        let bodies = vec![
            Body::new(BodyData::new([0.1, -2.5e-7, 3.0e300], [1.0 / 3.0, 0.0, -0.0], 5.972e24, "Earth", BodyKind::Planetary)),
            Body::new(BodyData::new([f64::MIN_POSITIVE, 1.0, 2.0], [0.0; 3], 1.0e21, "JayWorld", BodyKind::Star)),
        ];

        let mut out = Vec::new();
        write_bodies(&mut out, &bodies).unwrap();
        let parsed = parse(std::str::from_utf8(&out).unwrap());

        assert!(parsed.rejected.is_empty());
        for (read, written) in parsed.bodies.iter().zip(&bodies) {
            assert_eq!(read.data(), written.data());
        }
    }
}
