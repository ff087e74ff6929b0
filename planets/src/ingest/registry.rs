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
//! Parser registry
//!
//! Parsers are registered statically under a unique name. The registry
//! checks each parser's API version against [`PARSER_API_VERSION`] and
//! picks a parser for a source by its file extension.

use super::{BodyParser, CsvBodyParser, IngestError, ParsedBodies, PARSER_API_VERSION};
use semver::Version;
use std::collections::HashMap;
use std::path::Path;

/// Registry of body parsers
///
/// # Example
///
/// ```rust
/// use planets::ingest::ParserRegistry;
///
/// let registry = ParserRegistry::with_defaults();
/// assert!(registry.get("csv").is_some());
/// assert_eq!(registry.for_path("system.CSV").map(|p| p.name()), Some("csv"));
/// ```
pub struct ParserRegistry {
    /// Registered parsers indexed by name
    parsers: HashMap<String, Box<dyn BodyParser>>,
    /// Parser names in registration order
    order: Vec<String>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ParserRegistry {
            parsers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with the built-in parsers
    pub fn with_defaults() -> Self {
        let mut registry = ParserRegistry::new();
        registry.insert(Box::new(CsvBodyParser::new()));
        registry
    }

    /// Register a parser
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or an error if:
    /// - A parser with the same name is already registered
    /// - The parser API version is incompatible
    pub fn register(&mut self, parser: Box<dyn BodyParser>) -> Result<(), String> {
        let name = parser.name();

        if self.parsers.contains_key(name) {
            return Err(format!("Parser '{}' is already registered", name));
        }

        let parser_api_version = parser.api_version();
        if !is_version_compatible(parser_api_version, PARSER_API_VERSION) {
            return Err(format!(
                "Parser '{}' API version {} is incompatible with API version {}",
                name, parser_api_version, PARSER_API_VERSION
            ));
        }

        self.insert(parser);
        Ok(())
    }

    /// Replace or add a parser without checks, keeping the original position
    /// if the name is already known
    fn insert(&mut self, parser: Box<dyn BodyParser>) {
        let name = parser.name().to_string();
        if !self.parsers.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.parsers.insert(name, parser);
    }

    /// Replace a registered parser with another of the same name
    ///
    /// Useful for swapping in a differently configured built-in, such as a
    /// strict [`CsvBodyParser`].
    pub fn replace(&mut self, parser: Box<dyn BodyParser>) -> Result<(), String> {
        let name = parser.name().to_string();
        if !self.parsers.contains_key(&name) {
            return Err(format!("Parser '{}' is not registered", name));
        }
        if !is_version_compatible(parser.api_version(), PARSER_API_VERSION) {
            return Err(format!(
                "Parser '{}' API version {} is incompatible with API version {}",
                name,
                parser.api_version(),
                PARSER_API_VERSION
            ));
        }
        self.insert(parser);
        Ok(())
    }

    /// Remove a parser by name
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn BodyParser>> {
        self.order.retain(|n| n != name);
        self.parsers.remove(name)
    }

    /// Get a parser by name
    pub fn get(&self, name: &str) -> Option<&dyn BodyParser> {
        self.parsers.get(name).map(|p| &**p)
    }

    /// Find the first registered parser that handles the source's extension
    ///
    /// Extensions are compared case-insensitively.
    pub fn for_path(&self, source: impl AsRef<Path>) -> Option<&dyn BodyParser> {
        let extension = source.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        self.order
            .iter()
            .filter_map(|name| self.parsers.get(name))
            .find(|parser| parser.extensions().contains(&extension.as_str()))
            .map(|p| &**p)
    }

    /// Parse a source with the parser matching its extension
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnsupportedSource`] if no parser matches, or
    /// whatever the chosen parser returns.
    pub fn parse(&self, source: impl AsRef<Path>) -> Result<ParsedBodies, IngestError> {
        let source = source.as_ref();
        let parser = self
            .for_path(source)
            .ok_or_else(|| IngestError::UnsupportedSource {
                source: source.to_path_buf(),
            })?;
        parser.parse_bodies(source)
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// Get the names of registered parsers in registration order
    pub fn parser_names(&self) -> &[String] {
        &self.order
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        ParserRegistry::with_defaults()
    }
}

/// Check if a parser API version is compatible with the registry's
///
/// Major versions must match. For 0.x versions the minor version must match
/// too; otherwise the parser's minor version must not exceed the registry's.
fn is_version_compatible(parser_version: &str, api_version: &str) -> bool {
    let (Ok(parser_ver), Ok(api_ver)) = (Version::parse(parser_version), Version::parse(api_version)) else {
        return false;
    };

    if parser_ver.major != api_ver.major {
        return false;
    }

    if parser_ver.major != 0 {
        parser_ver.minor <= api_ver.minor
    } else {
        parser_ver.minor == api_ver.minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, BodyData, BodyKind};

    struct FixedParser {
        name: &'static str,
        api_version: &'static str,
        extensions: &'static [&'static str],
    }

    impl FixedParser {
        fn new(name: &'static str, extensions: &'static [&'static str]) -> Self {
            FixedParser {
                name,
                api_version: PARSER_API_VERSION,
                extensions,
            }
        }
    }

    impl BodyParser for FixedParser {
        fn name(&self) -> &str {
            self.name
        }

        fn version(&self) -> &str {
            "1.0.0"
        }

        fn api_version(&self) -> &str {
            self.api_version
        }

        fn extensions(&self) -> &[&str] {
            self.extensions
        }

        fn parse_bodies(&self, _source: &Path) -> Result<ParsedBodies, IngestError> {
            Ok(ParsedBodies {
                bodies: vec![Body::new(BodyData::new([0.0; 3], [0.0; 3], 1.0, self.name, BodyKind::Star))],
                rejected: Vec::new(),
            })
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = ParserRegistry::new();
        assert_eq!(registry.parser_count(), 0);
        assert_eq!(ParserRegistry::with_defaults().parser_count(), 1);
    }

    #[test]
    fn test_duplicate_parser_registration() {
        let mut registry = ParserRegistry::new();
        registry.register(Box::new(FixedParser::new("fixed", &["dat"]))).unwrap();

        let result = registry.register(Box::new(FixedParser::new("fixed", &["dat"])));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("already registered"));
    }

    #[test]
    fn test_incompatible_api_version_rejected() {
        let mut registry = ParserRegistry::new();
        let mut parser = FixedParser::new("future", &["dat"]);
        parser.api_version = "0.2.0";

        let result = registry.register(Box::new(parser));
        assert!(result.unwrap_err().contains("incompatible"));
        assert_eq!(registry.parser_count(), 0);
    }

    #[test]
    fn test_version_compatibility() {
        assert!(is_version_compatible("0.1.0", "0.1.0"));
        assert!(is_version_compatible("0.1.5", "0.1.0"));
        assert!(!is_version_compatible("0.2.0", "0.1.0"));
        assert!(!is_version_compatible("1.0.0", "0.1.0"));
        assert!(is_version_compatible("1.0.0", "1.2.0"));
        assert!(!is_version_compatible("1.3.0", "1.2.0"));
        assert!(!is_version_compatible("not a version", "0.1.0"));
    }

    #[test]
    fn test_lookup_by_extension() {
        let mut registry = ParserRegistry::with_defaults();
        registry.register(Box::new(FixedParser::new("fixed", &["dat", "csv"]))).unwrap();

        // Registration order decides ties
        assert_eq!(registry.for_path("a/b/system.csv").map(|p| p.name()), Some("csv"));
        assert_eq!(registry.for_path("system.TXT").map(|p| p.name()), Some("csv"));
        assert_eq!(registry.for_path("system.dat").map(|p| p.name()), Some("fixed"));
        assert!(registry.for_path("system.json").is_none());
        assert!(registry.for_path("system").is_none());
    }

    #[test]
    fn test_parse_dispatches_to_parser() {
        let mut registry = ParserRegistry::new();
        registry.register(Box::new(FixedParser::new("fixed", &["dat"]))).unwrap();

        let parsed = registry.parse("anything.dat").unwrap();
        assert_eq!(parsed.bodies[0].label(), "fixed");

        assert!(matches!(
            registry.parse("anything.csv"),
            Err(IngestError::UnsupportedSource { .. })
        ));
    }

    #[test]
    fn test_replace_and_unregister() {
        let mut registry = ParserRegistry::with_defaults();
        assert!(registry.replace(Box::new(CsvBodyParser::strict())).is_ok());
        assert_eq!(registry.parser_count(), 1);
        assert!(registry.replace(Box::new(FixedParser::new("fixed", &[]))).is_err());

        assert!(registry.unregister("csv").is_some());
        assert!(registry.unregister("csv").is_none());
        assert!(registry.parser_names().is_empty());
    }
}
