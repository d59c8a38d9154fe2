//! Pattern table loading and lookup
//!
//! Loads the ordered phonetic pattern list from JSON, validates it, and
//! indexes it by first character so lookup at a cursor position only walks
//! the patterns that can possibly match there.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::pattern::{Condition, Pattern, Rule, Scope, Side};

/// Bundled Avro Phonetic table
const AVRO_PHONETIC_JSON: &str = include_str!("../../data/avro_phonetic.json");

lazy_static! {
    static ref AVRO_TABLE: PatternTable = PatternTable::from_json(AVRO_PHONETIC_JSON)
        .unwrap_or_else(|e| panic!("bundled Avro Phonetic table is invalid: {}", e));
}

/// Pattern table load/validation error
#[derive(Debug)]
pub enum TableError {
    /// Reading the table file failed
    IoError(std::io::Error),
    /// Invalid JSON, or JSON of the wrong shape
    ParseError(String),
    /// A pattern that cannot be used by the scanner
    FormatError(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "failed to read pattern table: {}", e),
            TableError::ParseError(s) => write!(f, "failed to parse pattern table: {}", s),
            TableError::FormatError(s) => write!(f, "invalid pattern table: {}", s),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::IoError(e)
    }
}

/// Descriptive header of a table file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TableMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default)]
    meta: TableMeta,
    patterns: Vec<RawPattern>,
}

#[derive(Deserialize)]
struct RawPattern {
    find: String,
    replace: String,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Deserialize)]
struct RawRule {
    matches: Vec<RawMatch>,
    replace: String,
}

#[derive(Deserialize)]
struct RawMatch {
    #[serde(rename = "type")]
    kind: String,
    scope: String,
    #[serde(default)]
    value: Option<String>,
}

/// Ordered phonetic pattern table
///
/// Read-only once built. Among patterns matching at the same position the
/// longest key wins; equal-length keys keep declaration order.
#[derive(Debug, Clone)]
pub struct PatternTable {
    meta: TableMeta,
    patterns: Vec<Pattern>,
    /// first key character -> pattern indices, longest key first
    index: HashMap<char, Vec<usize>>,
}

impl PatternTable {
    /// Build a table from patterns in declaration order
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, TableError> {
        Self::with_meta(TableMeta::default(), patterns)
    }

    fn with_meta(meta: TableMeta, patterns: Vec<Pattern>) -> Result<Self, TableError> {
        for pattern in &patterns {
            validate(pattern)?;
        }

        let mut index: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, pattern) in patterns.iter().enumerate() {
            // validate() guarantees a non-empty key
            if let Some(first) = pattern.find.chars().next() {
                index.entry(first).or_default().push(i);
            }
        }
        // stable sort: equal lengths stay in declaration order
        for bucket in index.values_mut() {
            bucket.sort_by_key(|&i| std::cmp::Reverse(patterns[i].key_len()));
        }

        log::debug!(
            "pattern table '{}': {} patterns ({} with rules), {} lead characters",
            meta.name,
            patterns.len(),
            patterns.iter().filter(|p| p.has_rules()).count(),
            index.len()
        );

        Ok(Self {
            meta,
            patterns,
            index,
        })
    }

    /// The bundled Avro Phonetic table, built on first use
    pub fn avro() -> &'static PatternTable {
        &AVRO_TABLE
    }

    /// Load a table from a JSON file
    ///
    /// # File format
    /// ```json
    /// {
    ///   "meta": { "name": "Avro Phonetic", "version": "1" },
    ///   "patterns": [
    ///     { "find": "bh", "replace": "ভ" },
    ///     { "find": "o", "replace": "",
    ///       "rules": [
    ///         { "matches": [ { "type": "prefix", "scope": "punctuation" } ],
    ///           "replace": "অ" }
    ///       ] }
    ///   ]
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let raw: RawTable =
            serde_json::from_reader(reader).map_err(|e| TableError::ParseError(e.to_string()))?;

        Self::from_raw(raw)
    }

    /// Load a table from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let raw: RawTable =
            serde_json::from_str(json_str).map_err(|e| TableError::ParseError(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTable) -> Result<Self, TableError> {
        let patterns = raw
            .patterns
            .into_iter()
            .map(convert_pattern)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_meta(raw.meta, patterns)
    }

    /// Patterns whose key occurs in `input` at `at`, longest first
    pub fn lookup<'t>(
        &'t self,
        input: &'t [char],
        at: usize,
    ) -> impl Iterator<Item = &'t Pattern> + 't {
        input
            .get(at)
            .and_then(|c| self.index.get(c))
            .into_iter()
            .flatten()
            .map(move |&i| &self.patterns[i])
            .filter(move |pattern| pattern.matches_at(input, at))
    }

    /// The pattern the scanner uses at `at`, if any
    ///
    /// Same order as [`lookup`](Self::lookup); the result borrows only the table.
    pub fn longest_match(&self, input: &[char], at: usize) -> Option<&Pattern> {
        let bucket = self.index.get(input.get(at)?)?;
        bucket
            .iter()
            .map(|&i| &self.patterns[i])
            .find(|pattern| pattern.matches_at(input, at))
    }

    pub fn meta(&self) -> &TableMeta {
        &self.meta
    }

    /// All patterns in declaration order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn validate(pattern: &Pattern) -> Result<(), TableError> {
    if pattern.find.is_empty() {
        return Err(TableError::FormatError("empty find key".into()));
    }
    if !pattern.find.is_ascii() {
        return Err(TableError::FormatError(format!(
            "find key is not ASCII: {:?}",
            pattern.find
        )));
    }
    for rule in &pattern.rules {
        if rule.conditions.is_empty() {
            return Err(TableError::FormatError(format!(
                "rule without conditions in pattern '{}'",
                pattern.find
            )));
        }
        if rule.conditions.iter().any(|c| c.scope.width() == 0) {
            return Err(TableError::FormatError(format!(
                "empty exact value in pattern '{}'",
                pattern.find
            )));
        }
    }
    Ok(())
}

fn convert_pattern(raw: RawPattern) -> Result<Pattern, TableError> {
    let RawPattern {
        find,
        replace,
        rules,
    } = raw;

    let rules = rules
        .into_iter()
        .map(|rule| {
            let conditions = rule
                .matches
                .into_iter()
                .map(|m| convert_condition(m, &find))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Rule::new(conditions, rule.replace))
        })
        .collect::<Result<Vec<_>, TableError>>()?;

    Ok(Pattern {
        find,
        replace,
        rules,
    })
}

/// `{"type": "prefix", "scope": "!exact", "value": "a"}` -> `Condition`
fn convert_condition(raw: RawMatch, find: &str) -> Result<Condition, TableError> {
    let RawMatch { kind, scope, value } = raw;

    let side = match kind.as_str() {
        "prefix" => Side::Prefix,
        "suffix" => Side::Suffix,
        other => {
            return Err(TableError::FormatError(format!(
                "unknown condition type '{}' in pattern '{}'",
                other, find
            )))
        }
    };

    let (negate, name) = match scope.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, scope.as_str()),
    };

    let scope = match name {
        "vowel" => Scope::Vowel,
        "consonant" => Scope::Consonant,
        "punctuation" => Scope::Punctuation,
        "number" => Scope::Number,
        "boundary" => Scope::Boundary,
        "exact" => match value {
            Some(v) if !v.is_empty() => Scope::Exact(v),
            _ => {
                return Err(TableError::FormatError(format!(
                    "exact condition without value in pattern '{}'",
                    find
                )))
            }
        },
        other => {
            return Err(TableError::FormatError(format!(
                "unknown scope '{}' in pattern '{}'",
                other, find
            )))
        }
    };

    Ok(Condition {
        side,
        scope,
        negate,
    })
}
