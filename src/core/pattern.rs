//! Phonetic pattern data model
//!
//! A [`Pattern`] maps an ASCII key to Bengali text, optionally guarded by
//! ordered [`Rule`]s whose [`Condition`]s look at the characters around the
//! match in the original input.

use std::fmt;

/// Which side of the match a condition inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Characters immediately before the match start
    Prefix,
    /// Characters immediately after the match end
    Suffix,
}

/// What a condition tests the neighbouring characters for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Vowel,
    Consonant,
    /// Any non-letter; a string boundary also counts
    Punctuation,
    Number,
    /// Start of string (prefix) or end of string (suffix)
    Boundary,
    /// The literal text, compared character by character
    Exact(String),
}

impl Scope {
    /// Name used in the table file
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Vowel => "vowel",
            Scope::Consonant => "consonant",
            Scope::Punctuation => "punctuation",
            Scope::Number => "number",
            Scope::Boundary => "boundary",
            Scope::Exact(_) => "exact",
        }
    }

    /// Number of characters of context the scope consumes
    pub fn width(&self) -> usize {
        match self {
            Scope::Exact(value) => value.chars().count(),
            _ => 1,
        }
    }
}

/// One context test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub side: Side,
    pub scope: Scope,
    /// Invert the result of the test
    pub negate: bool,
}

impl Condition {
    pub fn prefix(scope: Scope) -> Self {
        Self {
            side: Side::Prefix,
            scope,
            negate: false,
        }
    }

    pub fn suffix(scope: Scope) -> Self {
        Self {
            side: Side::Suffix,
            scope,
            negate: false,
        }
    }

    /// Same test, inverted
    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Prefix => "prefix",
            Side::Suffix => "suffix",
        };
        let bang = if self.negate { "!" } else { "" };
        match &self.scope {
            Scope::Exact(value) => write!(f, "{side} {bang}exact {value:?}"),
            scope => write!(f, "{side} {bang}{}", scope.name()),
        }
    }
}

/// Conditions joined by AND, and the text they select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub conditions: Vec<Condition>,
    pub replace: String,
}

impl Rule {
    pub fn new(conditions: Vec<Condition>, replace: impl Into<String>) -> Self {
        Self {
            conditions,
            replace: replace.into(),
        }
    }
}

/// A phonetic pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// ASCII key matched against the input, case-sensitive
    pub find: String,
    /// Output when no rule fires
    pub replace: String,
    /// Tried in order, first firing rule wins
    pub rules: Vec<Rule>,
}

impl Pattern {
    /// Unconditional pattern
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Key length in characters (the key is ASCII, so also in bytes)
    pub fn key_len(&self) -> usize {
        self.find.len()
    }

    /// Does the key occur in `input` starting at character index `at`
    pub fn matches_at(&self, input: &[char], at: usize) -> bool {
        let end = at + self.key_len();
        end <= input.len() && input[at..end].iter().copied().eq(self.find.chars())
    }
}
