//! Roman phonetic -> Bengali converter
//!
//! Single left-to-right pass over the input. At each position the longest
//! matching pattern is emitted (rule-selected when it has rules) and the
//! cursor jumps past its key; anything no pattern starts with is copied as
//! is. The cursor never moves backwards.

use crate::core::classifier::fix_string_case;
use crate::core::rules::select_replacement;
use crate::core::table::PatternTable;

/// Convert phonetic text with the bundled Avro Phonetic table
///
/// Characters that no pattern matches (Bengali glyphs, whitespace, unknown
/// symbols) are kept as they are.
///
/// ```
/// assert_eq!(avro_phonetic::parse("ami banglay gan gai"), "আমি বাংলায় গান গাই");
/// assert_eq!(avro_phonetic::parse("বaba gO"), "বআবা গো");
/// ```
pub fn parse(input: &str) -> String {
    PhoneticParser::new(PatternTable::avro()).parse(input)
}

/// Phonetic parser over a pattern table
///
/// Holds no state between calls; one parser can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct PhoneticParser<'t> {
    table: &'t PatternTable,
    fold_case: bool,
}

impl<'t> PhoneticParser<'t> {
    /// Parser with input case folding enabled
    pub fn new(table: &'t PatternTable) -> Self {
        Self {
            table,
            fold_case: true,
        }
    }

    /// Enable or disable folding of non-case-sensitive uppercase letters
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Transliterate `input`
    pub fn parse(&self, input: &str) -> String {
        let chars: Vec<char> = if self.fold_case {
            fix_string_case(input).chars().collect()
        } else {
            input.chars().collect()
        };

        let mut output = String::with_capacity(input.len() * 3);
        let mut cursor = 0;

        while cursor < chars.len() {
            match self.table.longest_match(&chars, cursor) {
                Some(pattern) => {
                    let end = cursor + pattern.key_len();
                    output.push_str(select_replacement(pattern, &chars, cursor, end));
                    cursor = end;
                }
                None => {
                    output.push(chars[cursor]);
                    cursor += 1;
                }
            }
        }

        output
    }
}
