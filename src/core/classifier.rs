//! Avro Phonetic alphabet character classes
//!
//! Character classes of the Avro Phonetic alphabet. Rule conditions and the
//! input case folding are both defined in terms of these predicates.

/// Phonetic vowels (matched case-insensitively)
const VOWELS: &str = "aeiou";

/// Phonetic consonants (matched case-insensitively)
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Letters whose uppercase form is a distinct phonetic key
const CASE_SENSITIVE: &str = "oiudgjnrstyz";

/// Is `c` a phonetic vowel (`a e i o u`, either case)
pub fn is_vowel(c: char) -> bool {
    c.is_ascii() && VOWELS.contains(c.to_ascii_lowercase())
}

/// Is `c` a phonetic consonant (either case)
pub fn is_consonant(c: char) -> bool {
    c.is_ascii() && CONSONANTS.contains(c.to_ascii_lowercase())
}

/// ASCII digit
pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

/// Anything that is not a phonetic letter acts as a word boundary:
/// whitespace, symbols, digits and any non-ASCII glyph.
pub fn is_punctuation(c: char) -> bool {
    !(is_vowel(c) || is_consonant(c))
}

/// Does the letter keep its case when fed to the scanner
pub fn is_case_sensitive(c: char) -> bool {
    c.is_ascii() && CASE_SENSITIVE.contains(c.to_ascii_lowercase())
}

/// Input case folding
///
/// ASCII uppercase letters are lowercased unless their lowercase form is
/// case-sensitive in the alphabet (`"B"` reads as `"b"`, `"T"` stays `"T"`).
/// Non-ASCII characters are left as they are.
pub fn fix_string_case(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() && !is_case_sensitive(c) {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}
