//! Context rule evaluation
//!
//! Conditions always read the scanner's input, never the output produced so
//! far, so a rewrite earlier in the string cannot change a later decision.

use crate::core::classifier::{is_consonant, is_number, is_punctuation, is_vowel};
use crate::core::pattern::{Condition, Pattern, Rule, Scope, Side};

/// Replacement for a match of `pattern` spanning `input[start..end]`
///
/// The first rule whose conditions all hold wins; with no rules, or none
/// firing, the pattern's default replacement is used.
pub fn select_replacement<'p>(
    pattern: &'p Pattern,
    input: &[char],
    start: usize,
    end: usize,
) -> &'p str {
    match pattern
        .rules
        .iter()
        .find(|rule| rule_fires(rule, input, start, end))
    {
        Some(rule) => {
            log::trace!(
                "'{}' at {}: [{}] -> {:?}",
                pattern.find,
                start,
                describe(rule),
                rule.replace
            );
            &rule.replace
        }
        None => &pattern.replace,
    }
}

/// All conditions hold (an empty rule always fires)
pub fn rule_fires(rule: &Rule, input: &[char], start: usize, end: usize) -> bool {
    rule.conditions
        .iter()
        .all(|condition| condition_holds(condition, input, start, end))
}

fn describe(rule: &Rule) -> String {
    rule.conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Evaluate one condition against the context of `input[start..end]`
pub fn condition_holds(condition: &Condition, input: &[char], start: usize, end: usize) -> bool {
    let neighbour = match condition.side {
        Side::Prefix => start.checked_sub(1).and_then(|i| input.get(i)),
        Side::Suffix => input.get(end),
    }
    .copied();

    let held = match (&condition.scope, neighbour) {
        (Scope::Exact(value), _) => exact_matches(value, condition.side, input, start, end),
        (Scope::Boundary, next) => next.is_none(),
        // the edge of the string separates words like punctuation does
        (Scope::Punctuation, None) => true,
        (Scope::Punctuation, Some(c)) => is_punctuation(c),
        (Scope::Vowel, Some(c)) => is_vowel(c),
        (Scope::Consonant, Some(c)) => is_consonant(c),
        (Scope::Number, Some(c)) => is_number(c),
        (_, None) => false,
    };

    held != condition.negate
}

/// Literal comparison of the window right before `start` or right after `end`
fn exact_matches(value: &str, side: Side, input: &[char], start: usize, end: usize) -> bool {
    let width = value.chars().count();
    let window = match side {
        Side::Prefix => start.checked_sub(width).map(|from| from..start),
        Side::Suffix => Some(end..end + width).filter(|range| range.end <= input.len()),
    };

    match window {
        Some(range) => input[range].iter().copied().eq(value.chars()),
        None => false,
    }
}
