//! Phonetic transliteration engine

pub mod classifier;
pub mod converter;
pub mod pattern;
pub mod rules;
pub mod table;
