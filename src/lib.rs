//! Avro Phonetic: Roman phonetic text to Bengali script
//!
//! ```
//! assert_eq!(avro_phonetic::parse("dhonyobad"), "ধন্যবাদ");
//! ```

pub mod config;
pub mod core;

pub use crate::core::converter::{parse, PhoneticParser};
pub use crate::core::pattern::{Condition, Pattern, Rule, Scope, Side};
pub use crate::core::table::{PatternTable, TableError, TableMeta};
