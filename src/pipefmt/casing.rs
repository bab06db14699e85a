//! Casing primitives
//!
//! A word is a run of cased letters. Anything else, digits and punctuation
//! included, ends the word, so `foo_bar` title-cases to `Foo_Bar`, `2nd` to
//! `2Nd` and `o'neil` to `O'Neil`.
//!
//! Rust has no titlecase mapping, so a word's first letter takes its full
//! uppercase mapping: `ßa` becomes `SSa` (not `Ssa`) and `ǆ` becomes `Ǆ`
//! (not `ǅ`).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Lowercase}\p{Uppercase}\p{Lt}]+").unwrap());

/// Uppercase the first character and lowercase the rest of the string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Capitalize every word, leaving everything between words untouched.
pub fn title_case(s: &str) -> String {
    WORD.replace_all(s, |caps: &Captures| capitalize(&caps[0])).into_owned()
}

/// Drop the spaces from an already title-cased string. Tabs and other
/// whitespace stay.
pub fn compact_identifier(title_cased: &str) -> String {
    title_cased.replace(' ', "")
}
