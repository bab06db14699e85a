//! Tokens and their formatted form
//!
//! A token is one trimmed piece of the raw input. Classification depends on a
//! single question: does the token contain the hyphen character? Letter case,
//! digits and other punctuation play no part.

use serde::Serialize;
use std::fmt;

/// Which formatting path a token takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// No hyphen: sentence capitalization only
    Plain,
    /// Contains a hyphen: compact identifier plus the quoted original
    Hyphenated,
}

impl TokenKind {
    pub fn classify(text: &str, hyphen: char) -> Self {
        if text.contains(hyphen) {
            TokenKind::Hyphenated
        } else {
            TokenKind::Plain
        }
    }
}

/// A trimmed slice of the input, borrowed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    original: &'a str,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Trim `raw` and classify it against `hyphen`.
    pub fn new(raw: &'a str, hyphen: char) -> Self {
        let original = raw.trim();
        Token {
            original,
            kind: TokenKind::classify(original, hyphen),
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// The result of formatting one token
///
/// `display` is what line output shows. `identifier` is only set for
/// hyphenated tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedToken {
    pub original: String,
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub display: String,
}

impl fmt::Display for FormattedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_trimmed() {
        let token = Token::new("  hello \t", '-');
        assert_eq!(token.original(), "hello");
        assert_eq!(token.kind(), TokenKind::Plain);
    }

    #[test]
    fn test_classification_ignores_case() {
        assert_eq!(Token::new("ABC-def", '-').kind(), TokenKind::Hyphenated);
        assert_eq!(Token::new("ABCDEF", '-').kind(), TokenKind::Plain);
    }

    #[test]
    fn test_classification_ignores_other_punctuation() {
        assert_eq!(Token::new("foo_bar", '-').kind(), TokenKind::Plain);
        assert_eq!(Token::new("v2.beta", '-').kind(), TokenKind::Plain);
    }

    #[test]
    fn test_custom_hyphen() {
        assert_eq!(Token::new("foo_bar", '_').kind(), TokenKind::Hyphenated);
        assert_eq!(Token::new("foo-bar", '_').kind(), TokenKind::Plain);
    }

    #[test]
    fn test_blank_token_is_empty_plain() {
        let token = Token::new("   ", '-');
        assert_eq!(token.original(), "");
        assert_eq!(token.kind(), TokenKind::Plain);
    }

    #[test]
    fn test_formatted_token_displays_display_field() {
        let token = FormattedToken {
            original: "foo-bar".to_string(),
            kind: TokenKind::Hyphenated,
            identifier: Some("FooBar".to_string()),
            display: "FooBar \"foo-bar\"".to_string(),
        };
        assert_eq!(token.to_string(), "FooBar \"foo-bar\"");
    }
}
