//! Split, format and join
//!
//! The input is split on the delimiter into an ordered list of tokens. There
//! is always at least one token: an input with no delimiter, including the
//! empty string, is a single token. Each token is formatted independently and
//! the results are joined with the separator.
//!
//! Plain tokens are capitalized (`hELLO` -> `Hello`). Hyphenated tokens have
//! every hyphen replaced by a space, are title-cased, and lose their spaces to
//! form an identifier. The original token follows in quotes
//! (`ABC-def` -> `AbcDef "ABC-def"`).

use super::casing::{capitalize, compact_identifier, title_case};
use super::token::{FormattedToken, Token, TokenKind};
use tracing::{debug, trace};

/// Characters and strings that drive splitting and formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRules {
    pub delimiter: char,
    pub separator: String,
    pub hyphen: char,
    pub quote: char,
}

impl Default for FormatRules {
    fn default() -> Self {
        FormatRules {
            delimiter: '|',
            separator: " | ".to_string(),
            hyphen: '-',
            quote: '"',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    rules: FormatRules,
}

impl Formatter {
    pub fn new(rules: FormatRules) -> Self {
        Formatter { rules }
    }

    /// Split `input` on the delimiter and trim every piece.
    pub fn tokens<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        input
            .split(self.rules.delimiter)
            .map(|piece| Token::new(piece, self.rules.hyphen))
            .collect()
    }

    pub fn format_token(&self, token: &Token<'_>) -> FormattedToken {
        let original = token.original();
        let formatted = match token.kind() {
            TokenKind::Plain => FormattedToken {
                original: original.to_string(),
                kind: TokenKind::Plain,
                identifier: None,
                display: capitalize(original),
            },
            TokenKind::Hyphenated => {
                let spaced = original.replace(self.rules.hyphen, " ");
                let identifier = compact_identifier(&title_case(&spaced));
                let quote = self.rules.quote;
                let display = format!("{identifier} {quote}{original}{quote}");
                FormattedToken {
                    original: original.to_string(),
                    kind: TokenKind::Hyphenated,
                    identifier: Some(identifier),
                    display,
                }
            }
        };
        trace!(original, display = %formatted.display, kind = ?formatted.kind, "formatted token");
        formatted
    }

    pub fn format_tokens(&self, input: &str) -> Vec<FormattedToken> {
        let tokens = self.tokens(input);
        debug!(count = tokens.len(), "split input into tokens");
        tokens.iter().map(|token| self.format_token(token)).collect()
    }

    /// Format every token and join them with the separator.
    pub fn format(&self, input: &str) -> String {
        self.format_tokens(input)
            .iter()
            .map(|token| token.display.as_str())
            .collect::<Vec<_>>()
            .join(&self.rules.separator)
    }
}

/// Format `input` with the default rules.
pub fn format_line(input: &str) -> String {
    Formatter::default().format(input)
}
