//! Token formatting pipeline
//!
//! - [casing]: sentence capitalization, title case and compact identifiers
//! - [token]: token classification and the formatted result type
//! - [formatter]: split, format and join an input line
//! - [output]: line / json / yaml renderings
//! - [config]: layered TOML configuration with embedded defaults
//! - [error]: error type shared by config loading and rendering

pub mod casing;
pub mod config;
pub mod error;
pub mod formatter;
pub mod output;
pub mod token;

pub use error::{Error, Result};
pub use formatter::{format_line, FormatRules, Formatter};
pub use output::{render, OutputFormat};
pub use token::{FormattedToken, Token, TokenKind};
