//! # pipefmt
//!
//! Normalizes a pipe-separated list of tokens into display-friendly names.
//!
//! Plain tokens are capitalized. Hyphenated tokens become a compact title-case
//! identifier followed by the original token in quotes:
//!
//! ```text
//! foo-bar|baz  ->  FooBar "foo-bar" | Baz
//! ```
//!
//! The transformation is one-directional: feeding the output back in does not
//! reproduce the input.

pub mod pipefmt;
