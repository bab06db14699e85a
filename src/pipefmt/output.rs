//! Output renderings
//!
//! `line` is the joined display string. `json` and `yaml` expose every
//! formatted token with its kind and identifier, for scripts that want more
//! than the display form. No rendering ends with a newline; the caller adds
//! one.

use super::error::{Error, Result};
use super::formatter::Formatter;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Line,
    Json,
    Yaml,
}

impl OutputFormat {
    /// All format names, in the order shown in help text
    pub const ALL: &'static [&'static str] = &["line", "json", "yaml"];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Line => "line",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(OutputFormat::Line),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format `input` and render it in `format`.
pub fn render(formatter: &Formatter, input: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Line => Ok(formatter.format(input)),
        OutputFormat::Json => {
            let tokens = formatter.format_tokens(input);
            Ok(serde_json::to_string_pretty(&tokens)?)
        }
        OutputFormat::Yaml => {
            let tokens = formatter.format_tokens(input);
            let yaml = serde_yaml::to_string(&tokens)?;
            Ok(yaml.trim_end_matches('\n').to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        for name in OutputFormat::ALL {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.name(), *name);
        }
    }

    #[test]
    fn test_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref name) if name == "xml"));
    }

    #[test]
    fn test_line_rendering() {
        let out = render(&Formatter::default(), "foo|bar", OutputFormat::Line).unwrap();
        assert_eq!(out, "Foo | Bar");
    }

    #[test]
    fn test_json_rendering() {
        let out = render(&Formatter::default(), "foo-bar|baz", OutputFormat::Json).unwrap();
        insta::assert_snapshot!(out, @r###"
        [
          {
            "original": "foo-bar",
            "kind": "hyphenated",
            "identifier": "FooBar",
            "display": "FooBar \"foo-bar\""
          },
          {
            "original": "baz",
            "kind": "plain",
            "display": "Baz"
          }
        ]
        "###);
    }

    #[test]
    fn test_yaml_rendering() {
        let out = render(&Formatter::default(), "a-b-c|x", OutputFormat::Yaml).unwrap();
        assert!(!out.ends_with('\n'));

        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        let items = value.as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["kind"].as_str(), Some("hyphenated"));
        assert_eq!(items[0]["identifier"].as_str(), Some("ABC"));
        assert_eq!(items[0]["display"].as_str(), Some("ABC \"a-b-c\""));
        assert_eq!(items[1]["display"].as_str(), Some("X"));
        assert!(items[1].get("identifier").is_none());
    }
}
