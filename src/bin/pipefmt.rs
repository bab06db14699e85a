//! Command-line interface for pipefmt
//!
//! Usage:
//!   pipefmt `<input>`                      - Format a pipe-separated string
//!   pipefmt `<input>` --format json        - Emit every formatted token as JSON
//!   pipefmt `<input>` --config `<path>`    - Layer a TOML config over the defaults
//!
//! Inputs may start with a hyphen (`pipefmt "-webkit-box|x"`). Only an input
//! made entirely of known short flags, such as `-v`, needs a leading `--`.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use pipefmt::pipefmt::config::Loader;
use pipefmt::pipefmt::{render, Formatter, OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("pipefmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize pipe-separated tokens into display-friendly names")
        .arg(
            Arg::new("input")
                .help("Pipe-separated tokens, e.g. 'foo-bar|baz'")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: line)")
                .value_parser(PossibleValuesParser::new(OutputFormat::ALL.iter().copied())),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log to stderr; repeat for more detail")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let input = matches.get_one::<String>("input").expect("input is required");
    let config = matches.get_one::<PathBuf>("config");
    let format = matches.get_one::<String>("format");

    match run(input, config.map(PathBuf::as_path), format.map(String::as_str)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(input: &str, config: Option<&Path>, format: Option<&str>) -> Result<String> {
    let mut loader = Loader::new();
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format)?;
    }
    let config = loader.build()?;
    tracing::debug!(?config, "loaded configuration");

    let formatter = Formatter::new(config.rules()?);
    render(&formatter, input, config.output_format()?)
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
