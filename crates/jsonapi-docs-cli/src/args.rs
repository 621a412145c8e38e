//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Usage text printed by `--help`.
pub const HELP: &str = r"jsonapi-docs - JSON:API resource schema generator

USAGE:
    jsonapi-docs [OPTIONS] <MODEL_FILE>

ARGS:
    <MODEL_FILE>           Resource definition (TOML or JSON)

OPTIONS:
    -c, --config <PATH>    Path to configuration file (TOML or JSON)
        --columns <PATH>   Column catalogue file (TOML or JSON)
        --seed <N>         RNG seed for example values
        --compact          Print the schema on a single line
    -h, --help             Print help information
    -v, --version          Print version information

ENVIRONMENT VARIABLES:
    JSONAPI_DOCS__EXAMPLES__SEED        RNG seed for example values
    JSONAPI_DOCS__EXAMPLES__NOW         Pinned clock (RFC 3339)
    JSONAPI_DOCS__EXAMPLES__FAKE_DATA   Random words in object examples
    JSONAPI_DOCS__LOGGING__LEVEL        Log level (default: warn)
    JSONAPI_DOCS__LOGGING__FORMAT       json or pretty
    JSONAPI_DOCS__OUTPUT__PRETTY        Indent output (default: true)

EXAMPLES:
    # Reproducible output for snapshot tests
    jsonapi-docs --seed 42 models/articles.toml

    # With persisted column types
    jsonapi-docs --columns schema/columns.json models/people.json
";

/// Argument parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// Flag the parser does not know.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// Flag given without its value.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// `--seed` value is not an unsigned integer.
    #[error("invalid seed {0:?}: expected an unsigned integer")]
    InvalidSeed(String),

    /// No model file given.
    #[error("missing <MODEL_FILE> argument")]
    MissingModel,

    /// More than one positional argument.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a schema.
    Generate(Args),
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

/// Options for schema generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Resource definition file.
    pub model: PathBuf,
    /// Configuration file.
    pub config: Option<PathBuf>,
    /// Column catalogue file.
    pub columns: Option<PathBuf>,
    /// Seed overriding the configured one.
    pub seed: Option<u64>,
    /// Force single-line output.
    pub compact: bool,
}

impl Command {
    /// Parse the process arguments.
    pub fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut model = None;
        let mut config = None;
        let mut columns = None;
        let mut seed = None;
        let mut compact = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    config = Some(PathBuf::from(required_value(&mut args, &arg)?));
                }
                "--columns" => {
                    columns = Some(PathBuf::from(required_value(&mut args, &arg)?));
                }
                "--seed" => {
                    let value = required_value(&mut args, &arg)?;
                    seed = Some(value.parse().map_err(|_| ArgsError::InvalidSeed(value))?);
                }
                "--compact" => compact = true,
                "--help" | "-h" => return Ok(Self::Help),
                "--version" | "-v" => return Ok(Self::Version),
                other if other.starts_with('-') && other != "-" => {
                    return Err(ArgsError::UnknownArgument(other.to_string()));
                }
                _ => {
                    if model.is_some() {
                        return Err(ArgsError::UnexpectedArgument(arg.clone()));
                    }
                    model = Some(PathBuf::from(&arg));
                }
            }
        }

        Ok(Self::Generate(Args {
            model: model.ok_or(ArgsError::MissingModel)?,
            config,
            columns,
            seed,
            compact,
        }))
    }
}

fn required_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(args: &[&str]) -> Args {
        match Command::parse_from(args.iter().copied()).unwrap() {
            Command::Generate(args) => args,
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_model_only() {
        let args = generate(&["articles.toml"]);
        assert_eq!(args.model, PathBuf::from("articles.toml"));
        assert!(args.config.is_none());
        assert!(args.columns.is_none());
        assert!(args.seed.is_none());
        assert!(!args.compact);
    }

    #[test]
    fn test_parse_all_options() {
        let args = generate(&[
            "-c",
            "docs.toml",
            "--columns",
            "columns.json",
            "--seed",
            "42",
            "--compact",
            "people.json",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("docs.toml")));
        assert_eq!(args.columns, Some(PathBuf::from("columns.json")));
        assert_eq!(args.seed, Some(42));
        assert!(args.compact);
        assert_eq!(args.model, PathBuf::from("people.json"));
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(Command::parse_from(["--help"]), Ok(Command::Help));
        assert_eq!(Command::parse_from(["-h", "model.json"]), Ok(Command::Help));
        assert_eq!(Command::parse_from(["-v"]), Ok(Command::Version));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse_from(Vec::<String>::new()), Err(ArgsError::MissingModel));
        assert_eq!(
            Command::parse_from(["--seed"]),
            Err(ArgsError::MissingValue("--seed".to_string()))
        );
        assert_eq!(
            Command::parse_from(["--seed", "-1", "m.json"]),
            Err(ArgsError::InvalidSeed("-1".to_string()))
        );
        assert_eq!(
            Command::parse_from(["--verbose", "m.json"]),
            Err(ArgsError::UnknownArgument("--verbose".to_string()))
        );
        assert_eq!(
            Command::parse_from(["a.json", "b.json"]),
            Err(ArgsError::UnexpectedArgument("b.json".to_string()))
        );
    }

    #[test]
    fn test_help_mentions_every_flag() {
        for flag in ["--config", "--columns", "--seed", "--compact", "--help", "--version"] {
            assert!(HELP.contains(flag), "{flag}");
        }
    }
}
