// resub/src/cli.rs
//! This file defines the command-line interface (CLI) for the resub
//! application: three positional arguments and nothing else.

use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "resub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace every match of a regular expression in a string",
    long_about = "Resub is a command-line utility that scans a string of text left to right and replaces every non-overlapping match of a regular expression with a literal replacement string, then prints the result. The pattern supports the extended-regular-expression surface: alternation, grouping, quantifiers, anchors and character classes."
)]
pub struct Cli {
    /// Regular expression to search for.
    #[arg(value_name = "PATTERN", help = "Regular expression to search for.")]
    pub pattern: String,

    /// Text to scan for matches.
    #[arg(value_name = "TEXT", help = "Text to scan for matches.")]
    pub text: String,

    /// Literal text substituted for each match.
    #[arg(value_name = "REPLACEMENT", help = "Literal text substituted for each match.")]
    pub replacement: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exactly_three_positionals() {
        let cli = Cli::try_parse_from(["resub", "a+", "banana", "X"]).unwrap();
        assert_eq!(cli.pattern, "a+");
        assert_eq!(cli.text, "banana");
        assert_eq!(cli.replacement, "X");
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(Cli::try_parse_from(["resub"]).is_err());
        assert!(Cli::try_parse_from(["resub", "a+"]).is_err());
        assert!(Cli::try_parse_from(["resub", "a+", "banana"]).is_err());
        assert!(Cli::try_parse_from(["resub", "a+", "banana", "X", "extra"]).is_err());
    }

    #[test]
    fn dash_prefixed_values_are_not_mistaken_for_flags_after_separator() {
        let cli = Cli::try_parse_from(["resub", "--", "-+", "a-b", "-"]).unwrap();
        assert_eq!(cli.pattern, "-+");
        assert_eq!(cli.replacement, "-");
    }
}
