//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unitchat_domain::OutputFormat as DomainOutputFormat;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for unitchat
#[derive(Parser, Debug)]
#[command(name = "unitchat")]
#[command(author, version, about = "Unit converter with a Gemini-backed assistant")]
#[command(long_about = r#"
unitchat converts values between units of length, weight, temperature, area
and volume. Conversions run locally, or can be handed to Google Gemini as a
natural-language request. A free-text chat with the same model is available
in the interactive session.

GOOGLE_API_KEY must be set in the environment or in a .env file.

Configuration files are loaded from (in priority order):
1. UNITCHAT_* environment variables
2. --config <path>     Explicit config file
3. ./unitchat.toml     Project-level config
4. ~/.config/unitchat/config.toml   Global config

Example:
  unitchat convert length mile kilometer 5
  unitchat convert temperature celsius fahrenheit 21.5 --llm
  unitchat ask "How many teaspoons are in a cup?"
  unitchat units volume
  unitchat
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands; without one the interactive session starts
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Convert a value between two units of the same category
    Convert {
        /// Category: length, weight, temperature, area or volume
        category: String,

        /// Unit to convert from
        from: String,

        /// Unit to convert to
        to: String,

        /// Non-negative value to convert
        #[arg(allow_hyphen_values = true, value_parser = parse_value)]
        value: f64,

        /// Ask the assistant instead of converting locally
        #[arg(long)]
        llm: bool,
    },

    /// Send one chat message to the assistant and print the reply
    Ask {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List categories, or the units of one category
    Units {
        /// Category to list units for
        category: Option<String>,
    },

    /// Start the interactive session (default)
    Chat,
}

impl Cli {
    /// The subcommand to run, defaulting to the interactive session
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

/// Parse a conversion value: a finite number no smaller than 0
pub fn parse_value(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", s));
    }
    if value < 0.0 {
        return Err(format!("value must be at least 0, got {}", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_chat() {
        let cli = Cli::try_parse_from(["unitchat"]).unwrap();
        assert_eq!(cli.subcommand(), Command::Chat);
        assert_eq!(cli.verbose, 0);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_convert() {
        let cli =
            Cli::try_parse_from(["unitchat", "convert", "length", "mile", "kilometer", "5"]).unwrap();
        assert_eq!(
            cli.subcommand(),
            Command::Convert {
                category: "length".to_string(),
                from: "mile".to_string(),
                to: "kilometer".to_string(),
                value: 5.0,
                llm: false,
            }
        );
    }

    #[test]
    fn test_parse_convert_llm_with_global_flags() {
        let cli = Cli::try_parse_from([
            "unitchat", "-vv", "convert", "weight", "pound", "gram", "2.5", "--llm", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.subcommand(), Command::Convert { llm: true, .. }));
    }

    #[test]
    fn test_negative_value_rejected() {
        let result =
            Cli::try_parse_from(["unitchat", "convert", "length", "meter", "yard", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["unitchat", "ask", "hello", "there"]).unwrap();
        assert_eq!(
            cli.subcommand(),
            Command::Ask {
                text: vec!["hello".to_string(), "there".to_string()]
            }
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("0"), Ok(0.0));
        assert_eq!(parse_value(" 12.5 "), Ok(12.5));
        assert!(parse_value("-0.1").is_err());
        assert!(parse_value("abc").is_err());
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    #[test]
    fn test_output_format_into_domain() {
        assert_eq!(DomainOutputFormat::from(OutputFormat::Json), DomainOutputFormat::Json);
        assert_eq!(DomainOutputFormat::from(OutputFormat::Text), DomainOutputFormat::Text);
    }
}
