//! CLI definition using clap

use clap::{Parser, Subcommand};
use parcel_types::{OutputFormat, UnitSystem};

#[derive(Parser)]
#[command(name = "parcel-fee")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fulfillment fee tier and savings calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a single item
    Quote {
        /// Item length (cm for metric, in for imperial)
        #[arg(allow_hyphen_values = true)]
        length: String,

        #[arg(allow_hyphen_values = true)]
        width: String,

        #[arg(allow_hyphen_values = true)]
        height: String,

        /// Item weight (kg for metric, lb for imperial)
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Unit system of the measurements. Uses config value if not specified.
        #[arg(long, short = 'u')]
        unit: Option<UnitSystem>,

        /// Item is apparel or footwear. `--apparel` alone means true.
        /// Uses config value if not specified.
        #[arg(long, short = 'a', num_args = 0..=1, default_missing_value = "true")]
        apparel: Option<bool>,
    },

    /// Show size tier thresholds
    Tiers {
        /// Unit system to display thresholds in
        #[arg(long, short = 'u')]
        unit: Option<UnitSystem>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default unit system
        #[arg(long)]
        set_unit: Option<UnitSystem>,

        /// Set whether items are apparel by default
        #[arg(long)]
        set_apparel: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "parcel-fee", "quote", "20", "15", "5", "0.5", "--unit", "imperial", "--apparel",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote {
                length,
                weight,
                unit,
                apparel,
                ..
            } => {
                assert_eq!(length, "20");
                assert_eq!(weight, "0.5");
                assert_eq!(unit, Some(UnitSystem::Imperial));
                assert_eq!(apparel, Some(true));
            }
            _ => panic!("expected quote"),
        }
    }

    fn parse_apparel(extra: &[&str]) -> Option<bool> {
        let mut args = vec!["parcel-fee", "quote", "10", "8", "0.5", "0.6"];
        args.extend_from_slice(extra);
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Quote { apparel, .. } => apparel,
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_apparel_flag_values() {
        assert_eq!(parse_apparel(&[]), None);
        assert_eq!(parse_apparel(&["--apparel"]), Some(true));
        assert_eq!(parse_apparel(&["-a"]), Some(true));
        assert_eq!(parse_apparel(&["--apparel", "true"]), Some(true));
        assert_eq!(parse_apparel(&["--apparel", "false"]), Some(false));
        assert_eq!(parse_apparel(&["--apparel=false", "-u", "imperial"]), Some(false));
    }

    #[test]
    fn test_quote_keeps_unparsable_text() {
        let cli = Cli::try_parse_from(["parcel-fee", "quote", "abc", "1", "1", "1"]).unwrap();
        match cli.command {
            Commands::Quote { length, unit, .. } => {
                assert_eq!(length, "abc");
                assert_eq!(unit, None);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["parcel-fee", "tiers", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
