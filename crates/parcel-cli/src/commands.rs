//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_quote, output_tiers};
use parcel_app::app::{quote, QuoteInput};
use parcel_app::config::Config;
use parcel_types::{OutputFormat, Result, UnitSystem};
use tracing::{debug, info};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!(?config, "loaded configuration");

    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote {
            length,
            width,
            height,
            weight,
            unit,
            apparel,
        } => {
            let measurements = [length, width, height, weight].map(String::as_str);
            let input = quote_input(measurements, *unit, *apparel, &config);
            cmd_quote(&input, output_format)
        }

        Commands::Tiers { unit } => {
            output_tiers(output_format, unit.unwrap_or(config.unit_system))
        }

        Commands::Config {
            show,
            set_unit,
            set_apparel,
            set_output,
            reset,
        } => cmd_config(*show, *set_unit, *set_apparel, *set_output, *reset),
    }
}

/// Build quote input; flags given on the command line win over the config
fn quote_input(
    [length, width, height, weight]: [&str; 4],
    unit: Option<UnitSystem>,
    apparel: Option<bool>,
    config: &Config,
) -> QuoteInput {
    QuoteInput::new(length, width, height, weight)
        .with_unit_system(unit.unwrap_or(config.unit_system))
        .with_apparel(apparel.unwrap_or(config.apparel))
}

fn cmd_quote(input: &QuoteInput, output_format: OutputFormat) -> Result<()> {
    let result = quote(input);
    if let Some(best) = result.best_saving() {
        info!(
            target_tier = %best.target_tier,
            saving = best.saving_amount,
            "cheaper configuration available"
        );
    }
    output_quote(output_format, &result, input.unit_system)
}

fn cmd_config(
    show: bool,
    set_unit: Option<UnitSystem>,
    set_apparel: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(unit_system) = set_unit {
        config.unit_system = unit_system;
        modified = true;
    }

    if let Some(apparel) = set_apparel {
        config.apparel = apparel;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
