//! Parcel Fee - fulfillment fee tier and savings calculator
//!
//! A CLI tool that prices an item from its dimensions and weight and
//! suggests cheaper packing options.

mod cli;
mod commands;
mod logger;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
