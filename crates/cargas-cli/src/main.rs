//! Cargas Frete - ANTT minimum-freight pricing for road cargo
//!
//! A CLI tool that prices freight routes from the ANTT floor formula,
//! interstate ICMS rates, and operational fees.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
