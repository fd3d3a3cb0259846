//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cargas_types::{CargoClass, OutputFormat};

#[derive(Parser)]
#[command(name = "cargas-frete")]
#[command(author = "cargas")]
#[command(version)]
#[command(about = "ANTT minimum-freight pricing for road cargo")]
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
    /// Price a single route
    Quote {
        /// Route distance in km
        #[arg(long, short = 'd')]
        distance: f64,

        /// Origin endpoint, e.g. "São Paulo, SP"
        #[arg(long, short = 'o')]
        origin: String,

        /// Destination endpoint, e.g. "Rio de Janeiro, RJ"
        #[arg(long)]
        destination: String,

        /// Cargo classification. Uses config value if not specified.
        #[arg(long)]
        cargo: Option<CargoClass>,

        /// Vehicle axle count (2, 3, 4, 5, 6, 7 or 9). Uses config value if not specified.
        #[arg(long)]
        axles: Option<u8>,

        /// Toll costs along the route (R$)
        #[arg(long, default_value_t = 0.0)]
        toll: f64,

        /// Collection fee (R$)
        #[arg(long, default_value_t = 0.0)]
        collection_fee: f64,

        /// Declared cargo value for ad-valorem insurance (R$)
        #[arg(long, default_value_t = 0.0)]
        invoice_value: f64,

        /// Ad-valorem rate (%). Uses config value if not specified.
        #[arg(long)]
        ad_valorem: Option<f64>,

        /// Profit margin (%). Uses config value if not specified.
        #[arg(long)]
        margin: Option<f64>,
    },

    /// Resolve the ICMS rate for a route without pricing it
    Rate {
        /// Origin endpoint, e.g. "São Paulo, SP"
        origin: String,

        /// Destination endpoint, e.g. "Rio de Janeiro, RJ"
        destination: String,
    },

    /// Price every route in a CSV file
    Batch {
        /// Path to the route CSV file
        file: PathBuf,

        /// Output file for results (JSON)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export batch results to Excel
    Export {
        /// Path to JSON results file
        results: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default cargo classification
        #[arg(long)]
        set_cargo: Option<CargoClass>,

        /// Set default axle count
        #[arg(long)]
        set_axles: Option<u8>,

        /// Set default profit margin (%)
        #[arg(long)]
        set_margin: Option<f64>,

        /// Set default ad-valorem rate (%)
        #[arg(long)]
        set_ad_valorem: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
