//! Command handlers

use std::path::PathBuf;

use cargas_app::app::{quote, quote_batch, BatchQuoteResults};
use cargas_app::config::Config;
use cargas_app::export::export_to_excel;
use cargas_domain::model::QuoteRequest;
use cargas_domain::service::resolve_rate;
use cargas_infra::route_csv::load_requests_from_csv;
use cargas_types::{CargoClass, Error, OutputFormat, Result, VehicleClass};

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_outcome, output_rate};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    match &cli.command {
        Commands::Quote {
            distance,
            origin,
            destination,
            cargo,
            axles,
            toll,
            collection_fee,
            invoice_value,
            ad_valorem,
            margin,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            // Use CLI values if specified, otherwise config defaults
            let axle_count = axles.unwrap_or(config.default_axles);
            let vehicle_class = VehicleClass::from_axles(axle_count)
                .ok_or(Error::UnknownVehicleClass(axle_count))?;
            let request = QuoteRequest {
                distance_km: *distance,
                cargo_class: cargo.unwrap_or(config.default_cargo_class),
                vehicle_class,
                toll_cost: *toll,
                collection_fee: *collection_fee,
                invoice_value: *invoice_value,
                ad_valorem_rate_percent: ad_valorem.unwrap_or(config.default_ad_valorem_percent),
                profit_margin_percent: margin.unwrap_or(config.default_profit_margin_percent),
                origin: origin.clone(),
                destination: destination.clone(),
            };
            cmd_quote(&cli, request, output_format)
        }

        Commands::Rate {
            origin,
            destination,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_rate(origin, destination, output_format)
        }

        Commands::Batch { file, output } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_batch(&cli, file.clone(), output.clone(), output_format)
        }

        Commands::Export { results, output } => cmd_export(results.clone(), output.clone()),

        Commands::Config {
            show,
            set_cargo,
            set_axles,
            set_margin,
            set_ad_valorem,
            set_output,
            reset,
        } => cmd_config(
            *show,
            *set_cargo,
            *set_axles,
            *set_margin,
            *set_ad_valorem,
            *set_output,
            *reset,
        ),
    }
}

fn cmd_quote(cli: &Cli, request: QuoteRequest, output_format: OutputFormat) -> Result<()> {
    if cli.verbose {
        eprintln!(
            "Pricing {} -> {} ({} km, {} on {} axles)",
            request.origin,
            request.destination,
            request.distance_km,
            request.cargo_class,
            request.vehicle_class.axles()
        );
    }

    match quote(request)? {
        Some(outcome) => output_outcome(output_format, &outcome),
        None => {
            eprintln!("No quote produced: distance must be greater than zero");
            Ok(())
        }
    }
}

fn cmd_rate(origin: &str, destination: &str, output_format: OutputFormat) -> Result<()> {
    let resolution = resolve_rate(origin, destination);
    output_rate(output_format, origin, destination, resolution)
}

fn cmd_batch(
    cli: &Cli,
    file: PathBuf,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if !file.exists() {
        return Err(Error::FileNotFound(format!(
            "Route file not found: {}",
            file.display()
        )));
    }

    let requests =
        load_requests_from_csv(&file).map_err(|e| Error::CsvLoader(e.to_string()))?;
    if cli.verbose {
        eprintln!("Loaded {} routes from {}", requests.len(), file.display());
    }

    let results = quote_batch(requests)?;

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output_path, content)?;
        println!(
            "Quoted {} of {} routes. Results written to {}",
            results.quoted,
            results.total_processed,
            output_path.display()
        );
        return Ok(());
    }

    output_batch(output_format, &results)
}

fn cmd_export(results_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !results_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Results file not found: {}",
            results_path.display()
        )));
    }

    let content = std::fs::read_to_string(&results_path)?;
    let results: BatchQuoteResults = serde_json::from_str(&content)?;

    let output_path = output.unwrap_or_else(|| results_path.with_extension("xlsx"));
    export_to_excel(&results, &output_path)?;
    println!("Exported {} entries to {}", results.entries.len(), output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_cargo: Option<CargoClass>,
    set_axles: Option<u8>,
    set_margin: Option<f64>,
    set_ad_valorem: Option<f64>,
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

    if let Some(cargo) = set_cargo {
        config.default_cargo_class = cargo;
        modified = true;
    }

    if let Some(axles) = set_axles {
        // Reject counts the coefficient table has no column for
        VehicleClass::from_axles(axles).ok_or(Error::UnknownVehicleClass(axles))?;
        config.default_axles = axles;
        modified = true;
    }

    if let Some(margin) = set_margin {
        config.default_profit_margin_percent = margin;
        modified = true;
    }

    if let Some(ad_valorem) = set_ad_valorem {
        config.default_ad_valorem_percent = ad_valorem;
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
