//! Output formatting module

use serde::Serialize;

use cargas_app::app::{BatchQuoteResults, QuoteOutcome};
use cargas_domain::service::{state_code, RateResolution};
use cargas_types::{OutputFormat, Result};

pub fn output_outcome(output_format: OutputFormat, outcome: &QuoteOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nFreight Quote");
        println!("=============");
        println!("Route:           {} -> {}", outcome.origin, outcome.destination);
        println!("Distance:        {:.0} km", outcome.distance_km);
        if !outcome.route_resolved {
            println!("Route UF:        not recognized (ICMS charged at 0%)");
        }

        println!("\n--- Composition ---");
        println!("Floor (ANTT):    R$ {:.2}", outcome.quote.floor);
        println!("Ad valorem:      R$ {:.2}", outcome.quote.ad_valorem_value);
        println!("Collection fee:  R$ {:.2}", outcome.quote.collection_fee);
        println!(
            "ICMS ({:.1}%):    R$ {:.2}",
            outcome.quote.icms_rate, outcome.quote.icms_value
        );
        println!("Profit:          R$ {:.2}", outcome.quote.profit);
        println!("-------------------");
        println!("Total:           R$ {:.2}", outcome.quote.total);
        println!("Per km:          R$ {:.2}/km", outcome.per_km);
    }

    Ok(())
}

#[derive(Serialize)]
struct RateReport<'a> {
    origin: &'a str,
    destination: &'a str,
    origin_uf: Option<String>,
    destination_uf: Option<String>,
    rate: f64,
    resolved: bool,
}

pub fn output_rate(
    output_format: OutputFormat,
    origin: &str,
    destination: &str,
    resolution: RateResolution,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let report = RateReport {
            origin,
            destination,
            origin_uf: state_code(origin),
            destination_uf: state_code(destination),
            rate: resolution.rate,
            resolved: resolution.resolved,
        };
        let content = serde_json::to_string_pretty(&report)?;
        println!("{}", content);
    } else if resolution.resolved {
        println!(
            "ICMS {} -> {}: {}%",
            state_code(origin).unwrap_or_default(),
            state_code(destination).unwrap_or_default(),
            resolution.rate
        );
    } else {
        println!("Route could not be classified; ICMS defaults to 0%");
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &BatchQuoteResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    println!("\nBatch Quote Results");
    println!("===================");
    println!("Routes:   {}", results.total_processed);
    println!("Quoted:   {}", results.quoted);
    println!("Skipped:  {}", results.skipped);
    println!();
    println!(
        "{:<5} {:<24} {:<24} {:>9} {:>7} {:>12}",
        "Row", "Origin", "Destination", "km", "ICMS%", "Total R$"
    );
    println!("{}", "-".repeat(86));

    for entry in &results.entries {
        match &entry.outcome {
            Some(outcome) => {
                println!(
                    "{:<5} {:<24} {:<24} {:>9.0} {:>7.1} {:>12.2}",
                    entry.row,
                    truncate_str(&outcome.origin, 23),
                    truncate_str(&outcome.destination, 23),
                    outcome.distance_km,
                    outcome.quote.icms_rate,
                    outcome.quote.total
                );
            }
            None => {
                println!("{:<5} (skipped: no distance)", entry.row);
            }
        }
    }

    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
