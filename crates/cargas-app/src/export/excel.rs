//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use cargas_types::{Error, Result};

use crate::app::BatchQuoteResults;

/// Export batch quote results to an Excel file
pub fn export_to_excel(results: &BatchQuoteResults, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, results)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, results)?;

    // Save workbook
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, results: &BatchQuoteResults) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Cargas Frete Batch Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Run Date:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, &results.started_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Total Routes:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, results.total_processed as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Quoted:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, results.quoted as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Skipped:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(5, 1, results.skipped as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let total_freight: f64 = results
        .entries
        .iter()
        .filter_map(|e| e.outcome.as_ref())
        .map(|o| o.quote.total)
        .sum();
    sheet
        .write_string(6, 0, "Total Freight (R$):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(6, 1, total_freight)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, results: &BatchQuoteResults) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Header format
    let header_format = Format::new().set_bold();

    let headers = [
        "Row",
        "Origin",
        "Destination",
        "Distance (km)",
        "Floor (R$)",
        "Ad Valorem (R$)",
        "Collection Fee (R$)",
        "ICMS %",
        "ICMS (R$)",
        "Profit (R$)",
        "Total (R$)",
        "R$/km",
        "Route Resolved",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let mut row = 1;
    for entry in &results.entries {
        let Some(outcome) = &entry.outcome else {
            continue;
        };
        let quote = &outcome.quote;
        let numbers = [
            (3, outcome.distance_km),
            (4, quote.floor),
            (5, quote.ad_valorem_value),
            (6, quote.collection_fee),
            (7, quote.icms_rate),
            (8, quote.icms_value),
            (9, quote.profit),
            (10, quote.total),
            (11, outcome.per_km),
        ];

        sheet
            .write_number(row, 0, entry.row as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &outcome.origin)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &outcome.destination)
            .map_err(|e| Error::Excel(e.to_string()))?;
        for (col, value) in numbers {
            sheet
                .write_number(row, col, value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_string(row, 12, if outcome.route_resolved { "yes" } else { "no" })
            .map_err(|e| Error::Excel(e.to_string()))?;

        row += 1;
    }

    Ok(())
}
