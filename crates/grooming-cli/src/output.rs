//! Output formatting module

use grooming_domain::model::weight_option::find_option;
use grooming_domain::model::{Catalog, Quote, WeightOption};
use grooming_domain::service::{format_price, PriceListEntry};
use grooming_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct QuoteRow<'a> {
    service_id: &'a str,
    title: &'a str,
    band: &'a str,
    price: u64,
}

#[derive(Serialize)]
struct PriceListRow<'a> {
    service_id: &'a str,
    title: &'a str,
    band: &'a str,
    price: u32,
    popular: bool,
}

#[derive(Serialize)]
struct SlotRow<'a> {
    time: &'a str,
}

fn write_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &Quote, currency: &str) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(quote)?);
        }
        OutputFormat::Csv => {
            let lines = quote.lines.iter().map(|line| QuoteRow {
                service_id: &line.service_id,
                title: &line.title,
                band: &line.band_label,
                price: u64::from(line.price),
            });
            let total = QuoteRow {
                service_id: "total",
                title: "",
                band: "",
                price: quote.total,
            };
            write_csv(lines.chain(std::iter::once(total)))?;
        }
        OutputFormat::Table => {
            println!("\nQuote ({} kg)", quote.weight_kg);
            println!("===============");
            if quote.lines.is_empty() {
                println!("No services selected");
            }
            for line in &quote.lines {
                println!(
                    "{:<28} {:<14} {:>8}",
                    line.title,
                    line.band_label,
                    format_price(u64::from(line.price), currency)
                );
            }
            println!("{}", "-".repeat(52));
            println!("{:<43} {:>8}", "Total", format_price(quote.total, currency));

            if !quote.skipped.is_empty() {
                println!("\nSkipped unknown services: {}", quote.skipped.join(", "));
            }
        }
    }

    Ok(())
}

pub fn output_price_list(
    output_format: OutputFormat,
    entries: &[PriceListEntry],
    weight_kg: f64,
    currency: &str,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        OutputFormat::Csv => {
            write_csv(entries.iter().map(|entry| PriceListRow {
                service_id: &entry.service_id,
                title: &entry.title,
                band: &entry.band.label,
                price: entry.band.price,
                popular: entry.popular,
            }))?;
        }
        OutputFormat::Table => {
            println!("\nServices ({} kg)", weight_kg);
            println!("==================");
            for entry in entries {
                let marker = if entry.popular { " *" } else { "" };
                println!(
                    "{:<30} {:<14} {:>8}",
                    format!("{}{}", entry.title, marker),
                    entry.band.label,
                    format_price(u64::from(entry.band.price), currency)
                );
                if let Some(ref duration) = entry.duration {
                    println!("    {}", duration);
                }
                let bands: Vec<String> = entry
                    .bands
                    .iter()
                    .map(|b| format!("{} {}", b.label, format_price(u64::from(b.price), currency)))
                    .collect();
                println!("    {}", bands.join(" | "));
            }
            if entries.iter().any(|e| e.popular) {
                println!("\n* popular");
            }
        }
    }

    Ok(())
}

pub fn output_weight_options(
    output_format: OutputFormat,
    options: &[WeightOption],
    default_weight_kg: f64,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(options)?),
        OutputFormat::Csv => write_csv(options)?,
        OutputFormat::Table => {
            let default = find_option(options, default_weight_kg);
            println!("\nWeight Options");
            println!("==============");
            for option in options {
                let marker = if default == Some(option) { " (default)" } else { "" };
                println!("{:>6} kg  {}{}", option.value_kg, option.label, marker);
            }
        }
    }

    Ok(())
}

pub fn output_time_slots(output_format: OutputFormat, slots: &[String]) -> Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(slots)?),
        OutputFormat::Csv => write_csv(slots.iter().map(|time| SlotRow { time }))?,
        OutputFormat::Table => {
            println!("\nTime Slots");
            println!("==========");
            for slot in slots {
                println!("{}", slot);
            }
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct CatalogSummaryRow<'a> {
    service_id: &'a str,
    title: &'a str,
    bands: usize,
    max_kg: f64,
    min_price: u32,
    max_price: u32,
}

fn catalog_summary_rows(catalog: &Catalog) -> Vec<CatalogSummaryRow<'_>> {
    catalog
        .iter()
        .map(|service| {
            let (min_price, max_price) = service.price_range();
            CatalogSummaryRow {
                service_id: &service.id,
                title: &service.title,
                bands: service.bands().len(),
                max_kg: service.max_upto_kg(),
                min_price,
                max_price,
            }
        })
        .collect()
}

pub fn output_catalog_summary(
    output_format: OutputFormat,
    catalog: &Catalog,
    currency: &str,
) -> Result<()> {
    let rows = catalog_summary_rows(catalog);
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => write_csv(rows)?,
        OutputFormat::Table => {
            println!("\nCatalog OK: {} services", catalog.len());
            println!("{}", "-".repeat(60));
            println!("{:<20} {:>6} {:>10} {:>18}", "Id", "Bands", "Max kg", "Prices");
            println!("{}", "-".repeat(60));
            for row in &rows {
                let prices = if row.min_price == row.max_price {
                    format_price(u64::from(row.min_price), currency)
                } else {
                    format!(
                        "{}-{}",
                        format_price(u64::from(row.min_price), currency),
                        format_price(u64::from(row.max_price), currency)
                    )
                };
                println!(
                    "{:<20} {:>6} {:>10} {:>18}",
                    row.service_id, row.bands, row.max_kg, prices
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grooming_app::constants::builtin_catalog;

    #[test]
    fn test_catalog_summary_rows_follow_catalog_order() {
        let catalog = builtin_catalog().unwrap();
        let rows = catalog_summary_rows(&catalog);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].service_id, "full_grooming");
        assert_eq!(rows[0].bands, 3);
        assert_eq!(rows[0].max_kg, 40.0);
        assert_eq!((rows[0].min_price, rows[0].max_price), (45, 70));
    }

    #[test]
    fn test_catalog_summary_json_shape() {
        let catalog = builtin_catalog().unwrap();
        let rows = catalog_summary_rows(&catalog);
        let json = serde_json::to_value(&rows).unwrap();

        let nail_care = json
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["service_id"] == "nail_care")
            .unwrap();
        assert_eq!(nail_care["bands"], 1);
        assert_eq!(nail_care["min_price"], nail_care["max_price"]);
    }
}
