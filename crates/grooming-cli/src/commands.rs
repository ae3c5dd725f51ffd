//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_catalog_summary, output_price_list, output_quote, output_time_slots,
    output_weight_options,
};
use grooming_app::app::QuoteService;
use grooming_app::config::Config;
use grooming_app::constants::WEIGHT_OPTIONS;
use grooming_app::repository::{open_catalog_repo, open_time_slots};
use grooming_domain::model::Selection;
use grooming_domain::repository::CatalogRepository;
use grooming_types::{OutputFormat, PricingMode, Result};
use std::path::{Path, PathBuf};

pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Quote { services, weight } => {
            let (config, output_format) = effective_config(&cli)?;
            let weight_kg = weight.unwrap_or(config.default_weight_kg);
            cmd_quote(&config, services, weight_kg, output_format)
        }

        Commands::Services { weight } => {
            let (config, output_format) = effective_config(&cli)?;
            let weight_kg = weight.unwrap_or(config.default_weight_kg);
            cmd_services(&config, weight_kg, output_format)
        }

        Commands::Weights => {
            let (config, output_format) = effective_config(&cli)?;
            output_weight_options(output_format, &WEIGHT_OPTIONS, config.default_weight_kg)
        }

        Commands::Slots { .. } => {
            let (config, output_format) = effective_config(&cli)?;
            cmd_slots(&config, output_format)
        }

        Commands::Validate { path } => {
            let (config, output_format) = effective_config(&cli)?;
            cmd_validate(&config, path.clone(), output_format)
        }

        // Works on the file directly so that a corrupt config can still be reset
        Commands::Config {
            show,
            set_catalog,
            set_translations,
            set_weight,
            set_mode,
            set_output,
            set_currency,
            reset,
        } => cmd_config(
            &Config::config_path()?,
            *show,
            set_catalog.clone(),
            set_translations.clone(),
            *set_weight,
            *set_mode,
            *set_output,
            set_currency.clone(),
            *reset,
        ),
    }
}

fn effective_config(cli: &Cli) -> Result<(Config, OutputFormat)> {
    let mut config = Config::load()?;
    let output_format = apply_overrides(&mut config, cli);
    tracing::debug!(?config, %output_format, "effective configuration");
    Ok((config, output_format))
}

/// Applies the global flags (and `slots --translations`) on top of the loaded
/// config for this run and returns the output format to use.
fn apply_overrides(config: &mut Config, cli: &Cli) -> OutputFormat {
    if let Some(ref catalog) = cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if cli.strict {
        config.pricing_mode = PricingMode::Strict;
    }
    if let Commands::Slots {
        translations: Some(path),
    } = &cli.command
    {
        config.translations_path = Some(path.clone());
    }
    cli.format.unwrap_or(config.output_format)
}

fn cmd_quote(
    config: &Config,
    services: &[String],
    weight_kg: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let service = QuoteService::from_config(config)?;
    let selection = Selection::with_services(weight_kg, services.iter().cloned());
    let quote = service.quote(&selection)?;
    output_quote(output_format, &quote, &config.currency_symbol)
}

fn cmd_services(config: &Config, weight_kg: f64, output_format: OutputFormat) -> Result<()> {
    let service = QuoteService::from_config(config)?;
    let entries = service.price_list(weight_kg)?;
    output_price_list(output_format, &entries, weight_kg, &config.currency_symbol)
}

fn cmd_slots(config: &Config, output_format: OutputFormat) -> Result<()> {
    let slots = open_time_slots(config)?;
    output_time_slots(output_format, &slots)
}

fn cmd_validate(config: &Config, path: PathBuf, output_format: OutputFormat) -> Result<()> {
    let repo = open_catalog_repo(path)?;
    tracing::info!(path = %repo.path().display(), "catalog validated");
    if output_format == OutputFormat::Table {
        println!("Validated: {}", repo.path().display());
    }
    let catalog = repo.catalog()?;
    output_catalog_summary(output_format, &catalog, &config.currency_symbol)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    config_path: &Path,
    show: bool,
    set_catalog: Option<PathBuf>,
    set_translations: Option<PathBuf>,
    set_weight: Option<f64>,
    set_mode: Option<PricingMode>,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(path) = set_translations {
        config.translations_path = Some(path);
        modified = true;
    }

    if let Some(weight_kg) = set_weight {
        config.default_weight_kg = grooming_domain::service::validate_weight(weight_kg)?;
        modified = true;
    }

    if let Some(mode) = set_mode {
        config.pricing_mode = mode;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency_symbol = currency;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_catalog_flag_replaces_config_path() {
        let mut config = Config {
            catalog_path: Some(PathBuf::from("/etc/grooming/catalog.toml")),
            ..Config::default()
        };
        let cli = parse(&["grooming-pricer", "services", "--catalog", "fixtures/spa.json"]);

        apply_overrides(&mut config, &cli);

        assert_eq!(config.catalog_path, Some(PathBuf::from("fixtures/spa.json")));
    }

    #[test]
    fn test_strict_flag_forces_strict_mode() {
        let mut config = Config::default();
        let cli = parse(&["grooming-pricer", "quote", "-s", "nail_care", "--strict"]);

        apply_overrides(&mut config, &cli);

        assert_eq!(config.pricing_mode, PricingMode::Strict);
    }

    #[test]
    fn test_without_flags_config_is_untouched() {
        let original = Config {
            catalog_path: Some(PathBuf::from("catalog.toml")),
            pricing_mode: PricingMode::Strict,
            output_format: OutputFormat::Csv,
            ..Config::default()
        };
        let mut config = original.clone();
        let cli = parse(&["grooming-pricer", "weights"]);

        let output_format = apply_overrides(&mut config, &cli);

        assert_eq!(output_format, OutputFormat::Csv);
        assert_eq!(config, original);
    }

    #[test]
    fn test_format_flag_wins_over_config() {
        let mut config = Config {
            output_format: OutputFormat::Csv,
            ..Config::default()
        };
        let cli = parse(&["grooming-pricer", "-f", "json", "weights"]);

        assert_eq!(apply_overrides(&mut config, &cli), OutputFormat::Json);
        assert_eq!(config.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_slots_translations_override() {
        let mut config = Config {
            translations_path: Some(PathBuf::from("messages/en.json")),
            ..Config::default()
        };
        let cli = parse(&["grooming-pricer", "slots", "--translations", "messages/de.json"]);

        apply_overrides(&mut config, &cli);

        assert_eq!(
            config.translations_path,
            Some(PathBuf::from("messages/de.json"))
        );
    }

    #[test]
    fn test_reset_overwrites_corrupt_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        cmd_config(&path, false, None, None, None, None, None, None, true).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_on_corrupt_config_reports_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = cmd_config(&path, false, None, None, Some(25.0), None, None, None, false);

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_set_values_are_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grooming-pricer").join("config.json");

        cmd_config(
            &path,
            false,
            None,
            None,
            Some(25.0),
            Some(PricingMode::Strict),
            None,
            Some("$".to_string()),
            false,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_weight_kg, 25.0);
        assert_eq!(config.pricing_mode, PricingMode::Strict);
        assert_eq!(config.currency_symbol, "$");
    }
}
