//! CLI definition using clap

use clap::{Parser, Subcommand};
use grooming_types::{OutputFormat, PricingMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grooming-pricer")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Weight-banded price quotes for pet grooming services")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (TOML or JSON). Uses config value, then the built-in catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (table, json, csv). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Reject unknown services and weights above every band
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a selection of services for one pet
    Quote {
        /// Service ids, comma separated (e.g., full_grooming,nail_care)
        #[arg(long, short = 's', value_delimiter = ',', required = true)]
        services: Vec<String>,

        /// Pet weight in kg. Uses config default if not specified.
        #[arg(long, short = 'w')]
        weight: Option<f64>,
    },

    /// Show the price list at a pet weight
    Services {
        /// Pet weight in kg. Uses config default if not specified.
        #[arg(long, short = 'w')]
        weight: Option<f64>,
    },

    /// List the standard weight options
    Weights,

    /// List appointment time slots
    Slots {
        /// Translations JSON providing booking.timeSlots (overrides config)
        #[arg(long)]
        translations: Option<PathBuf>,
    },

    /// Load and validate a catalog file
    Validate {
        /// Path to catalog file
        path: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set catalog file path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set translations file path
        #[arg(long)]
        set_translations: Option<PathBuf>,

        /// Set default pet weight in kg
        #[arg(long)]
        set_weight: Option<f64>,

        /// Set pricing mode
        #[arg(long)]
        set_mode: Option<PricingMode>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
