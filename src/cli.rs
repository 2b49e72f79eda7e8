use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Static flux chamber design: minimum detectable flux and chamber geometry
#[derive(Parser, Debug)]
#[command(name = "flux_chamber_toolbox", version)]
#[command(about = "Minimum detectable flux and chamber geometry for static flux chambers", long_about = None)]
pub struct Cli {
    /// Configuration file (created with the example scenario if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Display language (auto, ko, en)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    pub lang: String,

    /// Reject physically invalid scenarios instead of evaluating them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Minimal height for the configured scenario and diameter
    Scenario,

    /// Minimal height for a given chamber diameter
    Height {
        /// Chamber diameter in m
        #[arg(short, long)]
        diameter: f64,
    },

    /// Minimum detectable flux of a concrete chamber
    Mdf {
        /// Chamber diameter in m
        #[arg(short, long)]
        diameter: f64,

        /// Chamber height in m
        #[arg(long)]
        height: f64,

        /// Pressure in Pa (default: scenario maximum)
        #[arg(short, long)]
        pressure: Option<f64>,

        /// Temperature in K (default: scenario minimum)
        #[arg(short, long)]
        temperature: Option<f64>,
    },

    /// Evaluate every stock chamber diameter
    Catalog,

    /// Convert a value between units (temperature, pressure, length, area, volume, flux, mixing-ratio)
    Convert {
        kind: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },

    /// Interactive menu
    Menu,
}
