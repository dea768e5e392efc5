use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for toiletmap
#[derive(Debug, Parser)]
#[command(
    name = "toiletmap",
    version,
    about = "CLI for inspecting the Copenhagen public toilet map"
)]
pub struct CliArgs {
    /// Read the dataset from this directory instead of the embedded copy
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Asset name inside the data directory (default: toilet_cph.json)
    #[arg(short = 'a', long = "asset", global = true)]
    pub asset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List every toilet in dataset order
    List,

    /// Run the map screen on a headless map and print what it shows
    Render {
        /// How the location permission prompt plays out
        #[arg(short = 'l', long = "location", value_enum, default_value_t = LocationScenario::AskDeny)]
        location: LocationScenario,
    },

    /// Show the popup of the first marker whose title contains NAME
    Popup {
        /// Substring to search (case-insensitive)
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocationScenario {
    /// Permission was granted before the screen opened
    Granted,
    /// The user accepts the prompt
    AskGrant,
    /// The user declines the prompt
    AskDeny,
    /// Granted, but the platform refuses to enable the layer
    Revoked,
}
