use clap::{Args, Parser, Subcommand};

use crate::constants::API_KEY_ENV;
use crate::models::{LocationInput, UnitPreference};

#[derive(Debug, Parser)]
#[command(name = "weather-form")]
#[command(about = "Current weather conditions by postal code or place name", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// OpenWeatherMap API key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the weather form as MCP tools over stdio (default)
    Serve,
    /// Run a single lookup and print the report
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Only shown in the report
    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long, alias = "pin")]
    pub postal_code: Option<String>,

    #[arg(long, value_enum, default_value_t = UnitPreference::Metric)]
    pub units: UnitPreference,
}

impl LookupArgs {
    pub fn location(&self) -> LocationInput {
        LocationInput::new(
            self.country.as_deref(),
            self.state.as_deref(),
            self.city.as_deref(),
            self.locality.as_deref(),
            self.postal_code.as_deref(),
        )
    }
}
