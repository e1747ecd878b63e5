//! Current-conditions weather form backed by OpenWeatherMap.
//!
//! A location is entered as either a postal code or a city/state/country
//! triple, validated into a provider query, fetched once and rendered as a
//! short text report. The form is exposed as MCP tools or as a one-shot CLI.

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod countries;
pub mod error;
pub mod formatters;
pub mod models;
pub mod resolver;
pub mod service;
pub mod state;

pub use client::OpenWeatherClient;
pub use config::WeatherConfig;
pub use error::{ConfigError, FetchError, LookupError, ValidationError};
pub use models::{LocationInput, UnitPreference, WeatherQuery, WeatherReport};
pub use resolver::resolve;
pub use service::Weather;
pub use state::FormState;
