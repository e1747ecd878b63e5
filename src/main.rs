use anyhow::{Context, Result};
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weather_form::cli::{Cli, Command, LookupArgs};
use weather_form::constants::API_KEY_ENV;
use weather_form::formatters::render_plain;
use weather_form::{resolve, OpenWeatherClient, Weather, WeatherConfig};

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "weather_form=debug,info"
    } else {
        "weather_form=info"
    };

    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(api_key: Option<String>) -> Result<WeatherConfig> {
    let config = match api_key {
        Some(key) => WeatherConfig::from_lookup(|name| match name {
            API_KEY_ENV => Some(key.clone()),
            _ => std::env::var(name).ok(),
        }),
        None => WeatherConfig::from_env(),
    }
    .context("Failed to load weather configuration")?;
    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

async fn serve(config: WeatherConfig) -> Result<()> {
    tracing::info!("Starting MCP weather form server");

    let weather = Weather::new(OpenWeatherClient::new(config)?);
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn lookup(config: WeatherConfig, args: LookupArgs) -> Result<()> {
    let client = OpenWeatherClient::new(config)?;
    let query = resolve(&args.location())?;
    let report = client.fetch_and_format(&query, args.units).await?;
    println!("{}", render_plain(&report));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(cli.api_key)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Lookup(args) => lookup(config, args).await,
    }
}
