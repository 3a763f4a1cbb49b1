use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text, validator::Validation};
use weather_core::{Config, Units, WeatherFetchClient, WeatherQuery};

use crate::display::{WeatherDisplay, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather lookup")]
pub struct Cli {
    /// OpenWeather API key; overrides the configured key for this run.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Unit system: metric, imperial or standard.
    #[arg(long, global = true, value_parser = parse_units)]
    pub units: Option<Units>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and preferred units.
    Configure,

    /// Show current weather for a city or a coordinate pair.
    Show {
        /// City name, e.g. "San Francisco".
        #[arg(required_unless_present = "lat", conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in decimal degrees.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Search cities interactively until Esc.
    Search {
        /// Latitude of the current location, fetched before the first search.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the current location.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, lat, lon } => {
                let query = query_from_args(city.as_deref(), lat, lon)?;
                let (client, units) = build_client(self.api_key, self.units)?;

                let model = client.fetch(&query).await?;
                println!("{}", render(&model, units));
                Ok(())
            }
            Command::Search { lat, lon } => {
                let (client, units) = build_client(self.api_key, self.units)?;
                search(&client, units, lat.zip(lon)).await
            }
        }
    }
}

fn parse_units(value: &str) -> Result<Units, String> {
    Units::try_from(value).map_err(|e| e.to_string())
}

/// Empty input is rejected here so the client only ever sees a real name.
fn validate_city(city: &str) -> Result<&str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        bail!("City name must not be empty.");
    }
    Ok(trimmed)
}

fn query_from_args(city: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> Result<WeatherQuery> {
    match (city, lat, lon) {
        (Some(city), None, None) => Ok(WeatherQuery::city(validate_city(city)?)),
        (None, Some(lat), Some(lon)) => Ok(WeatherQuery::coordinates(lat, lon)),
        _ => bail!("Pass either a city name or both --lat and --lon."),
    }
}

fn build_client(api_key: Option<String>, units: Option<Units>) -> Result<(WeatherFetchClient, Units)> {
    let mut cfg = Config::load()?;
    if let Some(api_key) = api_key {
        cfg.set_api_key(api_key);
    }
    if let Some(units) = units {
        cfg.units = units;
    }

    let client_config = cfg.client_config()?;
    let units = client_config.units;
    let client = WeatherFetchClient::new(client_config).context("Failed to set up weather client")?;

    Ok((client, units))
}

fn configure() -> Result<()> {
    let mut cfg = Config::load()?;

    let message = if cfg.is_configured() {
        "OpenWeather API key (leave empty to keep the current one):"
    } else {
        "OpenWeather API key:"
    };
    let api_key = Password::new(message)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        cfg.set_api_key(api_key.to_string());
    } else if !cfg.is_configured() {
        bail!("An API key is required.");
    }

    let options = Units::all().to_vec();
    let cursor = options.iter().position(|u| *u == cfg.units).unwrap_or(0);
    cfg.units = Select::new("Units:", options)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read units")?;

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

async fn search(client: &WeatherFetchClient, units: Units, location: Option<(f64, f64)>) -> Result<()> {
    let display = WeatherDisplay::new(units);

    if let Some((lat, lon)) = location {
        client.notify(&WeatherQuery::coordinates(lat, lon), &display).await;
    }

    loop {
        let input = Text::new("Search some city ...")
            .with_validator(|input: &str| {
                if input.trim().is_empty() {
                    Ok(Validation::Invalid("Type something".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt_skippable()
            .context("Failed to read city name")?;

        let Some(city) = input else { break };
        let query = WeatherQuery::city(validate_city(&city)?);
        client.notify(&query, &display).await;
    }

    if let Some(last) = display.current() {
        tracing::debug!(city = %last.city_name, "search finished");
    }

    Ok(())
}
