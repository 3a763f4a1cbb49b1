use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{condition::condition_name, error::FetchError};

/// What to look up: a typed city name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City { name: String },
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        Self::City { name: name.into() }
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates { latitude, longitude }
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherQuery::City { name } => write!(f, "city '{name}'"),
            WeatherQuery::Coordinates { latitude, longitude } => {
                write!(f, "coordinates ({latitude}, {longitude})")
            }
        }
    }
}

/// Unit system requested from the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Suffix to print after a temperature in this unit system.
    pub fn symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" | "celsius" => Ok(Units::Metric),
            "imperial" | "fahrenheit" => Ok(Units::Imperial),
            "standard" | "kelvin" => Ok(Units::Standard),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: metric, imperial, standard."
            )),
        }
    }
}

/// Subset of the upstream "current weather" JSON the app needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherData {
    pub name: String,
    pub main: Main,
    pub weather: Vec<Weather>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Main {
    pub temp: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Weather {
    pub id: i64,
}

/// Presentation-ready result of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherModel {
    pub city_name: String,
    pub temperature_string: String,
    pub condition_name: String,
}

impl TryFrom<WeatherData> for WeatherModel {
    type Error = FetchError;

    fn try_from(data: WeatherData) -> Result<Self, Self::Error> {
        let condition_id = data
            .weather
            .first()
            .map(|w| w.id)
            .ok_or(FetchError::EmptyConditionList)?;

        Ok(WeatherModel {
            city_name: data.name,
            temperature_string: format_temperature(data.main.temp),
            condition_name: condition_name(condition_id).to_string(),
        })
    }
}

/// Formats a temperature with one decimal place.
///
/// The exact binary value is rounded to the nearest tenth, so `27.15`
/// (stored as 27.149999...) prints as `27.1`. Negative zero prints as `0.0`.
pub fn format_temperature(temp: f64) -> String {
    let formatted = format!("{temp:.1}");
    if formatted == "-0.0" {
        "0.0".to_string()
    } else {
        formatted
    }
}
