use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::ClientConfig,
    error::FetchError,
    model::{Units, WeatherData, WeatherModel, WeatherQuery},
};

use super::WeatherProvider;

/// OpenWeather "current weather" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: Url,
    units: Units,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            FetchError::RequestConstruction(format!("invalid base URL '{}': {e}", config.base_url))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(FetchError::RequestConstruction(format!(
                "unsupported scheme '{}' in base URL '{}'",
                base_url.scheme(),
                config.base_url
            )));
        }

        Ok(Self {
            api_key: config.api_key,
            base_url,
            units: config.units,
            http: Client::new(),
        })
    }

    pub fn units(&self) -> Units {
        self.units
    }

    fn build_url(&self, query: &WeatherQuery) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match query {
                WeatherQuery::City { name } => {
                    pairs.append_pair("q", name);
                }
                WeatherQuery::Coordinates { latitude, longitude } => {
                    if !latitude.is_finite() || !longitude.is_finite() {
                        return Err(FetchError::RequestConstruction(format!(
                            "coordinates must be finite, got ({latitude}, {longitude})"
                        )));
                    }
                    pairs.append_pair("lat", &latitude.to_string());
                    pairs.append_pair("lon", &longitude.to_string());
                }
            }
            pairs.append_pair("appid", &self.api_key);
            pairs.append_pair("units", self.units.as_str());
        }
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, query: &WeatherQuery) -> Result<WeatherModel, FetchError> {
        let url = self.build_url(query)?;

        tracing::debug!(%query, units = %self.units, "requesting current weather from OpenWeather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::debug!(%query, %status, "OpenWeather rejected request");
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WeatherData = serde_json::from_str(&body)?;
        WeatherModel::try_from(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: &str) -> OpenWeatherProvider {
        OpenWeatherProvider::new(ClientConfig::new("test-key").with_base_url(base_url))
            .expect("provider construction should not fail")
    }

    #[test]
    fn city_query_string() {
        let p = provider("https://api.example.com/data/2.5/weather");
        let url = p.build_url(&WeatherQuery::city("London")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/data/2.5/weather?q=London&appid=test-key&units=metric"
        );
    }

    #[test]
    fn coordinate_query_string() {
        let p = provider("https://api.example.com/weather");
        let url = p
            .build_url(&WeatherQuery::coordinates(37.7749, -122.4194))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/weather?lat=37.7749&lon=-122.4194&appid=test-key&units=metric"
        );
    }

    #[test]
    fn city_name_is_encoded() {
        let p = provider("https://api.example.com/weather");
        let url = p.build_url(&WeatherQuery::city("San Francisco & Co")).unwrap();
        assert!(
            url.as_str().contains("q=San+Francisco+%26+Co"),
            "city should be percent-encoded: {url}"
        );
    }

    #[test]
    fn units_are_configurable() {
        let p = OpenWeatherProvider::new(
            ClientConfig::new("k")
                .with_base_url("https://api.example.com/weather")
                .with_units(Units::Imperial),
        )
        .unwrap();
        let url = p.build_url(&WeatherQuery::city("Oslo")).unwrap();
        assert!(url.as_str().ends_with("units=imperial"));
        assert_eq!(p.units(), Units::Imperial);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let p = provider("https://api.example.com/weather");
        let err = p
            .build_url(&WeatherQuery::coordinates(f64::NAN, 10.0))
            .unwrap_err();
        assert!(matches!(err, FetchError::RequestConstruction(_)));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = OpenWeatherProvider::new(ClientConfig::new("k").with_base_url("ftp://example.com"))
            .unwrap_err();
        assert!(matches!(err, FetchError::RequestConstruction(_)));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "é".repeat(250);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
