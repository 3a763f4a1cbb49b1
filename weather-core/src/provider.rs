use crate::{
    ClientConfig, WeatherModel, WeatherQuery, error::FetchError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather for a query.
///
/// Implementations perform exactly one upstream lookup per call and return
/// either a model or the reason the lookup failed.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, query: &WeatherQuery) -> Result<WeatherModel, FetchError>;
}

/// Construct the upstream provider from explicit client settings.
pub fn provider_from_config(config: ClientConfig) -> Result<Box<dyn WeatherProvider>, FetchError> {
    Ok(Box::new(OpenWeatherProvider::new(config)?))
}
