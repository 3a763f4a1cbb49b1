//! Core library for the `weather` lookup tool.
//!
//! This crate defines:
//! - The query and presentation models, and the upstream wire shape
//! - Condition-code to icon mapping
//! - Configuration & credentials handling
//! - The provider seam and the OpenWeather client behind it
//!
//! It is used by `weather-cli`, but any front end can drive
//! [`WeatherFetchClient`] and render the [`WeatherModel`] it delivers.

pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use client::{WeatherFetchClient, WeatherObserver};
pub use condition::{Condition, condition_name};
pub use config::{ClientConfig, Config};
pub use error::FetchError;
pub use model::{Units, WeatherData, WeatherModel, WeatherQuery, format_temperature};
pub use provider::WeatherProvider;
