//! Caller-facing fetch client.
//!
//! Wraps a [`WeatherProvider`] and offers the two query operations plus two
//! non-blocking delivery styles: a oneshot receiver, or a [`WeatherObserver`]
//! that is notified exactly once per request. Overlapping requests are not
//! de-duplicated or cancelled; whichever completes last is delivered last.

use std::sync::Arc;

use tokio::{sync::oneshot, task::JoinHandle};

use crate::{
    config::ClientConfig,
    error::FetchError,
    model::{WeatherModel, WeatherQuery},
    provider::{WeatherProvider, provider_from_config},
};

/// Receives the outcome of a spawned fetch.
pub trait WeatherObserver: Send + Sync {
    fn on_success(&self, model: WeatherModel);
    fn on_failure(&self, error: FetchError);
}

#[derive(Debug, Clone)]
pub struct WeatherFetchClient {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherFetchClient {
    /// Client backed by OpenWeather with the given settings.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let provider = provider_from_config(config)?;
        Ok(Self::with_provider(Arc::from(provider)))
    }

    pub fn with_provider(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherModel, FetchError> {
        let result = self.provider.get_weather(query).await;
        match &result {
            Ok(model) => tracing::debug!(
                %query,
                city = %model.city_name,
                condition = %model.condition_name,
                "weather fetched"
            ),
            Err(error) => tracing::debug!(%query, %error, "weather fetch failed"),
        }
        result
    }

    /// Look up weather by city name. The caller is expected to pass a
    /// non-empty, trimmed name.
    pub async fn fetch_weather_by_city(&self, city_name: &str) -> Result<WeatherModel, FetchError> {
        self.fetch(&WeatherQuery::city(city_name)).await
    }

    pub async fn fetch_weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherModel, FetchError> {
        self.fetch(&WeatherQuery::coordinates(latitude, longitude)).await
    }

    /// Start a fetch on the runtime and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_fetch(
        &self,
        query: WeatherQuery,
    ) -> oneshot::Receiver<Result<WeatherModel, FetchError>> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();

        tokio::spawn(async move {
            let result = client.fetch(&query).await;
            // Receiver dropped means nobody is waiting any more.
            let _ = tx.send(result);
        });

        rx
    }

    /// Start a fetch on the runtime and report its outcome to `observer`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_notify(
        &self,
        query: WeatherQuery,
        observer: Arc<dyn WeatherObserver>,
    ) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.notify(&query, observer.as_ref()).await })
    }

    /// Fetch and report the outcome to `observer`, exactly once.
    pub async fn notify(&self, query: &WeatherQuery, observer: &dyn WeatherObserver) {
        match self.fetch(query).await {
            Ok(model) => observer.on_success(model),
            Err(error) => observer.on_failure(error),
        }
    }
}
