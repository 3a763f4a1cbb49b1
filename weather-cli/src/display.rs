use std::sync::{Mutex, PoisonError};

use weather_core::{FetchError, Units, WeatherModel, WeatherObserver};

/// Format a model for the terminal.
pub fn render(model: &WeatherModel, units: Units) -> String {
    format!(
        "{}\n  {}{}  {}",
        model.city_name,
        model.temperature_string,
        units.symbol(),
        model.condition_name
    )
}

/// What is currently on screen.
///
/// A success replaces the shown weather; a failure is logged and leaves the
/// previous weather in place.
#[derive(Debug)]
pub struct WeatherDisplay {
    units: Units,
    current: Mutex<Option<WeatherModel>>,
}

impl WeatherDisplay {
    pub fn new(units: Units) -> Self {
        Self { units, current: Mutex::new(None) }
    }

    pub fn current(&self) -> Option<WeatherModel> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl WeatherObserver for WeatherDisplay {
    fn on_success(&self, model: WeatherModel) {
        println!("{}", render(&model, self.units));
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(model);
    }

    fn on_failure(&self, error: FetchError) {
        tracing::warn!(%error, "keeping previous weather");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(city: &str) -> WeatherModel {
        WeatherModel {
            city_name: city.to_string(),
            temperature_string: "27.1".to_string(),
            condition_name: "sun.max".to_string(),
        }
    }

    #[test]
    fn render_includes_unit_symbol() {
        let out = render(&model("San Francisco"), Units::Metric);
        assert_eq!(out, "San Francisco\n  27.1°C  sun.max");

        let out = render(&model("San Francisco"), Units::Standard);
        assert!(out.contains("27.1K"));
    }

    #[test]
    fn success_replaces_current() {
        let display = WeatherDisplay::new(Units::Metric);
        assert!(display.current().is_none());

        display.on_success(model("Oslo"));
        display.on_success(model("Bergen"));

        assert_eq!(display.current().unwrap().city_name, "Bergen");
    }

    #[test]
    fn failure_keeps_stale_weather() {
        let display = WeatherDisplay::new(Units::Metric);
        display.on_success(model("Oslo"));

        display.on_failure(FetchError::EmptyConditionList);

        assert_eq!(display.current().unwrap().city_name, "Oslo");
    }

    #[test]
    fn poisoned_state_still_updates() {
        let display = WeatherDisplay::new(Units::Metric);
        display.on_success(model("Oslo"));

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = display.current.lock().unwrap();
            panic!("panic while holding the display lock");
        }));
        assert!(poisoned.is_err());
        assert!(display.current.is_poisoned());

        assert_eq!(display.current().unwrap().city_name, "Oslo");
        display.on_success(model("Bergen"));
        assert_eq!(display.current().unwrap().city_name, "Bergen");
    }
}
