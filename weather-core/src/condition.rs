//! Mapping from upstream condition codes to icon names.
//!
//! Codes follow the OpenWeather taxonomy: 2xx thunderstorm, 3xx drizzle,
//! 5xx rain, 6xx snow, 7xx atmosphere, 800 clear, 80x clouds.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

impl Condition {
    pub fn from_code(id: i64) -> Self {
        match id {
            200..=232 => Condition::Thunderstorm,
            300..=321 => Condition::Drizzle,
            500..=531 => Condition::Rain,
            600..=622 => Condition::Snow,
            701..=781 => Condition::Atmosphere,
            800 => Condition::Clear,
            801..=804 => Condition::Clouds,
            _ => Condition::Unknown,
        }
    }

    /// Symbol name the display layer loads for this condition.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "cloud.bolt",
            Condition::Drizzle => "cloud.drizzle",
            Condition::Rain => "cloud.rain",
            Condition::Snow => "cloud.snow",
            Condition::Atmosphere => "cloud.fog",
            Condition::Clear => "sun.max",
            Condition::Clouds | Condition::Unknown => "cloud",
        }
    }
}

pub fn condition_name(id: i64) -> &'static str {
    Condition::from_code(id).icon_name()
}
