use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current temperature above this raises the heat banner, in Celsius.
pub const EXTREME_HEAT_THRESHOLD_C: f64 = 40.0;

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// The other unit; the toggle button flips between the two.
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

/// Render a Celsius reading in the preferred unit.
///
/// Fahrenheit readings carry one decimal; Celsius is shown as reported.
pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => format!("{celsius} °C"),
        TemperatureUnit::Fahrenheit => format!("{:.1} °F", celsius * 9.0 / 5.0 + 32.0),
    }
}

/// Condition buckets mapped from the forecast collaborator's integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Clear,
    Cloudy,
    Rainy,
    Stormy,
}

impl Sky {
    /// Bucket an integer weather code. Boundaries are exact: 69 is rainy,
    /// 70 is stormy.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            c if c < 3 => Self::Cloudy,
            c if c < 70 => Self::Rainy,
            _ => Self::Stormy,
        }
    }

    /// Condition line shown next to the temperature.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear Sky ☀️",
            Self::Cloudy => "Cloudy ☁️",
            Self::Rainy => "Rainy 🌧",
            Self::Stormy => "Stormy ⛈",
        }
    }
}

/// Background styling variant. Coarser than [`Sky`]: clear and cloudy share
/// the sunny backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Sunny,
    Rainy,
    Stormy,
}

impl Backdrop {
    pub fn from_code(code: i32) -> Self {
        match code {
            c if c < 3 => Self::Sunny,
            c if c < 70 => Self::Rainy,
            _ => Self::Stormy,
        }
    }

    /// Style class applied to the page body.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Stormy => "stormy",
        }
    }
}

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions subset consumed from the forecast collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub code: i32,
}

impl CurrentConditions {
    pub fn sky(&self) -> Sky {
        Sky::from_code(self.code)
    }

    pub fn backdrop(&self) -> Backdrop {
        Backdrop::from_code(self.code)
    }

    /// Banner text when the current temperature is extreme, strictly above
    /// [`EXTREME_HEAT_THRESHOLD_C`].
    pub fn heat_alert(&self) -> Option<&'static str> {
        (self.temperature_c > EXTREME_HEAT_THRESHOLD_C).then_some("⚠ Extreme Heat Alert!")
    }
}

/// One day of the outlook strip.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutlook {
    pub high_c: f64,
    pub humidity_max_pct: f64,
    pub wind_max_kmh: f64,
}

/// Complete result of one weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Canonical place name when the lookup went through geocoding.
    pub place: Option<String>,
    pub current: CurrentConditions,
    pub outlook: Vec<DayOutlook>,
    pub fetched_at: DateTime<Utc>,
}

/// Location source errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No city name given")]
    EmptyQuery,
    #[error("City not found")]
    CityNotFound,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_zero_is_clear_sky() {
        assert_eq!(Sky::from_code(0), Sky::Clear);
        assert_eq!(Sky::from_code(0).label(), "Clear Sky ☀️");
    }

    #[test]
    fn codes_below_three_are_cloudy() {
        assert_eq!(Sky::from_code(1), Sky::Cloudy);
        assert_eq!(Sky::from_code(2), Sky::Cloudy);
    }

    #[test]
    fn midrange_codes_are_rainy() {
        assert_eq!(Sky::from_code(3), Sky::Rainy);
        assert_eq!(Sky::from_code(45), Sky::Rainy);
    }

    #[test]
    fn rainy_stormy_boundary_is_exactly_seventy() {
        assert_eq!(Sky::from_code(69), Sky::Rainy);
        assert_eq!(Sky::from_code(70), Sky::Stormy);
        assert_eq!(Sky::from_code(99), Sky::Stormy);
    }

    #[test]
    fn backdrop_buckets() {
        assert_eq!(Backdrop::from_code(0), Backdrop::Sunny);
        assert_eq!(Backdrop::from_code(0).class_name(), "sunny");
        assert_eq!(Backdrop::from_code(2), Backdrop::Sunny);
        assert_eq!(Backdrop::from_code(45), Backdrop::Rainy);
        assert_eq!(Backdrop::from_code(69), Backdrop::Rainy);
        assert_eq!(Backdrop::from_code(70), Backdrop::Stormy);
    }

    #[test]
    fn temperature_formatting_per_unit() {
        assert_eq!(format_temperature(24.0, TemperatureUnit::Celsius), "24 °C");
        assert_eq!(format_temperature(24.0, TemperatureUnit::Fahrenheit), "75.2 °F");
        assert_eq!(format_temperature(0.0, TemperatureUnit::Fahrenheit), "32.0 °F");
    }

    #[test]
    fn unit_toggle_flips_both_ways() {
        assert_eq!(TemperatureUnit::Celsius.toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::Fahrenheit.toggled(), TemperatureUnit::Celsius);
    }

    #[test]
    fn heat_alert_is_strictly_above_threshold() {
        let mut current = CurrentConditions {
            temperature_c: 40.0,
            humidity_pct: 30.0,
            wind_speed_kmh: 10.0,
            code: 0,
        };
        assert_eq!(current.heat_alert(), None);

        current.temperature_c = 40.1;
        assert_eq!(current.heat_alert(), Some("⚠ Extreme Heat Alert!"));
    }
}
