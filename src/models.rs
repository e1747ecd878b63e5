use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Form Models
// ============================================================================

/// Raw location fields as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationInput {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
    pub postal_code: Option<String>,
}

impl LocationInput {
    /// Builds an input from free-text fields, trimming each and dropping blanks
    pub fn new(
        country: Option<&str>,
        state: Option<&str>,
        city: Option<&str>,
        locality: Option<&str>,
        postal_code: Option<&str>,
    ) -> Self {
        Self {
            country: non_blank(country),
            state: non_blank(state),
            city: non_blank(city),
            locality: non_blank(locality),
            postal_code: non_blank(postal_code),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    /// Value of the provider's `units` query parameter
    pub fn as_query_param(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "\u{00b0}C",
            Self::Imperial => "\u{00b0}F",
        }
    }

    pub fn wind_speed_label(self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }
}

/// How a finished report should label its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationContext {
    /// Postal code given without city or state; country code gets expanded
    PostalOnly,
    /// Place lookup; user-entered fields are echoed back in the report
    Place {
        state: Option<String>,
        city: Option<String>,
        locality: Option<String>,
    },
}

/// Resolved provider query plus the context needed to label the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub q: String,
    pub context: LocationContext,
}

impl WeatherQuery {
    pub fn as_str(&self) -> &str {
        &self.q
    }

    pub fn is_postal_only(&self) -> bool {
        self.context == LocationContext::PostalOnly
    }
}

/// Current conditions ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location_label: String,
    pub timestamp: String,
    pub temperature: f64,
    pub unit_symbol: String,
    pub condition_description: String,
    pub humidity_percent: f64,
    pub wind_speed: f64,
    pub units: UnitPreference,
    pub is_postal_lookup: bool,
    pub state: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
}

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

/// Status code as sent by the provider, which uses both `200` and `"404"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Number(i64),
    Text(String),
}

impl StatusCode {
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Number(code) => *code == 200,
            Self::Text(code) => code == "200",
        }
    }
}

/// Minimal view of a response used to check `cod` before the full decode
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub cod: Option<StatusCode>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub sys: SysData,
    pub weather: Vec<ConditionData>,
    pub main: MainData,
    pub wind: WindData,
}

#[derive(Debug, Deserialize)]
pub struct SysData {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionData {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct WindData {
    pub speed: f64,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// Country name or code, e.g. "France" or "US"
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    /// Neighbourhood or locality, shown in the report only
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    /// "metric" (default) or "imperial"
    pub units: Option<UnitPreference>,
}

impl GetWeatherRequest {
    pub fn location(&self) -> LocationInput {
        LocationInput::new(
            self.country.as_deref(),
            self.state.as_deref(),
            self.city.as_deref(),
            self.locality.as_deref(),
            self.postal_code.as_deref(),
        )
    }
}
