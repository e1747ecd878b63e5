/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-form/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Upper bound on a single provider request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";
pub const TIMEOUT_ENV: &str = "OPENWEATHER_TIMEOUT_SECS";
