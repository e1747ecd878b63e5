use chrono::{DateTime, Local};
use reqwest::Client;
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::constants::USER_AGENT;
use crate::countries::display_country;
use crate::error::{ConfigError, FetchError};
use crate::formatters::title_case;
use crate::models::{
    CurrentWeatherResponse, LocationContext, StatusEnvelope, UnitPreference, WeatherQuery,
    WeatherReport,
};

/// Timestamp layout used in reports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// OpenWeatherMap current-conditions client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Creates a client bounded by the configured request timeout
    pub fn new(config: WeatherConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Issues the GET request and returns the raw body.
    ///
    /// The HTTP status is not checked here; failures are reported through the
    /// `cod` field of the body.
    async fn make_request(
        &self,
        query: &WeatherQuery,
        units: UnitPreference,
    ) -> Result<String, FetchError> {
        let url = format!("{}/weather", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.config.api_key.as_str()),
                ("units", units.as_query_param()),
            ])
            .send()
            .await?;

        tracing::debug!("Provider answered with HTTP {}", response.status());

        let body = response.text().await?;
        Ok(body)
    }

    /// Fetches current conditions for a resolved query and builds the report
    pub async fn fetch_and_format(
        &self,
        query: &WeatherQuery,
        units: UnitPreference,
    ) -> Result<WeatherReport, FetchError> {
        tracing::info!(
            "Fetching weather for {:?} ({})",
            query.as_str(),
            units.as_query_param()
        );

        let body = self.make_request(query, units).await.map_err(|e| {
            tracing::warn!("Weather request failed: {}", e);
            e
        })?;

        let payload = parse_payload(query, &body)?;
        build_report(query, units, &payload, Local::now())
    }
}

/// Checks the provider status code and decodes the full payload
pub fn parse_payload(query: &WeatherQuery, body: &str) -> Result<CurrentWeatherResponse, FetchError> {
    let envelope: StatusEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    if !envelope.cod.as_ref().is_some_and(|cod| cod.is_ok()) {
        tracing::info!(
            "Location not found: {} ({:?})",
            query.as_str(),
            envelope.message
        );
        return Err(FetchError::LocationNotFound {
            query: query.as_str().to_string(),
            message: envelope.message,
        });
    }

    serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))
}

/// Assembles a report from a decoded payload
pub fn build_report(
    query: &WeatherQuery,
    units: UnitPreference,
    payload: &CurrentWeatherResponse,
    now: DateTime<Local>,
) -> Result<WeatherReport, FetchError> {
    let condition = payload
        .weather
        .first()
        .ok_or_else(|| FetchError::InvalidResponse("missing weather description".to_string()))?;

    let country_code = payload.sys.country.as_deref().unwrap_or_default();

    let (is_postal_lookup, country, state, city, locality) = match &query.context {
        LocationContext::PostalOnly => (true, display_country(country_code), None, None, None),
        LocationContext::Place {
            state,
            city,
            locality,
        } => (
            false,
            country_code.to_string(),
            state.clone(),
            city.clone(),
            locality.clone(),
        ),
    };

    let location_label = if country.is_empty() {
        payload.name.clone()
    } else {
        format!("{}, {}", payload.name, country)
    };

    Ok(WeatherReport {
        location_label,
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        temperature: payload.main.temp,
        unit_symbol: units.temperature_symbol().to_string(),
        condition_description: title_case(&condition.description),
        humidity_percent: payload.main.humidity,
        wind_speed: payload.wind.speed,
        units,
        is_postal_lookup,
        state,
        city,
        locality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    const PARIS: &str = r#"{
        "cod": 200,
        "name": "Paris",
        "sys": {"country": "FR"},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
        "main": {"temp": 18.5, "humidity": 40},
        "wind": {"speed": 3.2}
    }"#;

    fn place_query() -> WeatherQuery {
        WeatherQuery {
            q: "Paris,Ile-de-France,France".to_string(),
            context: LocationContext::Place {
                state: Some("Ile-de-France".to_string()),
                city: Some("Paris".to_string()),
                locality: None,
            },
        }
    }

    fn postal_query() -> WeatherQuery {
        WeatherQuery {
            q: "75001,FR".to_string(),
            context: LocationContext::PostalOnly,
        }
    }

    #[test]
    fn test_place_report() {
        let query = place_query();
        let payload = parse_payload(&query, PARIS).unwrap();
        let report = build_report(&query, UnitPreference::Metric, &payload, Local::now()).unwrap();

        assert_eq!(report.location_label, "Paris, FR");
        assert_eq!(report.unit_symbol, "°C");
        assert_eq!(report.condition_description, "Clear Sky");
        assert_eq!(report.temperature, 18.5);
        assert_eq!(report.humidity_percent, 40.0);
        assert_eq!(report.wind_speed, 3.2);
        assert!(!report.is_postal_lookup);
        assert_eq!(report.state.as_deref(), Some("Ile-de-France"));
        assert_eq!(report.city.as_deref(), Some("Paris"));
        assert!(NaiveDateTime::parse_from_str(&report.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_postal_report_expands_country() {
        let query = postal_query();
        let payload = parse_payload(&query, PARIS).unwrap();
        let report =
            build_report(&query, UnitPreference::Imperial, &payload, Local::now()).unwrap();

        assert_eq!(report.location_label, "Paris, France");
        assert_eq!(report.unit_symbol, "°F");
        assert!(report.is_postal_lookup);
        assert_eq!(report.state, None);
    }

    #[test]
    fn test_postal_report_unknown_country_keeps_code() {
        let body = PARIS.replace("\"FR\"", "\"ZZ\"");
        let query = postal_query();
        let payload = parse_payload(&query, &body).unwrap();
        let report = build_report(&query, UnitPreference::Metric, &payload, Local::now()).unwrap();
        assert_eq!(report.location_label, "Paris, ZZ");
    }

    #[test]
    fn test_not_found() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        let err = parse_payload(&place_query(), body).unwrap_err();
        match err {
            FetchError::LocationNotFound { query, message } => {
                assert_eq!(query, "Paris,Ile-de-France,France");
                assert_eq!(message.as_deref(), Some("city not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_cod_is_not_found() {
        let err = parse_payload(&place_query(), r#"{"name": "Paris"}"#).unwrap_err();
        assert!(matches!(err, FetchError::LocationNotFound { .. }));
    }

    #[test]
    fn test_invalid_bodies() {
        let err = parse_payload(&place_query(), "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));

        let err = parse_payload(&place_query(), r#"{"cod": 200, "name": "Paris"}"#).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }

    #[test]
    fn test_empty_weather_list() {
        let body = PARIS.replace(
            r#"[{"id": 800, "main": "Clear", "description": "clear sky"}]"#,
            "[]",
        );
        let query = place_query();
        let payload = parse_payload(&query, &body).unwrap();
        let err = build_report(&query, UnitPreference::Metric, &payload, Local::now()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse(_)));
    }
}
