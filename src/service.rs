use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::OpenWeatherClient;
use crate::error::{FetchError, LookupError};
use crate::formatters::render_markdown;
use crate::models::{GetWeatherRequest, LocationInput, UnitPreference, WeatherReport};
use crate::resolver::resolve;
use crate::state::FormState;

/// Weather form service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<OpenWeatherClient>,
    form: Arc<Mutex<FormState>>,
    in_flight: Arc<Mutex<()>>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service around a provider client
    pub fn new(client: OpenWeatherClient) -> Self {
        Self {
            client: Arc::new(client),
            form: Arc::new(Mutex::new(FormState::default())),
            in_flight: Arc::new(Mutex::new(())),
            tool_router: Self::tool_router(),
        }
    }

    /// Runs one lookup: records the form, validates, fetches and stores the report.
    ///
    /// Only one lookup may be in flight; a concurrent call fails with
    /// [`LookupError::Busy`]. A failed lookup leaves the previous report in place.
    pub async fn lookup(
        &self,
        input: LocationInput,
        units: UnitPreference,
    ) -> Result<WeatherReport, LookupError> {
        let _guard = self.in_flight.try_lock().map_err(|_| LookupError::Busy)?;

        let query = {
            let mut form = self.form.lock().await;
            form.set_input(input, units);
            resolve(&form.input)?
        };

        let report = self.client.fetch_and_format(&query, units).await?;

        self.form.lock().await.set_report(report.clone());
        Ok(report)
    }

    /// Discards all entered fields and the last report.
    ///
    /// Waits for a running lookup to settle first, so its report cannot land
    /// on the cleared form.
    pub async fn clear(&self) {
        let _guard = self.in_flight.lock().await;
        self.form.lock().await.clear();
        tracing::info!("Form cleared");
    }

    /// Snapshot of the current form contents
    pub async fn form_state(&self) -> FormState {
        self.form.lock().await.clone()
    }
}

fn lookup_error_to_mcp(err: LookupError) -> McpError {
    match &err {
        LookupError::Validation(_) | LookupError::Fetch(FetchError::LocationNotFound { .. }) => {
            McpError::invalid_params(err.to_string(), None)
        }
        LookupError::Fetch(_) | LookupError::Busy => {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-form".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A current-conditions weather form powered by OpenWeatherMap. \
                Look up a place by postal code or by city, state and country, \
                then clear the form to start over."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Looks up current conditions for the given location fields
    #[tool(description = "Get current weather conditions. Provide either a postal code (optionally with a country), or a city, state and country (e.g., city: 'Paris', state: 'Ile-de-France', country: 'France'). Locality is optional and only shown in the report. Units are 'metric' (default) or 'imperial'.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let input = request.location();
        let units = request.units.unwrap_or_default();
        tracing::info!("Getting weather for {:?}", input);

        let report = self.lookup(input, units).await.map_err(|e| {
            tracing::warn!("Weather lookup failed: {}", e);
            lookup_error_to_mcp(e)
        })?;

        Ok(CallToolResult::success(vec![Content::text(
            render_markdown(&report),
        )]))
    }

    /// Clears the form fields and the last report
    #[tool(description = "Clear all location fields and the last weather report.")]
    async fn clear_form(&self) -> Result<CallToolResult, McpError> {
        self.clear().await;
        Ok(CallToolResult::success(vec![Content::text("Form cleared.")]))
    }

    /// Shows the last successful report, if any
    #[tool(description = "Show the most recent weather report, if one is displayed.")]
    async fn last_report(&self) -> Result<CallToolResult, McpError> {
        let text = match &self.form.lock().await.last_report {
            Some(report) => render_markdown(report),
            None => "No weather report to show.".to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
