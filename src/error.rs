use thiserror::Error;

/// Local form validation failures, raised before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter either a postal code or a country name.")]
    MissingLocation,

    #[error("Please enter city and state when no postal code is provided.")]
    MissingCityOrState,
}

/// Failures while talking to the weather provider
#[derive(Debug, Error)]
pub enum FetchError {
    /// Timeout, DNS failure, refused connection and the like
    #[error("Error fetching data: {0}")]
    NetworkError(String),

    /// The provider answered but had no match for the query
    #[error("Location not found: {query}")]
    LocationNotFound {
        query: String,
        message: Option<String>,
    },

    /// The provider answered with something we could not decode
    #[error("Invalid response from weather provider: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Anything that can end a single lookup action
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("A weather lookup is already in progress")]
    Busy,
}
