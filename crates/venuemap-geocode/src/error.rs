use thiserror::Error;

/// Errors returned by the geocoding API client.
///
/// None of these are fatal to a pipeline run: the orchestrator converts any
/// geocode error into a dropped record.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoding service returned a non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from geocoding service")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL (client construction).
    #[error("invalid geocoding base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
