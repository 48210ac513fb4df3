//! HTTP client for the Google Maps Geocoding API.
//!
//! Wraps `reqwest` with geocoding-specific error handling, API key
//! management, and typed response deserialization. A "no result" answer
//! (non-`OK` status or an empty result set) is `Ok(None)`, not an error —
//! only transport-level failures surface as [`GeocodeError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{Coordinates, GeocodeResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";
const GEOCODE_PATH: &str = "maps/api/geocode/json";

/// Client for the Google Maps Geocoding API.
///
/// Manages the HTTP client, API key, and endpoint URL. Use
/// [`GeocodeClient::new`] for production or [`GeocodeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeocodeClient {
    /// Creates a new client pointed at the production geocoding API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL base.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("venuemap/0.1 (geocoding)")
            .build()?;

        // Normalise: exactly one trailing slash so Url::join appends the
        // endpoint path instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(GEOCODE_PATH))
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Resolves a postal address to coordinates.
    ///
    /// Returns `Ok(None)` when the address is blank, the service status is
    /// not `"OK"`, or the result set is empty — the caller drops the record
    /// and moves on. Takes the first result as the answer when several
    /// match; there is no disambiguation and no retry.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network or TLS failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response body does not match
    ///   the expected envelope.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            tracing::debug!("blank address — skipping geocode request");
            return Ok(None);
        }

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        tracing::debug!(address, "requesting coordinates");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode response for \"{address}\""),
                source: e,
            })?;

        if parsed.status != "OK" || parsed.results.is_empty() {
            tracing::info!(
                address,
                status = %parsed.status,
                error_message = parsed.error_message.as_deref().unwrap_or_default(),
                "no geocoding result for address"
            );
            return Ok(None);
        }

        let best = &parsed.results[0];
        tracing::debug!(
            address,
            formatted = best.formatted_address.as_deref().unwrap_or_default(),
            "geocoded address"
        );
        Ok(Some(Coordinates {
            latitude: best.geometry.location.lat,
            longitude: best.geometry.location.lng,
        }))
    }
}
