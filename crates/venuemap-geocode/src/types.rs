//! Response types for the Google Maps Geocoding API (`/maps/api/geocode/json`).
//!
//! ## Observed envelope shape
//!
//! ### `status`
//! A string code: `"OK"` when at least one result matched, `"ZERO_RESULTS"`
//! when the address resolved to nothing, and error codes such as
//! `"REQUEST_DENIED"` or `"OVER_QUERY_LIMIT"` otherwise. Only `"OK"` with a
//! non-empty `results` array counts as an answer.
//!
//! ### `results`
//! Omitted entirely on some error statuses, so `#[serde(default)]` is
//! required. The first result is the service's best match; we never
//! disambiguate among multiple results.
//!
//! ### `error_message`
//! Human-readable diagnostic accompanying non-`OK` statuses. Optional even
//! then — `ZERO_RESULTS` usually ships without one.

use serde::Deserialize;

/// Top-level envelope from the geocoding endpoint.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Diagnostic accompanying non-`OK` statuses. Logged, never surfaced as
    /// an error.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single candidate match for the queried address.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,

    /// Canonicalized postal address for the match. Unused by the pipeline
    /// but kept for debug logging.
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Resolved coordinates handed back to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
