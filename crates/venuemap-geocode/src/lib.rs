pub mod client;
pub mod error;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use types::Coordinates;

use async_trait::async_trait;

/// Address-to-coordinates resolution seam.
///
/// The production implementation is [`GeocodeClient`]; pipeline tests
/// substitute a fake. `Ok(None)` means the service had no answer for the
/// address — callers drop the record and continue.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        GeocodeClient::geocode(self, address).await
    }
}
