//! The scrape → geocode → export pipeline.
//!
//! One invocation performs one full pass: fetch the listing page, then for
//! each discovered venue fetch its detail page, geocode its address, and
//! accumulate the resolved places; finally write the whole dataset to disk,
//! overwriting any prior artifact. Per-venue failures are logged and
//! skipped so one bad venue does not abort the batch; only a listing fetch
//! failure (no records possible without it) or a sink write failure is
//! fatal.

mod sink;

use std::time::Duration;

use anyhow::Context;

use venuemap_core::{AppConfig, Place, VenueListing};
use venuemap_geocode::{GeocodeClient, Geocoder};
use venuemap_scraper::{parse_detail, parse_listing, ChromeFetcher, PageFetcher};

/// Entry point for the `run` command: wires the production fetcher and
/// geocoder, runs the pipeline, and writes the output artifact.
///
/// # Errors
///
/// Returns an error (→ non-zero process exit) on configuration/client
/// construction failure, listing fetch failure, or sink write failure.
/// Completing with dropped venues is still success.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let fetcher = ChromeFetcher::new(config.request_timeout_secs);
    let geocoder = GeocodeClient::new(&config.geocode_api_key, config.request_timeout_secs)
        .context("failed to construct geocoding client")?;

    let places = run_pipeline(&fetcher, &geocoder, config).await?;

    sink::write_places(&places, &config.output_path).context("failed to write places artifact")?;
    tracing::info!(
        count = places.len(),
        path = %config.output_path.display(),
        "places saved"
    );
    tracing::info!("ETL run completed");
    Ok(())
}

/// Runs one full pass and returns the accumulated places.
///
/// The accumulator is owned here and returned to the caller — nothing is
/// process-global, so the pipeline can run repeatedly within one process
/// (tests do) without cross-run contamination. Venues are processed
/// strictly one at a time in listing order, with a fixed pause after every
/// venue regardless of outcome.
///
/// # Errors
///
/// Only a listing-page fetch failure is fatal here; every per-venue
/// failure becomes a drop.
pub(crate) async fn run_pipeline(
    fetcher: &dyn PageFetcher,
    geocoder: &dyn Geocoder,
    config: &AppConfig,
) -> anyhow::Result<Vec<Place>> {
    tracing::info!(url = %config.listing_url, "fetching listing page");
    let listing_html = fetcher
        .fetch(&config.listing_url)
        .await
        .context("failed to fetch listing page")?;

    let venues = parse_listing(&listing_html, &config.listing_url);
    tracing::info!(count = venues.len(), "discovered venues");

    let delay = Duration::from_millis(config.inter_record_delay_ms);
    let mut places: Vec<Place> = Vec::new();

    for venue in &venues {
        tracing::info!(name = %venue.name, url = %venue.detail_url, "processing venue");
        if let Some(place) = resolve_venue(fetcher, geocoder, venue).await {
            places.push(place);
        }

        // Fixed pause after every venue, resolved or dropped. This is the
        // sole rate limiting applied to the source site and the geocoder.
        if config.inter_record_delay_ms > 0 {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(places)
}

/// Resolves a single venue to a [`Place`], or `None` when any per-venue
/// step fails: detail-page fetch, address extraction, or geocoding. Every
/// drop is logged with enough context to chase the venue down by hand.
async fn resolve_venue(
    fetcher: &dyn PageFetcher,
    geocoder: &dyn Geocoder,
    venue: &VenueListing,
) -> Option<Place> {
    let html = match fetcher.fetch(&venue.detail_url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(
                name = %venue.name,
                url = %venue.detail_url,
                error = %e,
                "skipping venue — detail page fetch failed"
            );
            return None;
        }
    };

    let address = parse_detail(&html);
    if address.is_empty() {
        tracing::warn!(
            name = %venue.name,
            url = %venue.detail_url,
            "skipping venue — no address on detail page"
        );
        return None;
    }

    let coordinates = match geocoder.geocode(&address).await {
        Ok(Some(coordinates)) => coordinates,
        Ok(None) => {
            tracing::warn!(
                name = %venue.name,
                address = %address,
                "skipping venue — address did not geocode"
            );
            return None;
        }
        Err(e) => {
            tracing::warn!(
                name = %venue.name,
                address = %address,
                error = %e,
                "skipping venue — geocoding failed"
            );
            return None;
        }
    };

    Some(Place {
        name: venue.name.clone(),
        detail_url: venue.detail_url.clone(),
        category: venue.category.clone(),
        address,
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        slug: venue.slug.clone(),
    })
}

#[cfg(test)]
#[path = "etl_test.rs"]
mod tests;
