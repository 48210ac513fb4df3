//! Rendered-page fetching through headless Chrome.
//!
//! The directory site builds its listing and detail markup client-side, so a
//! plain HTTP GET returns an empty shell; every fetch goes through a real
//! browser. Each call launches an isolated browser, navigates, captures the
//! rendered DOM, and tears the browser down unconditionally — the session
//! never outlives the fetch, even on failure.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::protocol::cdp::Emulation::SetDeviceMetricsOverride;
use headless_chrome::{Browser, LaunchOptions};

use crate::error::ScrapeError;

const VIEWPORT_WIDTH: u32 = 1200;
const VIEWPORT_HEIGHT: u32 = 800;

/// Fetches the fully rendered HTML of a page.
///
/// The production implementation is [`ChromeFetcher`]; pipeline tests
/// substitute a fake serving canned HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the rendered DOM serialization for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] when the browser cannot be launched or
    /// navigation does not complete.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// One-browser-per-fetch page fetcher backed by headless Chrome.
pub struct ChromeFetcher {
    navigation_timeout_secs: u64,
}

impl ChromeFetcher {
    #[must_use]
    pub fn new(navigation_timeout_secs: u64) -> Self {
        Self {
            navigation_timeout_secs,
        }
    }
}

#[async_trait]
impl PageFetcher for ChromeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let target = url.to_owned();
        let timeout_secs = self.navigation_timeout_secs;

        // headless_chrome drives Chrome over a synchronous websocket;
        // isolate it from the async runtime.
        let joined =
            tokio::task::spawn_blocking(move || fetch_rendered_html(&target, timeout_secs)).await;

        match joined {
            Ok(result) => result,
            Err(e) => Err(ScrapeError::TaskJoin {
                url: url.to_owned(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Launch a browser, navigate, and capture the rendered DOM.
///
/// The `Browser` is scoped to this function: dropping it closes the Chrome
/// process on every path, including early error returns.
fn fetch_rendered_html(url: &str, timeout_secs: u64) -> Result<String, ScrapeError> {
    tracing::debug!(url, "launching browser for fetch");

    let browser_err = |reason: String| ScrapeError::Browser {
        url: url.to_owned(),
        reason,
    };
    let fetch_err = |reason: String| ScrapeError::Fetch {
        url: url.to_owned(),
        reason,
    };

    let mut builder = LaunchOptions::default_builder();
    builder
        .args(vec![
            OsStr::new("--no-sandbox"),
            OsStr::new("--disable-dev-shm-usage"),
        ])
        .path(find_chrome())
        .idle_browser_timeout(Duration::from_secs(timeout_secs));

    let options = builder.build().map_err(|e| browser_err(e.to_string()))?;
    let browser = Browser::new(options).map_err(|e| browser_err(e.to_string()))?;

    let tab = browser.new_tab().map_err(|e| browser_err(e.to_string()))?;
    tab.set_default_timeout(Duration::from_secs(timeout_secs));
    set_viewport(&tab).map_err(browser_err)?;

    tab.navigate_to(url).map_err(|e| fetch_err(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| fetch_err(e.to_string()))?;

    let html = tab.get_content().map_err(|e| fetch_err(e.to_string()))?;
    tracing::debug!(url, bytes = html.len(), "captured rendered page");
    Ok(html)
}

/// Emulate a fixed desktop viewport so the site renders its full listing
/// markup rather than a mobile variant.
fn set_viewport(tab: &headless_chrome::Tab) -> Result<(), String> {
    tab.call_method(SetDeviceMetricsOverride {
        width: VIEWPORT_WIDTH,
        height: VIEWPORT_HEIGHT,
        device_scale_factor: 1.0,
        mobile: false,
        scale: None,
        screen_width: None,
        screen_height: None,
        position_x: None,
        position_y: None,
        dont_set_visible_size: None,
        screen_orientation: None,
        viewport: None,
        display_feature: None,
        device_posture: None,
    })
    .map(|_| ())
    .map_err(|e| e.to_string())
}

/// Locate a Chrome/Chromium binary: the `CHROME` env var wins, otherwise
/// fall back to `headless_chrome`'s own detection.
fn find_chrome() -> Option<PathBuf> {
    if let Ok(chrome_path) = std::env::var("CHROME") {
        let path = PathBuf::from(&chrome_path);
        if path.exists() {
            tracing::debug!(path = %path.display(), "using Chrome from CHROME env var");
            return Some(path);
        }
        tracing::warn!(
            path = %path.display(),
            "CHROME env var points at a missing file; falling back to default detection"
        );
    }
    None
}
