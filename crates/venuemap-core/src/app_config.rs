use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub geocode_api_key: String,
    pub listing_url: String,
    pub output_path: PathBuf,
    pub log_level: String,
    pub inter_record_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("geocode_api_key", &"[redacted]")
            .field("listing_url", &self.listing_url)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .field("inter_record_delay_ms", &self.inter_record_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
