use serde::Deserialize;

use crate::models::LocationPoint;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URL of the locations API, always stored with a trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,

    // Leaflet tile template; `{apikey}` is replaced with `map_api_key`
    #[serde(default = "default_map_tile_url")]
    pub map_tile_url: String,

    #[serde(default)]
    pub map_api_key: Option<String>,

    // Map center used when neither the device position nor any record is known
    #[serde(default)]
    pub default_latitude: f64,

    #[serde(default)]
    pub default_longitude: f64,

    // Open the map on the centroid of the fetched records instead of the default center
    #[serde(default)]
    pub center_on_records: bool,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_region")]
    pub region: String,

    // Reject incomplete drafts instead of forwarding them as-is
    #[serde(default)]
    pub strict_drafts: bool,

    #[serde(default = "default_submission_token_ttl_secs")]
    pub submission_token_ttl_secs: i64,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()?.normalized().validated()
    }

    fn validated(self) -> Result<Self, envy::Error> {
        if self.submission_token_ttl().is_none() {
            return Err(envy::Error::Custom(format!(
                "SUBMISSION_TOKEN_TTL_SECS is out of range: {}",
                self.submission_token_ttl_secs
            )));
        }
        Ok(self)
    }

    /// `None` when the configured seconds do not fit a `chrono::Duration`
    pub fn submission_token_ttl(&self) -> Option<chrono::Duration> {
        chrono::Duration::try_seconds(self.submission_token_ttl_secs)
    }

    fn normalized(mut self) -> Self {
        if !self.api_base_url.ends_with('/') {
            self.api_base_url.push('/');
        }
        self
    }

    pub fn default_center(&self) -> LocationPoint {
        LocationPoint::new(self.default_latitude, self.default_longitude)
    }

    /// Tile URL template with the API key substituted in
    pub fn tile_url(&self) -> String {
        match &self.map_api_key {
            Some(key) => self.map_tile_url.replace("{apikey}", key),
            None => self.map_tile_url.replace("{apikey}", ""),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_base_url: default_api_base_url(),
            api_timeout_secs: default_api_timeout_secs(),
            map_tile_url: default_map_tile_url(),
            map_api_key: None,
            default_latitude: 0.0,
            default_longitude: 0.0,
            center_on_records: false,
            city: default_city(),
            region: default_region(),
            strict_drafts: false,
            submission_token_ttl_secs: default_submission_token_ttl_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "http://localhost:3333/".to_string()
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_map_tile_url() -> String {
    "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_city() -> String {
    "Erie".to_string()
}

fn default_region() -> String {
    "Pennsylvania".to_string()
}

fn default_submission_token_ttl_secs() -> i64 {
    3600
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}
