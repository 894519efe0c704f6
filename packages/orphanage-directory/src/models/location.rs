use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    /// Create a new location point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0 && self.latitude <= 90.0 &&
        self.longitude >= -180.0 && self.longitude <= 180.0
    }

    /// (0, 0) stands for "no position chosen yet"
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// One image attached to an orphanage, served by the locations API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanageImage {
    pub id: u64,
    pub url: String,
}

/// Full location record as returned by `GET orphanages/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub open_on_weekends: bool,
    #[serde(default)]
    pub images: Vec<OrphanageImage>,
}

impl Orphanage {
    pub fn position(&self) -> LocationPoint {
        LocationPoint::new(self.latitude, self.longitude)
    }
}

/// Map pin data as returned by `GET orphanages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanageSummary {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl OrphanageSummary {
    pub fn position(&self) -> LocationPoint {
        LocationPoint::new(self.latitude, self.longitude)
    }
}
