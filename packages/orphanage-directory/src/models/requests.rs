use serde::Deserialize;

/// Query string of the detail page; `image` selects the large preview
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub image: Option<usize>,
}

/// Query string of the map page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    #[serde(default)]
    pub notice: Option<Notice>,
}

/// Banners shown on the map page after a create round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notice {
    Created,
    Duplicate,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Created => "Registration complete!",
            Notice::Duplicate => "This registration was already sent.",
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Duplicate => "duplicate",
        }
    }
}

/// Query string of the create page; a map click without script lands here
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuery {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
