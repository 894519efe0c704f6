use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::location::LocationPoint;

/// Native max-length of the "about" textarea
pub const ABOUT_MAX_CHARS: usize = 300;

/// A file picked in the create form
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Local preview as a `data:` URI
    pub fn preview_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}

/// Transient state of the create form
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSubmission {
    pub name: String,
    pub about: String,
    pub position: LocationPoint,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    images: Vec<SelectedImage>,
    previews: Vec<String>,
}

impl Default for DraftSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            position: LocationPoint::default(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: Vec::new(),
            previews: Vec::new(),
        }
    }
}

impl DraftSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    /// Replace the current selection; earlier picks are discarded
    pub fn select_images(&mut self, images: Vec<SelectedImage>) {
        self.previews = images.iter().map(SelectedImage::preview_url).collect();
        self.images = images;
    }

    /// The position marker is only shown once a position was picked
    pub fn has_position(&self) -> bool {
        !self.position.is_unset()
    }

    /// Truncate "about" the way the textarea's max-length would
    pub fn clamp_about(&mut self) {
        if let Some((idx, _)) = self.about.char_indices().nth(ABOUT_MAX_CHARS) {
            self.about.truncate(idx);
        }
    }

    /// Completeness checks applied when strict drafts are enabled
    pub fn validate(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(DraftIssue::MissingName);
        }
        if self.about.chars().count() > ABOUT_MAX_CHARS {
            issues.push(DraftIssue::AboutTooLong);
        }
        if !self.has_position() {
            issues.push(DraftIssue::MissingPosition);
        } else if !self.position.is_valid() {
            issues.push(DraftIssue::InvalidPosition);
        }
        if self.images.is_empty() {
            issues.push(DraftIssue::MissingImages);
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftIssue {
    #[error("Please give the orphanage a name.")]
    MissingName,

    #[error("The description is limited to 300 characters.")]
    AboutTooLong,

    #[error("Click on the map to set the orphanage position.")]
    MissingPosition,

    #[error("The selected position is outside the valid coordinate range.")]
    InvalidPosition,

    #[error("Add at least one picture.")]
    MissingImages,
}
