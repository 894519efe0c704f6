use reqwest::multipart::{Form, Part};

use crate::models::{DraftSubmission, SelectedImage};

/// Field name shared by every uploaded image part
pub const IMAGES_FIELD: &str = "images";

/// Body of `POST orphanages`, kept inspectable until it is turned into a form
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayload {
    pub fields: Vec<(&'static str, String)>,
    pub images: Vec<SelectedImage>,
}

impl CreatePayload {
    pub fn from_draft(draft: &DraftSubmission) -> Self {
        let fields = vec![
            ("name", draft.name.clone()),
            ("about", draft.about.clone()),
            ("latitude", draft.position.latitude.to_string()),
            ("longitude", draft.position.longitude.to_string()),
            ("instructions", draft.instructions.clone()),
            ("opening_hours", draft.opening_hours.clone()),
            ("open_on_weekends", bool_field(draft.open_on_weekends).to_string()),
        ];

        Self {
            fields,
            images: draft.images().to_vec(),
        }
    }

    /// All values sent under `name`, in order
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for image in self.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part(IMAGES_FIELD, part);
        }
        Ok(form)
    }
}

/// Text form of the weekend flag on the wire
pub fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
