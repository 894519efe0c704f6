use uuid::Uuid;

use crate::config::Config;
use crate::models::{DraftSubmission, LocationPoint, SelectedImage, ABOUT_MAX_CHARS};
use crate::views::{escape, map_container, page, sidebar};

const MAP_ZOOM: u8 = 15;

/// Interactions on the create form
#[derive(Debug, Clone, PartialEq)]
pub enum CreateMsg {
    SetName(String),
    SetAbout(String),
    SetInstructions(String),
    SetOpeningHours(String),
    SetOpenOnWeekends(bool),
    MapClicked(LocationPoint),
    ImagesSelected(Vec<SelectedImage>),
}

#[derive(Debug, Clone, Default)]
pub struct CreateScreen {
    draft: DraftSubmission,
    submission_token: Option<Uuid>,
    errors: Vec<String>,
}

impl CreateScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: Uuid) -> Self {
        self.submission_token = Some(token);
        self
    }

    pub fn update(&mut self, msg: CreateMsg) {
        match msg {
            CreateMsg::SetName(name) => self.draft.name = name,
            CreateMsg::SetAbout(about) => self.draft.about = about,
            CreateMsg::SetInstructions(instructions) => self.draft.instructions = instructions,
            CreateMsg::SetOpeningHours(hours) => self.draft.opening_hours = hours,
            CreateMsg::SetOpenOnWeekends(open) => self.draft.open_on_weekends = open,
            CreateMsg::MapClicked(position) => self.draft.position = position,
            CreateMsg::ImagesSelected(images) => self.draft.select_images(images),
        }
    }

    pub fn draft(&self) -> &DraftSubmission {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftSubmission {
        &mut self.draft
    }

    pub fn submission_token(&self) -> Option<Uuid> {
        self.submission_token
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    /// Position marker, present once the map was clicked
    pub fn marker(&self) -> Option<LocationPoint> {
        self.draft.has_position().then_some(self.draft.position)
    }

    fn render_errors(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        let items: String = self
            .errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape(e)))
            .collect();
        format!(r#"<ul class="errors" role="alert">{}</ul>"#, items)
    }

    fn render_previews(&self) -> String {
        let name = escape(&self.draft.name);
        let previews: String = self
            .draft
            .previews()
            .iter()
            .map(|url| format!(r#"<img src="{}" alt="{}" />"#, escape(url), name))
            .collect();
        let hint = if self.draft.previews().is_empty() {
            ""
        } else {
            r#"<p class="hint">Select the pictures again to send them.</p>"#
        };
        format!(r#"<div id="image-previews">{}</div>{}"#, previews, hint)
    }

    fn render_weekend_toggle(&self) -> String {
        let option = |value: bool, label: &str| {
            let selected = self.draft.open_on_weekends == value;
            format!(
                r#"<label class="{class}"><input type="radio" name="open_on_weekends" value="{value}"{checked} />{label}</label>"#,
                class = if selected { "active" } else { "" },
                value = value,
                checked = if selected { " checked" } else { "" },
                label = label,
            )
        };
        format!(
            r#"<div class="button-select">{}{}</div>"#,
            option(true, "Yes"),
            option(false, "No")
        )
    }

    pub fn render(&self, config: &Config) -> String {
        let draft = &self.draft;
        let center = self.marker().unwrap_or_else(|| config.default_center());
        let marker = self
            .marker()
            .map(|p| {
                format!(
                    r#"<p class="position-marker" data-lat="{lat}" data-lng="{lng}">Selected position: {lat}, {lng}</p>"#,
                    lat = p.latitude,
                    lng = p.longitude
                )
            })
            .unwrap_or_default();
        let token = self
            .submission_token
            .map(|t| format!(r#"<input type="hidden" name="submission_token" value="{}" />"#, t))
            .unwrap_or_default();

        let body = format!(
            r#"{sidebar}
<main>
  <form method="post" action="/orphanages/create" enctype="multipart/form-data" class="create-orphanage-form">
    {errors}
    {token}
    <fieldset>
      <legend>Orphanage information</legend>
      {map}
      {marker}
      <input type="hidden" id="latitude" name="latitude" value="{lat}" />
      <input type="hidden" id="longitude" name="longitude" value="{lng}" />
      <div class="input-block">
        <label for="name">Name</label>
        <input id="name" name="name" value="{name}" />
      </div>
      <div class="input-block">
        <label for="about">About <span>{max} character limit</span></label>
        <textarea id="about" name="about" maxlength="{max}">{about}</textarea>
      </div>
      <div class="input-block">
        <label for="images">Pictures</label>
        <div class="images-container">
          {previews}
          <label for="image[]" class="new-image">+</label>
        </div>
        <input multiple type="file" id="image[]" name="images" accept="image/*" />
      </div>
    </fieldset>
    <fieldset>
      <legend>Visit info</legend>
      <div class="input-block">
        <label for="instructions">Instructions</label>
        <textarea id="instructions" name="instructions">{instructions}</textarea>
      </div>
      <div class="input-block">
        <label for="opening_hours">Open hours</label>
        <input id="opening_hours" name="opening_hours" value="{hours}" />
      </div>
      <div class="input-block">
        <label for="open_on_weekends">Open on weekends?</label>
        {weekends}
      </div>
    </fieldset>
    <button class="confirm-button" type="submit">Confirm</button>
    <a href="/app" class="cancel-button" onclick="history.back(); return false;">Cancel</a>
  </form>
</main>"#,
            sidebar = sidebar(),
            errors = self.render_errors(),
            token = token,
            map = map_container("create-map", center, MAP_ZOOM, &config.tile_url(), true),
            marker = marker,
            lat = draft.position.latitude,
            lng = draft.position.longitude,
            name = escape(&draft.name),
            max = ABOUT_MAX_CHARS,
            about = escape(&draft.about),
            previews = self.render_previews(),
            instructions = escape(&draft.instructions),
            hours = escape(&draft.opening_hours),
            weekends = self.render_weekend_toggle(),
        );
        page("Happy | Register an orphanage", "page-create-orphanage", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(name, "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_map_click_sets_position_and_marker() {
        let mut screen = CreateScreen::new();
        assert!(screen.marker().is_none());
        assert!(!screen.render(&Config::default()).contains("position-marker"));

        screen.update(CreateMsg::MapClicked(LocationPoint::new(42.129224, -80.085059)));
        assert_eq!(screen.draft().position, LocationPoint::new(42.129224, -80.085059));
        assert_eq!(screen.marker(), Some(LocationPoint::new(42.129224, -80.085059)));

        let html = screen.render(&Config::default());
        assert!(html.contains(r#"data-lat="42.129224" data-lng="-80.085059""#));
        assert!(html.contains(r#"name="latitude" value="42.129224""#));
    }

    #[test]
    fn test_weekend_toggle_no_then_yes() {
        let mut screen = CreateScreen::new();
        assert!(screen.draft().open_on_weekends);

        screen.update(CreateMsg::SetOpenOnWeekends(false));
        assert!(!screen.draft().open_on_weekends);
        let html = screen.render(&Config::default());
        assert!(html.contains(r#"<label class="active"><input type="radio" name="open_on_weekends" value="false" checked />No</label>"#));

        screen.update(CreateMsg::SetOpenOnWeekends(true));
        assert!(screen.draft().open_on_weekends);
        let html = screen.render(&Config::default());
        assert!(html.contains(r#"<label class="active"><input type="radio" name="open_on_weekends" value="true" checked />Yes</label>"#));
        assert!(html.contains(r#"<label class=""><input type="radio" name="open_on_weekends" value="false" />No</label>"#));
    }

    #[test]
    fn test_image_selection_replaces() {
        let mut screen = CreateScreen::new();
        screen.update(CreateMsg::ImagesSelected(vec![image("a"), image("b"), image("c")]));
        screen.update(CreateMsg::ImagesSelected(vec![image("d")]));

        assert_eq!(screen.draft().images(), &[image("d")]);
        assert_eq!(screen.draft().previews().len(), 1);
    }

    #[test]
    fn test_text_fields_bind() {
        let mut screen = CreateScreen::new();
        screen.update(CreateMsg::SetName("Casa \"Lar\"".to_string()));
        screen.update(CreateMsg::SetAbout("About us".to_string()));
        screen.update(CreateMsg::SetInstructions("Knock".to_string()));
        screen.update(CreateMsg::SetOpeningHours("9 to 5".to_string()));

        let html = screen.render(&Config::default());
        assert!(html.contains(r#"value="Casa &quot;Lar&quot;""#));
        assert!(html.contains(r#"maxlength="300">About us</textarea>"#));
        assert!(html.contains(">Knock</textarea>"));
        assert!(html.contains(r#"value="9 to 5""#));
    }

    #[test]
    fn test_token_and_errors_rendered() {
        let token = Uuid::new_v4();
        let mut screen = CreateScreen::new().with_token(token);
        screen.set_errors(vec!["Add at least one picture.".to_string()]);

        let html = screen.render(&Config::default());
        assert!(html.contains(&format!(r#"name="submission_token" value="{}""#, token)));
        assert!(html.contains("<li>Add at least one picture.</li>"));
    }
}
