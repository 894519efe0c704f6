use crate::config::Config;
use crate::views::{escape, page};

pub fn render(config: &Config) -> String {
    let body = format!(
        r#"<div class="content-wrapper">
  <img src="/static/map-marker.svg" alt="Happy logo" />
  <main>
    <h1>Bring happiness to the world</h1>
    <p>Visit an orphanage and make a kid's day</p>
  </main>
  <div class="location">
    <strong>{city}</strong>
    <span>{region}</span>
  </div>
  <a href="/app" class="enter-app" aria-label="Enter the app">&rarr;</a>
</div>"#,
        city = escape(&config.city),
        region = escape(&config.region),
    );
    page("Happy", "page-landing", &body)
}
