//! HTML building blocks shared by every screen.
//!
//! Pages are plain `String`s assembled with `format!`; every value coming
//! from the API or from a user goes through [`escape`] first.

pub mod assets;

use serde::Serialize;

use crate::models::LocationPoint;

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `data` into an inert `<script type="application/json">` block
/// read by the map script
pub fn json_script<T: Serialize>(id: &str, data: &T) -> String {
    let json = serde_json::to_string(data).unwrap_or_else(|_| "null".to_string());
    format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        escape(id),
        json.replace("</", "<\\/")
    )
}

/// Leaflet map container; the script picks its options from `data-*`
pub fn map_container(id: &str, center: LocationPoint, zoom: u8, tile_url: &str, interactive: bool) -> String {
    format!(
        r#"<div id="{}" class="map" data-lat="{}" data-lng="{}" data-zoom="{}" data-tiles="{}" data-interactive="{}"></div>"#,
        escape(id),
        center.latitude,
        center.longitude,
        zoom,
        escape(tile_url),
        interactive
    )
}

pub fn sidebar() -> String {
    r#"<aside class="app-sidebar">
  <a href="/app"><img src="/static/map-marker.svg" alt="Happy" /></a>
  <footer>
    <button type="button" class="back-button" onclick="history.back()">&larr;</button>
  </footer>
</aside>"#
        .to_string()
}

/// Full HTML document around a screen body
pub fn page(title: &str, page_id: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <link rel="stylesheet" href="/static/app.css" />
</head>
<body>
<div id="{page_id}">
{body}
</div>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="/static/app.js"></script>
</body>
</html>
"#,
        title = escape(title),
        page_id = escape(page_id),
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_json_script_cannot_close_tag() {
        let html = json_script("data", &vec!["</script><b>"]);
        assert!(html.starts_with(r#"<script type="application/json" id="data">"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn test_page_wraps_body() {
        let html = page("Happy & co", "page-landing", "<p>hi</p>");
        assert!(html.contains("<title>Happy &amp; co</title>"));
        assert!(html.contains(r#"<div id="page-landing">"#));
        assert!(html.contains("<p>hi</p>"));
    }
}
