use crate::config::Config;
use crate::models::{Orphanage, OrphanageImage};
use crate::views::{escape, map_container, page, sidebar};

const MAP_ZOOM: u8 = 14;

/// Large preview plus thumbnail selectors
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<OrphanageImage>,
    active: usize,
}

impl Gallery {
    pub fn new(images: Vec<OrphanageImage>) -> Self {
        Self { images, active: 0 }
    }

    /// Promote image `index` to the large slot. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_image(&self) -> Option<&OrphanageImage> {
        self.images.get(self.active)
    }

    pub fn images(&self) -> &[OrphanageImage] {
        &self.images
    }
}

pub fn directions_url(orphanage: &Orphanage) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        orphanage.latitude, orphanage.longitude
    )
}

#[derive(Debug, Clone)]
pub struct DetailScreen {
    orphanage: Orphanage,
    gallery: Gallery,
}

impl DetailScreen {
    pub fn new(orphanage: Orphanage) -> Self {
        let gallery = Gallery::new(orphanage.images.clone());
        Self { orphanage, gallery }
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        self.gallery.select(index)
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    fn render_gallery(&self) -> String {
        let name = escape(&self.orphanage.name);
        let Some(active) = self.gallery.active_image() else {
            return r#"<div class="no-images">No pictures yet</div>"#.to_string();
        };

        let thumbnails: String = self
            .gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let class = if index == self.gallery.active_index() { "active" } else { "" };
                format!(
                    r#"<a href="/orphanages/{id}?image={index}" class="{class}"><img src="{url}" alt="{name}" /></a>"#,
                    id = self.orphanage.id,
                    index = index,
                    class = class,
                    url = escape(&image.url),
                    name = name,
                )
            })
            .collect();

        format!(
            r#"<img src="{url}" alt="{name}" class="active-image" />
<div class="images">{thumbnails}</div>"#,
            url = escape(&active.url),
            name = name,
            thumbnails = thumbnails,
        )
    }

    fn render_weekends(&self) -> &'static str {
        if self.orphanage.open_on_weekends {
            r#"<div class="open-on-weekends">This orphanage is open on weekends.</div>"#
        } else {
            r#"<div class="open-on-weekends dont-open">This orphanage is closed on weekends.</div>"#
        }
    }

    pub fn render(&self, config: &Config) -> String {
        let o = &self.orphanage;
        let body = format!(
            r#"{sidebar}
<main>
  <div class="orphanage-details">
    {gallery}
    <div class="orphanage-details-content">
      <h1>{name}</h1>
      <p>{about}</p>
      <div class="map-container">
        {map}
        <footer>
          <a target="_blank" rel="noopener noreferrer" href="{directions}">See how to get there!</a>
        </footer>
      </div>
      <hr />
      <h2>Visiting instructions</h2>
      <p>{instructions}</p>
      <div class="open-details">
        <div class="hour">Monday to Friday <br />{hours}</div>
        {weekends}
      </div>
    </div>
  </div>
</main>"#,
            sidebar = sidebar(),
            gallery = self.render_gallery(),
            name = escape(&o.name),
            about = escape(&o.about),
            map = map_container("orphanage-map", o.position(), MAP_ZOOM, &config.tile_url(), false),
            directions = escape(&directions_url(o)),
            instructions = escape(&o.instructions),
            hours = escape(&o.opening_hours),
            weekends = self.render_weekends(),
        );
        page(&format!("Happy | {}", o.name), "page-orphanage", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orphanage(open_on_weekends: bool, image_count: u64) -> Orphanage {
        Orphanage {
            id: 5,
            name: "Sunrise Home".to_string(),
            latitude: 42.12,
            longitude: -80.08,
            about: "Thirty kids & counting".to_string(),
            instructions: "Bring a smile".to_string(),
            opening_hours: "8am to 6pm".to_string(),
            open_on_weekends,
            images: (0..image_count)
                .map(|i| OrphanageImage {
                    id: 100 + i,
                    url: format!("http://img.local/{}.jpg", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_gallery_starts_at_first_image() {
        let screen = DetailScreen::new(orphanage(true, 3));
        assert_eq!(screen.gallery().active_index(), 0);
        assert_eq!(screen.gallery().active_image().unwrap().id, 100);
    }

    #[test]
    fn test_selecting_thumbnail_promotes_it() {
        let mut screen = DetailScreen::new(orphanage(true, 3));
        for i in [2, 0, 1] {
            assert!(screen.select_image(i));
            assert_eq!(screen.gallery().active_index(), i);
            assert_eq!(screen.gallery().active_image().unwrap().id, 100 + i as u64);
        }
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut screen = DetailScreen::new(orphanage(true, 2));
        screen.select_image(1);
        assert!(!screen.select_image(2));
        assert_eq!(screen.gallery().active_index(), 1);
    }

    #[test]
    fn test_renders_record_fields() {
        let html = DetailScreen::new(orphanage(true, 2)).render(&Config::default());
        assert!(html.contains("<h1>Sunrise Home</h1>"));
        assert!(html.contains("Thirty kids &amp; counting"));
        assert!(html.contains("Bring a smile"));
        assert!(html.contains("8am to 6pm"));
        assert!(html.contains(r#"<div class="open-on-weekends">"#));
        assert!(!html.contains("dont-open"));
        assert!(html.contains("destination=42.12,-80.08"));
        assert!(html.contains(r#"data-interactive="false""#));
    }

    #[test]
    fn test_closed_on_weekends_variant() {
        let html = DetailScreen::new(orphanage(false, 1)).render(&Config::default());
        assert!(html.contains(r#"<div class="open-on-weekends dont-open">"#));
        assert!(html.contains("closed on weekends"));
    }

    #[test]
    fn test_active_thumbnail_marked() {
        let mut screen = DetailScreen::new(orphanage(true, 3));
        screen.select_image(2);
        let html = screen.render(&Config::default());
        assert!(html.contains(r#"<img src="http://img.local/2.jpg" alt="Sunrise Home" class="active-image" />"#));
        assert!(html.contains(r#"<a href="/orphanages/5?image=2" class="active">"#));
        assert!(html.contains(r#"<a href="/orphanages/5?image=0" class="">"#));
    }

    #[test]
    fn test_no_images_placeholder() {
        let html = DetailScreen::new(orphanage(true, 0)).render(&Config::default());
        assert!(html.contains("No pictures yet"));
    }
}
