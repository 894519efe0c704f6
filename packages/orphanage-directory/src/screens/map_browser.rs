use crate::config::Config;
use crate::models::{LocationPoint, Notice, OrphanageSummary};
use crate::services::location::initial_center;
use crate::views::{escape, json_script, map_container, page};

const MAP_ZOOM: u8 = 12;

/// State of the map page: the fetched pins and where the map opens
#[derive(Debug, Clone)]
pub struct MapBrowser {
    orphanages: Vec<OrphanageSummary>,
    center: LocationPoint,
    notice: Option<Notice>,
}

impl MapBrowser {
    /// Opens on `center` until the browser reports the device position
    pub fn new(orphanages: Vec<OrphanageSummary>, center: LocationPoint) -> Self {
        Self {
            orphanages,
            center,
            notice: None,
        }
    }

    /// Opens on the centroid of the fetched pins instead; keeps the current
    /// center when there is no valid pin
    pub fn centered_on_records(mut self) -> Self {
        self.center = initial_center(self.orphanages.iter().map(OrphanageSummary::position), self.center);
        self
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn orphanages(&self) -> &[OrphanageSummary] {
        &self.orphanages
    }

    pub fn center(&self) -> LocationPoint {
        self.center
    }

    pub fn render(&self, config: &Config) -> String {
        let notice = self
            .notice
            .map(|n| format!(r#"<div class="notice" role="status">{}</div>"#, escape(n.message())))
            .unwrap_or_default();

        // Plain list so every pin stays reachable without the map script
        let links: String = self
            .orphanages
            .iter()
            .map(|o| {
                format!(
                    r#"<li><a href="/orphanages/{}" data-detail>{}</a></li>"#,
                    o.id,
                    escape(&o.name)
                )
            })
            .collect();

        let body = format!(
            r#"{notice}
<aside>
  <header>
    <img src="/static/map-marker.svg" alt="Happy marker logo" />
    <h2>Choose an orphanage from the map</h2>
    <p>Many kids are eagerly waiting your visit! :)</p>
  </header>
  <noscript><ul class="orphanage-list">{links}</ul></noscript>
  <footer>
    <strong>{city}</strong>
    <span>{region}</span>
  </footer>
</aside>
{map}
{data}
<a href="/orphanages/create" class="create-orphanage" aria-label="Register an orphanage">+</a>"#,
            notice = notice,
            links = links,
            city = escape(&config.city),
            region = escape(&config.region),
            map = map_container("orphanages-map", self.center, MAP_ZOOM, &config.tile_url(), true),
            data = json_script("orphanages-data", &self.orphanages),
        );
        page("Happy | Map", "page-map", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, name: &str, latitude: f64, longitude: f64) -> OrphanageSummary {
        OrphanageSummary {
            id,
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_empty_map_centers_on_fallback() {
        let browser = MapBrowser::new(vec![], LocationPoint::default());
        assert_eq!(browser.center(), LocationPoint::new(0.0, 0.0));
        assert!(browser.orphanages().is_empty());

        let browser = MapBrowser::new(vec![], LocationPoint::default()).centered_on_records();
        assert_eq!(browser.center(), LocationPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_records_do_not_move_default_center() {
        let pins = vec![summary(1, "A", 10.0, 20.0), summary(2, "B", 20.0, 40.0)];
        let browser = MapBrowser::new(pins, LocationPoint::default());
        assert_eq!(browser.center(), LocationPoint::new(0.0, 0.0));

        let html = browser.render(&Config::default());
        assert!(html.contains(r#"data-lat="0" data-lng="0""#));
    }

    #[test]
    fn test_centered_on_records() {
        let pins = vec![summary(1, "A", 10.0, 20.0), summary(2, "B", 20.0, 40.0)];
        let center = MapBrowser::new(pins, LocationPoint::default())
            .centered_on_records()
            .center();
        assert!((center.latitude - 15.0).abs() < 1e-9);
        assert!((center.longitude - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_renders_one_pin_per_record() {
        let browser = MapBrowser::new(
            vec![
                summary(1, "Casa <Lar>", 42.1, -80.1),
                summary(2, "Sunrise", 42.2, -80.2),
            ],
            LocationPoint::default(),
        );
        let html = browser.render(&Config::default());

        assert!(html.contains(r#"<a href="/orphanages/1" data-detail>Casa &lt;Lar&gt;</a>"#));
        assert!(html.contains(r#"<a href="/orphanages/2" data-detail>Sunrise</a>"#));
        assert!(html.contains(r#"id="orphanages-data""#));
        assert!(html.contains(r#""id":2"#));
        assert!(html.contains(r#"href="/orphanages/create""#));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_notice_banner() {
        let html = MapBrowser::new(vec![], LocationPoint::default())
            .with_notice(Some(Notice::Created))
            .render(&Config::default());
        assert!(html.contains("Registration complete!"));
    }
}
