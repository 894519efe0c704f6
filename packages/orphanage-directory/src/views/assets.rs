//! Static assets bundled into the binary.

pub const APP_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; outline: 0; }
body { color: #fff; background: #ebf2f5; font: 600 18px Nunito, sans-serif; }
a { color: inherit; }
.hidden { display: none !important; }

#page-landing { width: 100vw; height: 100vh; display: flex; justify-content: center; align-items: center;
  background: linear-gradient(329.54deg, #29b6d1 0%, #00c7c7 100%); }
#page-landing .content-wrapper { position: relative; width: 100%; max-width: 1100px; height: 100%; max-height: 680px;
  display: flex; align-items: flex-start; flex-direction: column; justify-content: space-between; }
#page-landing main h1 { font-size: 76px; font-weight: 900; line-height: 70px; max-width: 350px; }
#page-landing main p { margin-top: 40px; font-size: 24px; line-height: 34px; max-width: 350px; }
#page-landing .location { position: absolute; right: 0; top: 0; display: flex; flex-direction: column; text-align: right; }
#page-landing .enter-app { position: absolute; right: 0; bottom: 0; width: 80px; height: 80px; background: #ffd666;
  border-radius: 30px; display: flex; align-items: center; justify-content: center; font-size: 32px; text-decoration: none; color: rgba(0,0,0,.6); }

#page-map { width: 100vw; height: 100vh; position: relative; display: flex; }
#page-map aside { width: 440px; background: linear-gradient(329.54deg, #29b6d1 0%, #00c7c7 100%); padding: 80px;
  display: flex; flex-direction: column; justify-content: space-between; }
#page-map aside h2 { font-size: 40px; font-weight: 800; line-height: 42px; margin-top: 64px; }
#page-map aside footer { display: flex; flex-direction: column; }
#page-map .map { flex: 1; height: 100%; }
#page-map .create-orphanage { position: absolute; right: 40px; bottom: 40px; z-index: 10; width: 64px; height: 64px;
  background: #15c3d6; border-radius: 20px; display: flex; justify-content: center; align-items: center;
  font-size: 32px; text-decoration: none; }
.notice { position: absolute; top: 24px; left: 50%; transform: translateX(-50%); z-index: 20; padding: 16px 32px;
  border-radius: 20px; background: #37c77f; }
.map-popup .leaflet-popup-content-wrapper { background: rgba(255,255,255,.8); border-radius: 20px; box-shadow: none; }
.map-popup .leaflet-popup-content { color: #0089a5; font-size: 20px; font-weight: bold; margin: 8px 12px;
  display: flex; justify-content: space-between; align-items: center; }
.map-popup .leaflet-popup-content a { width: 40px; height: 40px; background: #15c3d6; border-radius: 12px; color: #fff;
  display: flex; justify-content: center; align-items: center; text-decoration: none; }

.app-sidebar { position: fixed; height: 100%; padding: 32px 24px; background: linear-gradient(329.54deg, #15b6d6 0%, #15d6d6 100%);
  display: flex; flex-direction: column; justify-content: space-between; align-items: center; }
.app-sidebar .back-button { width: 48px; height: 48px; border: 0; background: #12afcb; border-radius: 16px; color: #fff; cursor: pointer; }

#page-orphanage main, #page-create-orphanage main, #page-error main { flex: 1; }
#page-orphanage, #page-create-orphanage, #page-error { display: flex; min-height: 100vh; }
.orphanage-details, .create-orphanage-form, .error-panel { width: 700px; margin: 64px auto; background: #fff;
  border: 1px solid #d3e2e5; border-radius: 20px; overflow: hidden; color: #5c8599; }
.orphanage-details > img { width: 100%; height: 300px; object-fit: cover; }
.orphanage-details .images { display: grid; grid-template-columns: repeat(6, 1fr); column-gap: 16px; margin: 16px 40px 0; }
.orphanage-details .images a { border: 0; height: 88px; overflow: hidden; opacity: .6; border-radius: 20px; }
.orphanage-details .images a.active { opacity: 1; }
.orphanage-details .images img { width: 100%; height: 88px; object-fit: cover; }
.orphanage-details .no-images { height: 300px; display: flex; align-items: center; justify-content: center; background: #f5f8fa; }
.orphanage-details-content { padding: 80px; }
.orphanage-details-content h1 { color: #4d6f80; font-size: 54px; line-height: 54px; margin-bottom: 8px; }
.orphanage-details-content .map-container { margin-top: 64px; background: #e6f7fb; border: 1px solid #b3dae2; border-radius: 20px; }
.orphanage-details-content .map-container .map { height: 280px; border-radius: 20px; }
.orphanage-details-content .map-container footer { padding: 20px 0; text-align: center; }
.orphanage-details-content .map-container footer a { color: #0089a5; text-decoration: none; }
.orphanage-details-content hr { width: 100%; height: 1px; border: 0; background: #d3e2e5; margin: 64px 0; }
.open-details { margin-top: 24px; display: grid; grid-template-columns: 1fr 1fr; column-gap: 20px; }
.open-details div { padding: 32px 24px; border-radius: 20px; line-height: 28px; }
.open-details div.hour { background: linear-gradient(149.97deg, #e6f7fb 8.13%, #fff 92.67%); border: 1px solid #b3dae2; color: #5c8599; }
.open-details div.open-on-weekends { background: linear-gradient(154.16deg, #edfff6 7.85%, #fff 91.03%); border: 1px solid #a1e9c5; color: #37c77f; }
.open-details div.open-on-weekends.dont-open { background: linear-gradient(154.16deg, #fdf0f5 7.85%, #fff 91.03%); border: 1px solid #ffbcd4; color: #ff669d; }

.create-orphanage-form { padding: 64px 80px; }
.create-orphanage-form fieldset { border: 0; }
.create-orphanage-form fieldset + fieldset { margin-top: 80px; }
.create-orphanage-form legend { width: 100%; font-size: 32px; line-height: 34px; color: #5c8599; font-weight: 700;
  border-bottom: 1px solid #d3e2e5; margin-bottom: 40px; padding-bottom: 24px; }
.create-orphanage-form .map { height: 280px; border-radius: 20px; margin-bottom: 40px; }
.create-orphanage-form .input-block + .input-block { margin-top: 24px; }
.create-orphanage-form .input-block label { display: flex; color: #8fa7b3; margin-bottom: 8px; line-height: 24px; }
.create-orphanage-form .input-block label span { font-size: 14px; color: #8fa7b3; margin-left: 24px; line-height: 24px; }
.create-orphanage-form .input-block input, .create-orphanage-form .input-block textarea { width: 100%;
  background: #f5f8fa; border: 1px solid #d3e2e5; border-radius: 20px; outline: none; color: #5c8599; }
.create-orphanage-form .input-block input { height: 64px; padding: 0 16px; }
.create-orphanage-form .input-block textarea { min-height: 120px; max-height: 240px; resize: vertical; padding: 16px; line-height: 28px; }
.create-orphanage-form .images-container { display: grid; grid-template-columns: repeat(5, 1fr); grid-gap: 16px; }
.create-orphanage-form .images-container img { width: 100%; height: 96px; object-fit: cover; border-radius: 20px; }
.create-orphanage-form .images-container .new-image { height: 96px; background: #f5f8fa; border: 1px dashed #96d2f0;
  border-radius: 20px; cursor: pointer; display: flex; justify-content: center; align-items: center; font-size: 24px; color: #15b6d6; }
.create-orphanage-form input[type=file] { display: none; }
.create-orphanage-form .button-select { display: grid; grid-template-columns: 1fr 1fr; }
.create-orphanage-form .button-select label { height: 64px; background: #f5f8fa; border: 1px solid #d3e2e5; color: #5c8599;
  cursor: pointer; display: flex; align-items: center; justify-content: center; margin: 0; }
.create-orphanage-form .button-select label.active { background: #edfff6; border: 1px solid #a1e9c5; color: #37c77f; }
.create-orphanage-form .button-select input { display: none; }
.create-orphanage-form .errors { background: #fdf0f5; border: 1px solid #ffbcd4; color: #ff669d; border-radius: 20px;
  padding: 16px 24px; margin-bottom: 40px; list-style: none; }
.create-orphanage-form .confirm-button, .create-orphanage-form .cancel-button { margin-top: 32px; width: 100%; height: 64px;
  border: 0; cursor: pointer; border-radius: 20px; color: #fff; font-weight: 800; display: flex; justify-content: center;
  align-items: center; text-decoration: none; }
.create-orphanage-form .confirm-button { background: #3cdc8c; }
.create-orphanage-form .confirm-button:disabled { opacity: .6; cursor: progress; }
.create-orphanage-form .cancel-button { background: #ff669d; }

.error-panel { padding: 64px 80px; }
.error-panel h1 { color: #4d6f80; margin-bottom: 24px; }
.error-panel a { color: #0089a5; }

body.loading::after { content: "Loading..."; position: fixed; inset: 0; display: flex; align-items: center;
  justify-content: center; background: rgba(235,242,245,.85); color: #5c8599; z-index: 1000; }
"#;

pub const APP_JS: &str = r##"
(function () {
  "use strict";

  var active = true;
  window.addEventListener("pagehide", function () { active = false; });
  window.addEventListener("pageshow", function () {
    active = true;
    document.body.classList.remove("loading");
  });

  var markerIcon = window.L && L.icon({
    iconUrl: "/static/map-marker.svg",
    iconSize: [58, 68],
    iconAnchor: [29, 68],
    popupAnchor: [170, 2]
  });

  function readJson(id) {
    var el = document.getElementById(id);
    return el ? JSON.parse(el.textContent) : null;
  }

  function buildMap(el) {
    var interactive = el.dataset.interactive === "true";
    var map = L.map(el, {
      center: [parseFloat(el.dataset.lat), parseFloat(el.dataset.lng)],
      zoom: parseInt(el.dataset.zoom, 10),
      dragging: interactive,
      touchZoom: interactive,
      zoomControl: interactive,
      scrollWheelZoom: interactive,
      doubleClickZoom: interactive
    });
    L.tileLayer(el.dataset.tiles).addTo(map);
    return map;
  }

  function centerOnDevice(map) {
    if (!("geolocation" in navigator)) {
      console.log("geolocation not available");
      return;
    }
    navigator.geolocation.getCurrentPosition(
      function (position) {
        if (!active) { return; }
        map.setView([position.coords.latitude, position.coords.longitude]);
      },
      function (error) { console.log("geolocation failed: " + error.message); }
    );
  }

  function setupBrowser(el) {
    var map = buildMap(el);
    (readJson("orphanages-data") || []).forEach(function (o) {
      var popup = document.createElement("div");
      popup.textContent = o.name;
      var link = document.createElement("a");
      link.href = "/orphanages/" + o.id;
      link.setAttribute("data-detail", "");
      link.innerHTML = "&rarr;";
      popup.appendChild(link);
      L.marker([o.latitude, o.longitude], { icon: markerIcon })
        .bindPopup(popup, { closeButton: false, minWidth: 240, maxWidth: 240, className: "map-popup" })
        .addTo(map);
    });
    centerOnDevice(map);
  }

  function setupDetail(el) {
    var map = buildMap(el);
    L.marker([parseFloat(el.dataset.lat), parseFloat(el.dataset.lng)], { icon: markerIcon, interactive: false }).addTo(map);
  }

  function setupCreate(el) {
    var map = buildMap(el);
    var lat = document.getElementById("latitude");
    var lng = document.getElementById("longitude");
    var marker = null;

    function place(latitude, longitude) {
      if (marker) {
        marker.setLatLng([latitude, longitude]);
      } else {
        marker = L.marker([latitude, longitude], { icon: markerIcon, interactive: false }).addTo(map);
      }
    }

    if (parseFloat(lat.value) !== 0 || parseFloat(lng.value) !== 0) {
      place(parseFloat(lat.value), parseFloat(lng.value));
    } else {
      centerOnDevice(map);
    }

    map.on("click", function (event) {
      // Panned copies of the world report longitudes past 180
      var latlng = event.latlng.wrap();
      lat.value = latlng.lat;
      lng.value = latlng.lng;
      place(latlng.lat, latlng.lng);
    });
  }

  function setupImagePicker() {
    var input = document.getElementById("image[]");
    var container = document.getElementById("image-previews");
    if (!input || !container) { return; }
    var urls = [];
    input.addEventListener("change", function () {
      if (!input.files) { return; }
      urls.forEach(function (url) { URL.revokeObjectURL(url); });
      urls = Array.prototype.map.call(input.files, function (file) { return URL.createObjectURL(file); });
      container.innerHTML = "";
      urls.forEach(function (url) {
        var img = document.createElement("img");
        img.src = url;
        container.appendChild(img);
      });
    });
  }

  function setupWeekendToggle() {
    var labels = document.querySelectorAll(".button-select label");
    Array.prototype.forEach.call(labels, function (label) {
      label.addEventListener("click", function () {
        Array.prototype.forEach.call(labels, function (other) { other.classList.remove("active"); });
        label.classList.add("active");
      });
    });
  }

  function setupSubmit() {
    var form = document.querySelector(".create-orphanage-form");
    if (!form) { return; }
    form.addEventListener("submit", function () {
      var button = form.querySelector(".confirm-button");
      button.disabled = true;
      button.textContent = "Sending...";
    });
  }

  document.addEventListener("click", function (event) {
    var link = event.target.closest && event.target.closest("a[data-detail]");
    if (link) { document.body.classList.add("loading"); }
  });

  var browser = document.querySelector("#page-map .map");
  if (browser) { setupBrowser(browser); }
  var detail = document.querySelector("#page-orphanage .map");
  if (detail) { setupDetail(detail); }
  var create = document.querySelector("#page-create-orphanage .map");
  if (create) { setupCreate(create); }
  setupImagePicker();
  setupWeekendToggle();
  setupSubmit();
})();
"##;

pub const MAP_MARKER_SVG: &str = r##"<svg width="58" height="68" viewBox="0 0 58 68" fill="none" xmlns="http://www.w3.org/2000/svg">
<path d="M29 0C12.984 0 0 12.984 0 29c0 21.75 29 39 29 39s29-17.25 29-39C58 12.984 45.016 0 29 0z" fill="#FFD152"/>
<circle cx="29" cy="28" r="12" fill="#fff"/>
<path d="M23 30c1.5 3 3.5 4 6 4s4.5-1 6-4" stroke="#12AFCB" stroke-width="2.5" stroke-linecap="round"/>
</svg>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets_every_map_page() {
        assert!(APP_JS.contains(r##"document.querySelector("#page-map .map")"##));
        assert!(APP_JS.contains(r##"document.querySelector("#page-orphanage .map")"##));
        assert!(APP_JS.contains(r##""#page-create-orphanage .map""##));
        assert!(APP_JS.trim_end().ends_with("})();"));
    }

    #[test]
    fn test_marker_and_styles_are_complete() {
        assert!(APP_CSS.contains(".map"));
        assert!(MAP_MARKER_SVG.trim_end().ends_with("</svg>"));
    }
}
