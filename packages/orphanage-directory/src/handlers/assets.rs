use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::views::assets::{APP_CSS, APP_JS, MAP_MARKER_SVG};

const CACHE_CONTROL: &str = "public, max-age=3600";

pub async fn app_css() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css"), (header::CACHE_CONTROL, CACHE_CONTROL)],
        APP_CSS,
    )
        .into_response()
}

pub async fn app_js() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript"), (header::CACHE_CONTROL, CACHE_CONTROL)],
        APP_JS,
    )
        .into_response()
}

pub async fn map_marker() -> Response {
    (
        [(header::CONTENT_TYPE, "image/svg+xml"), (header::CACHE_CONTROL, CACHE_CONTROL)],
        MAP_MARKER_SVG,
    )
        .into_response()
}
