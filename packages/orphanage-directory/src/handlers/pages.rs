use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, PageError},
    handlers::AppState,
    models::{DetailQuery, MapQuery},
    screens::{landing, DetailScreen, MapBrowser},
};

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(landing::render(&state.config))
}

/// Map of every orphanage
pub async fn map_browser(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Html<String>, PageError> {
    let orphanages = state
        .api
        .list()
        .await
        .map_err(|e| PageError::new(e, "/app"))?;

    info!("Rendering map with {} orphanages", orphanages.len());

    let mut screen = MapBrowser::new(orphanages, state.config.default_center());
    if state.config.center_on_records {
        screen = screen.centered_on_records();
    }
    let screen = screen.with_notice(query.notice);
    Ok(Html(screen.render(&state.config)))
}

/// Detail page of one orphanage; `?image=i` picks the large gallery image
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, PageError> {
    let retry = format!("/orphanages/{}", id);
    let id: u64 = id
        .parse()
        .map_err(|_| PageError::new(AppError::NotFound, "/app"))?;

    debug!("Fetching orphanage {}", id);

    let orphanage = state
        .api
        .get(id)
        .await
        .map_err(|e| PageError::new(e, retry))?;

    let mut screen = DetailScreen::new(orphanage);
    if let Some(index) = query.image {
        if !screen.select_image(index) {
            debug!("Ignoring out-of-range image {} for orphanage {}", index, id);
        }
    }

    Ok(Html(screen.render(&state.config)))
}
