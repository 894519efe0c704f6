use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::services::ApiError;
use crate::views::{escape, page, sidebar};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Page not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Api(ApiError::NotFound) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Text shown to the visitor. Error details stay in the log.
    fn user_message(&self) -> &'static str {
        match self {
            AppError::Api(ApiError::NotFound) | AppError::NotFound => {
                "The page you are looking for does not exist or was removed."
            }
            AppError::Api(_) => "The locations service did not answer. Please try again in a moment.",
            AppError::BadRequest(_) => "The submitted data could not be read. Please check the form and try again.",
        }
    }

    fn title(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "We couldn't find this orphanage",
            StatusCode::BAD_REQUEST => "Something is wrong with this request",
            _ => "The orphanage list is unavailable right now",
        }
    }
}

/// Error screen with a retry link pointing back at the failed page
pub fn render_error(err: &AppError, retry_href: &str) -> String {
    let body = format!(
        r#"{sidebar}
<main>
  <div class="error-panel">
    <h1>{title}</h1>
    <p>{detail}</p>
    <p><a href="{retry}">Try again</a> or <a href="/app">go back to the map</a>.</p>
  </div>
</main>"#,
        sidebar = sidebar(),
        title = escape(err.title()),
        detail = escape(err.user_message()),
        retry = escape(retry_href),
    );
    page("Happy", "page-error", &body)
}

/// Error paired with the page it happened on, used as handler return type
#[derive(Debug)]
pub struct PageError {
    pub error: AppError,
    pub retry_href: String,
}

impl PageError {
    pub fn new(error: impl Into<AppError>, retry_href: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            retry_href: retry_href.into(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            error!("Request for {} failed: {}", self.retry_href, self.error);
        } else {
            debug!("Request for {} answered {}: {}", self.retry_href, status, self.error);
        }
        (status, Html(render_error(&self.error, &self.retry_href))).into_response()
    }
}
