use axum::{
    extract::{multipart::Field, Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, PageError},
    handlers::AppState,
    models::{CreateQuery, LocationPoint, Notice, SelectedImage},
    screens::{CreateMsg, CreateScreen},
    services::{payload::IMAGES_FIELD, Claim, CreatePayload},
};

const CREATE_PATH: &str = "/orphanages/create";

const SUBMIT_FAILED: &str = "Could not register the orphanage. Please try again.";
const SUBMIT_IN_FLIGHT: &str = "This registration is already being sent. Please wait a moment.";

/// Empty registration form. `?latitude=&longitude=` prefills the position.
pub async fn create_form(
    State(state): State<AppState>,
    Query(query): Query<CreateQuery>,
) -> Result<Html<String>, PageError> {
    let prefill = match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => Some(
            checked_position(latitude, longitude).map_err(|e| PageError::new(e, CREATE_PATH))?,
        ),
        _ => None,
    };

    let token = state.submissions.issue().await;
    let mut screen = CreateScreen::new().with_token(token);
    if let Some(position) = prefill {
        screen.update(CreateMsg::MapClicked(position));
    }

    Ok(Html(screen.render(&state.config)))
}

/// A submitted form, decoded into screen messages
#[derive(Debug, Default)]
pub struct SubmittedForm {
    pub messages: Vec<CreateMsg>,
    pub token: Option<Uuid>,
}

pub async fn read_form(mut multipart: Multipart) -> Result<SubmittedForm, AppError> {
    let mut form = SubmittedForm::default();
    let mut latitude = 0.0;
    let mut longitude = 0.0;
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            IMAGES_FIELD => {
                if let Some(image) = read_image(field).await? {
                    images.push(image);
                }
            }
            "name" => form.messages.push(CreateMsg::SetName(read_text(field).await?)),
            "about" => form.messages.push(CreateMsg::SetAbout(read_text(field).await?)),
            "instructions" => form
                .messages
                .push(CreateMsg::SetInstructions(read_text(field).await?)),
            "opening_hours" => form
                .messages
                .push(CreateMsg::SetOpeningHours(read_text(field).await?)),
            "open_on_weekends" => {
                let open = parse_bool(&read_text(field).await?)?;
                form.messages.push(CreateMsg::SetOpenOnWeekends(open));
            }
            "latitude" => latitude = parse_coordinate(&read_text(field).await?)?,
            "longitude" => longitude = parse_coordinate(&read_text(field).await?)?,
            "submission_token" => {
                let text = read_text(field).await?;
                form.token = Uuid::parse_str(text.trim()).ok();
            }
            other => debug!("Ignoring unexpected form field {}", other),
        }
    }

    form.messages
        .push(CreateMsg::MapClicked(checked_position(latitude, longitude)?));
    form.messages.push(CreateMsg::ImagesSelected(images));
    Ok(form)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

// A file input left empty still posts one part with an empty file name
async fn read_image(field: Field<'_>) -> Result<Option<SelectedImage>, AppError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(SelectedImage::new(file_name, content_type, bytes.to_vec())))
}

fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AppError::BadRequest(format!("invalid open_on_weekends value {:?}", other))),
    }
}

fn parse_coordinate(value: &str) -> Result<f64, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    let coordinate: f64 = value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid coordinate {:?}", value)))?;
    if !coordinate.is_finite() {
        return Err(AppError::BadRequest(format!("invalid coordinate {:?}", value)));
    }
    Ok(coordinate)
}

// NaN, infinities and out-of-range degrees never reach the draft
fn checked_position(latitude: f64, longitude: f64) -> Result<LocationPoint, AppError> {
    let position = LocationPoint::new(latitude, longitude);
    if !latitude.is_finite() || !longitude.is_finite() || !position.is_valid() {
        return Err(AppError::BadRequest(format!(
            "position out of range: {}, {}",
            latitude, longitude
        )));
    }
    Ok(position)
}

/// Forward a submitted form to the locations API
pub async fn create_submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected create form: {}", e);
            return PageError::new(e, CREATE_PATH).into_response();
        }
    };

    let mut screen = match form.token {
        Some(token) => CreateScreen::new().with_token(token),
        None => CreateScreen::new(),
    };
    for msg in form.messages {
        screen.update(msg);
    }

    if state.config.strict_drafts {
        let issues = screen.draft().validate();
        if !issues.is_empty() {
            debug!("Draft rejected with {} issues", issues.len());
            screen.set_errors(issues.iter().map(ToString::to_string).collect());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(screen.render(&state.config)),
            )
                .into_response();
        }
    } else {
        screen.draft_mut().clamp_about();
    }

    if let Some(token) = form.token {
        match state.submissions.claim(&token).await {
            Claim::Accepted => {}
            Claim::InFlight => {
                info!("Submission {} is already being forwarded", token);
                screen.set_errors(vec![SUBMIT_IN_FLIGHT.to_string()]);
                return (StatusCode::CONFLICT, Html(screen.render(&state.config))).into_response();
            }
            Claim::Duplicate => {
                info!("Dropping duplicate submission {}", token);
                return see_other_map(Notice::Duplicate);
            }
            Claim::Unknown => warn!("Submission token {} unknown or expired, forwarding anyway", token),
        }
    }

    let payload = CreatePayload::from_draft(screen.draft());
    match state.api.create(payload).await {
        Ok(()) => {
            if let Some(token) = form.token {
                state.submissions.complete(&token).await;
            }
            info!("Registered orphanage {:?}", screen.draft().name);
            see_other_map(Notice::Created)
        }
        Err(e) => {
            error!("Failed to register orphanage: {}", e);
            if let Some(token) = form.token {
                state.submissions.release(&token).await;
            }
            screen.set_errors(vec![SUBMIT_FAILED.to_string()]);
            (StatusCode::BAD_GATEWAY, Html(screen.render(&state.config))).into_response()
        }
    }
}

fn see_other_map(notice: Notice) -> Response {
    Redirect::to(&format!("/app?notice={}", notice.as_query())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool(" false ").unwrap());
        assert!(parse_bool("yes").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("").unwrap(), 0.0);
        assert_eq!(parse_coordinate("42.5").unwrap(), 42.5);
        assert_eq!(parse_coordinate("-80.08").unwrap(), -80.08);
        assert!(parse_coordinate("north").is_err());
        assert!(parse_coordinate("NaN").is_err());
        assert!(parse_coordinate("inf").is_err());
        assert!(parse_coordinate("-infinity").is_err());
    }

    #[test]
    fn test_checked_position() {
        assert_eq!(checked_position(42.5, -80.25).unwrap(), LocationPoint::new(42.5, -80.25));
        assert_eq!(checked_position(0.0, 0.0).unwrap(), LocationPoint::default());
        assert!(checked_position(f64::NAN, 0.0).is_err());
        assert!(checked_position(0.0, f64::INFINITY).is_err());
        assert!(checked_position(91.0, 0.0).is_err());
        assert!(checked_position(0.0, -180.5).is_err());
    }
}
