//! Website handlers: analyze, list, update description, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{AnalyzeRequest, MessageResponse, UpdateDescriptionRequest};
use crate::app_state::AppState;
use crate::domain::{AnalyzedWebsite, WebsiteId};
use crate::error::{ApiError, ErrorResponse};

/// Body of a successful delete.
pub const DELETED_MESSAGE: &str = "Data deleted";

/// `POST /api/analyze`: Scrape a website and store the result.
///
/// # Errors
///
/// Returns [`ApiError`] on a bad body or URL (400), or a scraper or
/// datastore failure (500).
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "Websites",
    summary = "Analyze a website",
    description = "Runs the external scraper against the URL and stores the extracted brand name and description. The request waits for the scraper to finish.",
    request_body = AnalyzeRequest,
    responses(
        (status = 201, description = "Website analyzed and stored", body = AnalyzedWebsite),
        (status = 400, description = "Missing or malformed URL", body = ErrorResponse),
        (status = 500, description = "Scraper or datastore failure", body = ErrorResponse),
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(reject_body)?;
    let record = state.website_service.analyze(req.url.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/data`: List every stored website, newest first.
///
/// # Errors
///
/// Returns [`ApiError::Dependency`] on datastore failure.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "Websites",
    summary = "List analyzed websites",
    description = "Returns all stored websites ordered by timestamp, newest first. No pagination or server-side filtering.",
    responses(
        (status = 200, description = "All stored websites", body = Vec<AnalyzedWebsite>),
        (status = 500, description = "Datastore failure", body = ErrorResponse),
    )
)]
pub async fn list_websites(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state.website_service.list().await?;
    Ok(Json(records))
}

/// `PUT /api/nurdd/{id}`: Replace a website's description.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the id has no row, or
/// [`ApiError::Validation`] for a bad id or body.
#[utoipa::path(
    put,
    path = "/api/nurdd/{id}",
    tag = "Websites",
    summary = "Update description",
    description = "Replaces the description of one stored website. URL, brand name and timestamp are never changed.",
    params(
        ("id" = i64, Path, description = "Website id"),
    ),
    request_body = UpdateDescriptionRequest,
    responses(
        (status = 200, description = "Updated website", body = AnalyzedWebsite),
        (status = 400, description = "Invalid id or missing description", body = ErrorResponse),
        (status = 404, description = "Website not found", body = ErrorResponse),
        (status = 500, description = "Datastore failure", body = ErrorResponse),
    )
)]
pub async fn update_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDescriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(reject_body)?;
    let updated = state
        .website_service
        .update_description(id, req.description.as_deref())
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/nurdd/{id}`: Permanently delete a website.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the id has no row.
#[utoipa::path(
    delete,
    path = "/api/nurdd/{id}",
    tag = "Websites",
    summary = "Delete a website",
    description = "Removes one stored website. Deletion is immediate and permanent.",
    params(
        ("id" = i64, Path, description = "Website id"),
    ),
    responses(
        (status = 200, description = "Website deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Website not found", body = ErrorResponse),
        (status = 500, description = "Datastore failure", body = ErrorResponse),
    )
)]
pub async fn delete_website(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.website_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

/// Website routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/data", get(list_websites))
        .route("/nurdd/{id}", put(update_description).delete(delete_website))
}

fn parse_id(raw: &str) -> Result<WebsiteId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("invalid website id: {raw}")))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(format!("invalid request body: {}", rejection.body_text()))
}
