//! Content catalog request handlers.
//!
//! Provides HTTP handlers for content CRUD, search and genre management.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use uuid::Uuid;
use validator::Validate;

use crate::api::doc::CONTENT_TAG;
use crate::api::dto::{ContentRequest, ContentResponse, ErrorResponse, SearchParams};
use crate::error::AppError;
use crate::state::AppState;

/// Creates content-related routes.
///
/// Routes:
/// - GET /              - List all contents
/// - POST /             - Create a new content
/// - GET /search        - Search contents by title and/or genre
/// - GET /{id}          - Get content by ID
/// - PATCH /{id}        - Update content by ID
/// - DELETE /{id}       - Delete content by ID
/// - POST /{id}/genre   - Add genres to a content
/// - DELETE /{id}/genre - Remove genres from a content
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contents).post(create_content))
        .route("/search", get(search_contents))
        .route(
            "/{id}",
            get(get_content)
                .patch(update_content)
                .delete(delete_content),
        )
        .route("/{id}/genre", post(add_genres).delete(remove_genres))
}

fn validated(payload: ContentRequest) -> Result<ContentRequest, AppError> {
    payload.validate().map_err(|errors| AppError::Validation {
        field: "body".to_string(),
        reason: errors.to_string(),
    })?;
    Ok(payload)
}

/// List every content in the catalog.
///
/// An empty catalog is reported as 404 rather than an empty array.
#[utoipa::path(
    get,
    path = "/api/v1/contents",
    responses(
        (status = 200, description = "Contents found", body = Vec<ContentResponse>),
        (status = 404, description = "Catalog is empty", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn list_contents(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentResponse>>, AppError> {
    let contents = state.services.contents.list().await?;
    if contents.is_empty() {
        return Err(AppError::EmptyCatalog);
    }
    let responses: Vec<ContentResponse> = contents.into_iter().map(ContentResponse::from).collect();
    Ok(Json(responses))
}

/// Search contents by title substring and/or exact genre.
///
/// Filters combine with AND; an empty result set is a valid 200 response.
#[utoipa::path(
    get,
    path = "/api/v1/contents/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching contents", body = Vec<ContentResponse>)
    ),
    tag = CONTENT_TAG
)]
pub async fn search_contents(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ContentResponse>>, AppError> {
    let contents = state
        .services
        .contents
        .search(params.title.as_deref(), params.genre.as_deref())
        .await?;
    let responses: Vec<ContentResponse> = contents.into_iter().map(ContentResponse::from).collect();
    Ok(Json(responses))
}

/// Get a single content by ID.
#[utoipa::path(
    get,
    path = "/api/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content found", body = ContentResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentResponse>, AppError> {
    let content = state.services.contents.get(id).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// Create a new content record.
#[utoipa::path(
    post,
    path = "/api/v1/contents",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Content created", body = ContentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn create_content(
    State(state): State<AppState>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    let fields = validated(payload)?.into_fields();
    let content = state.services.contents.create(fields).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// Replace an existing content record.
///
/// Updates are full-record replacements; the stored genre list becomes
/// exactly the list from the payload.
#[utoipa::path(
    patch,
    path = "/api/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Content updated", body = ContentResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    let fields = validated(payload)?.into_fields();
    let content = state.services.contents.update(id, fields).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// Delete a content record.
///
/// Returns the deleted ID so callers can confirm what was removed.
#[utoipa::path(
    delete,
    path = "/api/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content deleted", body = Uuid),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>, AppError> {
    let deleted = state.services.contents.delete(id).await?;
    Ok(Json(deleted))
}

/// Add genres to a content record.
///
/// Additions are all-or-nothing: if any requested genre already exists
/// (case-insensitively), the whole request is rejected.
#[utoipa::path(
    post,
    path = "/api/v1/contents/{id}/genre",
    params(("id" = Uuid, Path, description = "Content ID")),
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Genres added", body = ContentResponse),
        (status = 400, description = "Duplicate or missing genres", body = ErrorResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<Json<ContentResponse>, AppError> {
    if genres.is_empty() {
        return Err(AppError::Validation {
            field: "genreList".to_string(),
            reason: "At least one genre is required".to_string(),
        });
    }
    let content = state.services.contents.add_genres(id, genres).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// Remove genres from a content record.
///
/// Matching is case-insensitive; a request that matches nothing is an error.
#[utoipa::path(
    delete,
    path = "/api/v1/contents/{id}/genre",
    params(("id" = Uuid, Path, description = "Content ID")),
    request_body = Vec<String>,
    responses(
        (status = 200, description = "Genres removed", body = ContentResponse),
        (status = 400, description = "No genres matched", body = ErrorResponse),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = CONTENT_TAG
)]
pub async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<Json<ContentResponse>, AppError> {
    if genres.is_empty() {
        return Err(AppError::Validation {
            field: "genreList".to_string(),
            reason: "At least one genre is required".to_string(),
        });
    }
    let content = state.services.contents.remove_genres(id, genres).await?;
    Ok(Json(ContentResponse::from(content)))
}
