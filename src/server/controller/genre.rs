use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        genre::{GenreDto, GenreInputDto},
    },
    server::{
        error::AppError, model::genre::GenreParams, service::genre::GenreService,
        state::AppState,
    },
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

/// List all genres.
///
/// # Returns
/// - `200 OK` - All genres ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/genres",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved genres", body = Vec<GenreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let genres = GenreService::new(&state.db).get_all().await?;

    let dtos: Vec<GenreDto> = genres.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new genre.
///
/// Genre names are trimmed and must be unique.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Genre name
///
/// # Returns
/// - `201 Created` - Successfully created genre
/// - `400 Bad Request` - Blank or duplicate name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cinema/genres",
    tag = GENRE_TAG,
    request_body = GenreInputDto,
    responses(
        (status = 201, description = "Successfully created genre", body = GenreDto),
        (status = 400, description = "Blank or duplicate genre name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenreInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = GenreParams::try_from(payload)?;
    let genre = GenreService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(genre.into_dto())))
}

/// Get a genre by id.
///
/// # Returns
/// - `200 OK` - The genre
/// - `404 Not Found` - No genre with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved genre", body = GenreDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let genre = GenreService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    Ok((StatusCode::OK, Json(genre.into_dto())))
}

/// Replace a genre's name.
///
/// # Returns
/// - `200 OK` - Updated genre
/// - `400 Bad Request` - Blank name or name used by another genre
/// - `404 Not Found` - No genre with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cinema/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = GenreInputDto,
    responses(
        (status = 200, description = "Successfully updated genre", body = GenreDto),
        (status = 400, description = "Blank or duplicate genre name", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenreInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = GenreParams::try_from(payload)?;
    let genre = GenreService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

    Ok((StatusCode::OK, Json(genre.into_dto())))
}

/// Delete a genre.
///
/// Movies tagged with the genre keep existing without it.
///
/// # Returns
/// - `204 No Content` - Genre deleted
/// - `404 Not Found` - No genre with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cinema/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted genre"),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !GenreService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Genre {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
