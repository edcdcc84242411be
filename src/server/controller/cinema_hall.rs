use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cinema_hall::{CinemaHallDto, CinemaHallInputDto},
    },
    server::{
        error::AppError, model::cinema_hall::CinemaHallParams,
        service::cinema_hall::CinemaHallService, state::AppState,
    },
};

/// Tag for grouping cinema hall endpoints in OpenAPI documentation
pub static CINEMA_HALL_TAG: &str = "cinema_hall";

/// List all cinema halls with their capacity.
#[utoipa::path(
    get,
    path = "/api/cinema/cinema_halls",
    tag = CINEMA_HALL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cinema halls", body = Vec<CinemaHallDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cinema_halls(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let halls = CinemaHallService::new(&state.db).get_all().await?;

    let dtos: Vec<CinemaHallDto> = halls.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new cinema hall.
///
/// # Returns
/// - `201 Created` - Successfully created hall
/// - `400 Bad Request` - Blank name or non-positive layout
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cinema/cinema_halls",
    tag = CINEMA_HALL_TAG,
    request_body = CinemaHallInputDto,
    responses(
        (status = 201, description = "Successfully created cinema hall", body = CinemaHallDto),
        (status = 400, description = "Invalid cinema hall data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cinema_hall(
    State(state): State<AppState>,
    Json(payload): Json<CinemaHallInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CinemaHallParams::try_from(payload)?;
    let hall = CinemaHallService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(hall.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/cinema/cinema_halls/{id}",
    tag = CINEMA_HALL_TAG,
    params(
        ("id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cinema hall", body = CinemaHallDto),
        (status = 404, description = "Cinema hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hall = CinemaHallService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cinema hall {} not found", id)))?;

    Ok((StatusCode::OK, Json(hall.into_dto())))
}

/// Replace a cinema hall's name and layout.
///
/// Tickets already sold keep their row and seat even if the new layout no longer contains them.
#[utoipa::path(
    put,
    path = "/api/cinema/cinema_halls/{id}",
    tag = CINEMA_HALL_TAG,
    params(
        ("id" = i32, Path, description = "Cinema hall ID")
    ),
    request_body = CinemaHallInputDto,
    responses(
        (status = 200, description = "Successfully updated cinema hall", body = CinemaHallDto),
        (status = 400, description = "Invalid cinema hall data or layout would drop sold seats", body = ErrorDto),
        (status = 404, description = "Cinema hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CinemaHallInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CinemaHallParams::try_from(payload)?;
    let hall = CinemaHallService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cinema hall {} not found", id)))?;

    Ok((StatusCode::OK, Json(hall.into_dto())))
}

/// Delete a cinema hall together with its sessions and their tickets.
#[utoipa::path(
    delete,
    path = "/api/cinema/cinema_halls/{id}",
    tag = CINEMA_HALL_TAG,
    params(
        ("id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted cinema hall"),
        (status = 404, description = "Cinema hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !CinemaHallService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Cinema hall {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
