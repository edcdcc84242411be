use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        movie_session::{
            MovieSessionDetailDto, MovieSessionDto, MovieSessionInputDto, MovieSessionListDto,
            MovieSessionRepr,
        },
    },
    server::{
        controller::param::MovieSessionQueryParam,
        error::AppError,
        model::{
            movie_session::{MovieSessionFilter, MovieSessionParams},
            shape::{Action, MOVIE_SESSION_SHAPES},
        },
        service::movie_session::MovieSessionService,
        state::AppState,
    },
};

/// Tag for grouping movie session endpoints in OpenAPI documentation
pub static MOVIE_SESSION_TAG: &str = "movie_session";

/// List movie sessions, optionally filtered by day and movie.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Raw `date` (`YYYY-MM-DD`) and `movie` (id) filters
///
/// # Returns
/// - `200 OK` - Sessions ordered by show time in compact shape
/// - `400 Bad Request` - Malformed date or non-integer movie id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/movie_sessions",
    tag = MOVIE_SESSION_TAG,
    params(MovieSessionQueryParam),
    responses(
        (status = 200, description = "Successfully retrieved movie sessions", body = Vec<MovieSessionListDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_movie_sessions(
    State(state): State<AppState>,
    Query(params): Query<MovieSessionQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SESSION_SHAPES.resolve(Action::List);
    let filter = MovieSessionFilter::parse(params.date, params.movie)?;

    let sessions = MovieSessionService::new(&state.db)
        .get_filtered(&filter)
        .await?;

    let reprs: Vec<MovieSessionRepr> = sessions.into_iter().map(|s| s.into_repr(shape)).collect();

    Ok((StatusCode::OK, Json(reprs)))
}

/// Schedule a movie in a cinema hall.
#[utoipa::path(
    post,
    path = "/api/cinema/movie_sessions",
    tag = MOVIE_SESSION_TAG,
    request_body = MovieSessionInputDto,
    responses(
        (status = 201, description = "Successfully created movie session", body = MovieSessionDto),
        (status = 400, description = "Unknown movie or cinema hall", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_movie_session(
    State(state): State<AppState>,
    Json(payload): Json<MovieSessionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SESSION_SHAPES.resolve(Action::Create);

    let session = MovieSessionService::new(&state.db)
        .create(MovieSessionParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_repr(shape))))
}

/// Get a movie session with its taken places and remaining ticket count.
///
/// # Returns
/// - `200 OK` - Session in detail shape including `tickets_available`
/// - `404 Not Found` - No session with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/movie_sessions/{id}",
    tag = MOVIE_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Movie session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved movie session", body = MovieSessionDetailDto),
        (status = 404, description = "Movie session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SESSION_SHAPES.resolve(Action::Retrieve);

    let session = MovieSessionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie session {} not found", id)))?;

    Ok((StatusCode::OK, Json(session.into_repr(shape))))
}

#[utoipa::path(
    put,
    path = "/api/cinema/movie_sessions/{id}",
    tag = MOVIE_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Movie session ID")
    ),
    request_body = MovieSessionInputDto,
    responses(
        (status = 200, description = "Successfully updated movie session", body = MovieSessionDto),
        (status = 400, description = "Unknown movie or cinema hall, or sold seats do not fit the hall", body = ErrorDto),
        (status = 404, description = "Movie session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MovieSessionInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SESSION_SHAPES.resolve(Action::Update);

    let session = MovieSessionService::new(&state.db)
        .update(id, MovieSessionParams::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie session {} not found", id)))?;

    Ok((StatusCode::OK, Json(session.into_repr(shape))))
}

#[utoipa::path(
    delete,
    path = "/api/cinema/movie_sessions/{id}",
    tag = MOVIE_SESSION_TAG,
    params(
        ("id" = i32, Path, description = "Movie session ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted movie session"),
        (status = 404, description = "Movie session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !MovieSessionService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Movie session {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
