use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        movie::{MovieDetailDto, MovieDto, MovieInputDto, MovieListDto, MovieRepr},
    },
    server::{
        controller::param::MovieQueryParam,
        error::AppError,
        model::{
            movie::{MovieFilter, MovieParams},
            shape::{Action, MOVIE_SHAPES},
        },
        service::movie::MovieService,
        state::AppState,
    },
};

/// Tag for grouping movie endpoints in OpenAPI documentation
pub static MOVIE_TAG: &str = "movie";

/// List movies, optionally filtered.
///
/// Filters combine with AND. Within `actors` and `genres` any listed value matches.
/// Absent or empty parameters impose no constraint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Raw `actors`, `genres` and `title` filters
///
/// # Returns
/// - `200 OK` - Matching movies in compact shape, each at most once
/// - `400 Bad Request` - An actor token is not a `First Last` pair
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cinema/movies",
    tag = MOVIE_TAG,
    params(MovieQueryParam),
    responses(
        (status = 200, description = "Successfully retrieved movies", body = Vec<MovieListDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SHAPES.resolve(Action::List);
    let filter = MovieFilter::parse(params.actors, params.genres, params.title)?;

    let movies = MovieService::new(&state.db).get_filtered(&filter).await?;

    let reprs: Vec<MovieRepr> = movies.into_iter().map(|m| m.into_repr(shape)).collect();

    Ok((StatusCode::OK, Json(reprs)))
}

/// Create a new movie.
///
/// # Returns
/// - `201 Created` - Movie in writable shape
/// - `400 Bad Request` - Invalid fields or unknown genre/actor id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cinema/movies",
    tag = MOVIE_TAG,
    request_body = MovieInputDto,
    responses(
        (status = 201, description = "Successfully created movie", body = MovieDto),
        (status = 400, description = "Invalid movie data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MovieInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SHAPES.resolve(Action::Create);
    let params = MovieParams::try_from(payload)?;

    let movie = MovieService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(movie.into_repr(shape))))
}

/// Get a movie with nested genres and actors.
#[utoipa::path(
    get,
    path = "/api/cinema/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved movie", body = MovieDetailDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SHAPES.resolve(Action::Retrieve);

    let movie = MovieService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;

    Ok((StatusCode::OK, Json(movie.into_repr(shape))))
}

/// Replace a movie and its genre and actor sets.
#[utoipa::path(
    put,
    path = "/api/cinema/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = MovieInputDto,
    responses(
        (status = 200, description = "Successfully updated movie", body = MovieDto),
        (status = 400, description = "Invalid movie data", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MovieInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let shape = MOVIE_SHAPES.resolve(Action::Update);
    let params = MovieParams::try_from(payload)?;

    let movie = MovieService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;

    Ok((StatusCode::OK, Json(movie.into_repr(shape))))
}

/// Delete a movie together with its sessions and their tickets.
#[utoipa::path(
    delete,
    path = "/api/cinema/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted movie"),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !MovieService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Movie {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
