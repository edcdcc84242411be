use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        actor::{ActorDto, ActorInputDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, model::actor::ActorParams, service::actor::ActorService,
        state::AppState,
    },
};

/// Tag for grouping actor endpoints in OpenAPI documentation
pub static ACTOR_TAG: &str = "actor";

/// List all actors.
#[utoipa::path(
    get,
    path = "/api/cinema/actors",
    tag = ACTOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved actors", body = Vec<ActorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_actors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let actors = ActorService::new(&state.db).get_all().await?;

    let dtos: Vec<ActorDto> = actors.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new actor.
///
/// Both names must be single words so the actor can be found by the movie `actors` filter.
#[utoipa::path(
    post,
    path = "/api/cinema/actors",
    tag = ACTOR_TAG,
    request_body = ActorInputDto,
    responses(
        (status = 201, description = "Successfully created actor", body = ActorDto),
        (status = 400, description = "Invalid actor name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_actor(
    State(state): State<AppState>,
    Json(payload): Json<ActorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ActorParams::try_from(payload)?;
    let actor = ActorService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(actor.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/cinema/actors/{id}",
    tag = ACTOR_TAG,
    params(
        ("id" = i32, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved actor", body = ActorDto),
        (status = 404, description = "Actor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = ActorService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Actor {} not found", id)))?;

    Ok((StatusCode::OK, Json(actor.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/cinema/actors/{id}",
    tag = ACTOR_TAG,
    params(
        ("id" = i32, Path, description = "Actor ID")
    ),
    request_body = ActorInputDto,
    responses(
        (status = 200, description = "Successfully updated actor", body = ActorDto),
        (status = 400, description = "Invalid actor name", body = ErrorDto),
        (status = 404, description = "Actor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ActorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ActorParams::try_from(payload)?;
    let actor = ActorService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Actor {} not found", id)))?;

    Ok((StatusCode::OK, Json(actor.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/cinema/actors/{id}",
    tag = ACTOR_TAG,
    params(
        ("id" = i32, Path, description = "Actor ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted actor"),
        (status = 404, description = "Actor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !ActorService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Actor {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
