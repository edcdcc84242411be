use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        actor::{self, ACTOR_TAG},
        cinema_hall::{self, CINEMA_HALL_TAG},
        genre::{self, GENRE_TAG},
        movie::{self, MOVIE_TAG},
        movie_session::{self, MOVIE_SESSION_TAG},
        order::{self, ORDER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cinema API", description = "Cinema catalogue, screenings and ticket orders"),
    tags(
        (name = GENRE_TAG, description = "Movie genres"),
        (name = ACTOR_TAG, description = "Actors"),
        (name = CINEMA_HALL_TAG, description = "Cinema halls and their seat layout"),
        (name = MOVIE_TAG, description = "Movies with filtering by actors, genres and title"),
        (name = MOVIE_SESSION_TAG, description = "Screenings with seat availability"),
        (name = ORDER_TAG, description = "Ticket orders of the authenticated user")
    )
)]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(genre::list_genres, genre::create_genre))
        .routes(routes!(
            genre::get_genre,
            genre::update_genre,
            genre::delete_genre
        ))
        .routes(routes!(actor::list_actors, actor::create_actor))
        .routes(routes!(
            actor::get_actor,
            actor::update_actor,
            actor::delete_actor
        ))
        .routes(routes!(
            cinema_hall::list_cinema_halls,
            cinema_hall::create_cinema_hall
        ))
        .routes(routes!(
            cinema_hall::get_cinema_hall,
            cinema_hall::update_cinema_hall,
            cinema_hall::delete_cinema_hall
        ))
        .routes(routes!(movie::list_movies, movie::create_movie))
        .routes(routes!(
            movie::get_movie,
            movie::update_movie,
            movie::delete_movie
        ))
        .routes(routes!(
            movie_session::list_movie_sessions,
            movie_session::create_movie_session
        ))
        .routes(routes!(
            movie_session::get_movie_session,
            movie_session::update_movie_session,
            movie_session::delete_movie_session
        ))
        .routes(routes!(order::list_orders, order::create_order))
        .routes(routes!(order::get_order))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
