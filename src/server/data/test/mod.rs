mod genre;
mod movie;
mod movie_session;
mod order;
