pub use super::actor::Entity as Actor;
pub use super::cinema_hall::Entity as CinemaHall;
pub use super::genre::Entity as Genre;
pub use super::movie::Entity as Movie;
pub use super::movie_actor::Entity as MovieActor;
pub use super::movie_genre::Entity as MovieGenre;
pub use super::movie_session::Entity as MovieSession;
pub use super::order::Entity as Order;
pub use super::ticket::Entity as Ticket;
pub use super::user::Entity as User;
