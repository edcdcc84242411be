use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Genre, Actor};
///
/// let test = TestBuilder::new()
///     .with_table(Genre)
///     .with_table(Actor)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the movie catalogue tables.
    ///
    /// Adds in dependency order:
    /// - Genre
    /// - Actor
    /// - Movie
    /// - MovieGenre
    /// - MovieActor
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_movie_tables(self) -> Self {
        self.with_table(Genre)
            .with_table(Actor)
            .with_table(Movie)
            .with_table(MovieGenre)
            .with_table(MovieActor)
    }

    /// Adds every table of the cinema schema.
    ///
    /// Includes the movie catalogue tables plus CinemaHall, MovieSession, User, Order
    /// and Ticket. Use this for session, availability and order tests.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_cinema_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_cinema_tables(self) -> Self {
        self.with_movie_tables()
            .with_table(CinemaHall)
            .with_table(MovieSession)
            .with_table(User)
            .with_table(Order)
            .with_table(Ticket)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
