//! Query-string parameters shared by controllers.
//!
//! Values are kept as raw text and parsed by the domain filters so malformed input is
//! reported as a validation error with a readable message.

use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQueryParam {
    /// Comma separated `First Last` actor names; a movie matches if it features any of them
    pub actors: Option<String>,
    /// Comma separated genre names; a movie matches if it has any of them
    pub genres: Option<String>,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSessionQueryParam {
    /// Show date in `YYYY-MM-DD` format
    pub date: Option<String>,
    /// Movie id
    pub movie: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParam {
    /// Page number counting from 1 (default: 1)
    pub page: Option<String>,
}
