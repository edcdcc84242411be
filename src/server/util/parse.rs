//! Parsers for untyped query-string values.
//!
//! Every parser reports malformed input as a `ValidationError` so handlers answer
//! with 400 Bad Request instead of silently ignoring the filter.

use chrono::NaiveDate;

use crate::server::error::validation::ValidationError;

/// Treats an absent or empty query parameter as "no constraint".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Splits a comma separated list, trimming items and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a `"First Last"` actor token into its two name parts.
///
/// # Returns
/// - `Ok((first_name, last_name))` - Token split into exactly two whitespace separated parts
/// - `Err(ValidationError::MalformedActorName)` - Token has fewer or more than two parts
pub fn parse_actor_name(token: &str) -> Result<(String, String), ValidationError> {
    let mut parts = token.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(first_name), Some(last_name), None) => {
            Ok((first_name.to_string(), last_name.to_string()))
        }
        _ => Err(ValidationError::MalformedActorName(token.to_string())),
    }
}

/// Parses a movie id filter value.
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(ValidationError::InvalidMovieId)` - Value is not an integer
pub fn parse_movie_id(value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidMovieId(value.to_string()))
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(ValidationError::InvalidDate)` - Value is not a valid date in that format
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Parses a one-indexed page number, defaulting to the first page.
///
/// # Returns
/// - `Ok(u64)` - Parsed page, `1` when absent or empty
/// - `Err(ValidationError::InvalidField)` - Value is not a positive integer
pub fn parse_page(value: Option<String>) -> Result<u64, ValidationError> {
    let Some(page) = non_empty(value) else {
        return Ok(1);
    };

    match page.trim().parse::<u64>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ValidationError::InvalidField {
            field: "page",
            reason: "must be a positive integer",
        }),
    }
}
