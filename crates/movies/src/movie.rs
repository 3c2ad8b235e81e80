use serde::{Deserialize, Serialize};

use rollcall_core::{DomainError, DomainResult, ValueObject};

use crate::rating::Rating;

/// A movie entry.
///
/// `comments` defaults to empty and `sequel` to absent when missing from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Movie {
    pub title: String,
    pub release_year: i32,
    pub rating: Rating,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequel: Option<String>,
}

impl ValueObject for Movie {}

impl Movie {
    pub fn new(title: impl Into<String>, release_year: i32, rating: Rating) -> Self {
        Self {
            title: title.into(),
            release_year,
            rating,
            comments: Vec::new(),
            sequel: None,
        }
    }

    pub fn with_sequel(mut self, sequel: impl Into<String>) -> Self {
        self.sequel = Some(sequel.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// The stock example entry.
    pub fn sample() -> Self {
        Self::new("Star Wars: A New Hope", 1977, Rating::Five)
    }

    /// Parse a single movie from JSON, validating shape and rating.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        serde_json::from_str(input).map_err(invalid_json)
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(invalid_json)
    }
}

/// Parse a JSON array of movies. Fails on the first invalid entry.
pub fn parse_catalog(input: &str) -> DomainResult<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(input).map_err(invalid_json)?;
    tracing::debug!(count = movies.len(), "movie catalog parsed");
    Ok(movies)
}

fn invalid_json(err: serde_json::Error) -> DomainError {
    DomainError::validation(format!("movie: {err}"))
}
