//! Error responses and catchers.

use log::warn;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use sudoku_core::ParseGridError;
use thiserror::Error;

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// A request rejected before or after reaching the engine.
///
/// The `Display` string of each variant is the exact message returned on
/// the wire; every variant answers with a 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required field of a check request is absent.
    #[error("Required field(s) missing")]
    MissingFields,
    /// A solve request has no puzzle.
    #[error("Required field missing")]
    MissingPuzzle,
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    #[error("Expected puzzle to be 81 characters long")]
    PuzzleLength,
    #[error("Invalid characters in puzzle")]
    PuzzleCharacters,
    #[error("Invalid value")]
    InvalidValue,
    /// The solver made no progress on the puzzle.
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}

impl From<ParseGridError> for ApiError {
    fn from(err: ParseGridError) -> Self {
        match err {
            ParseGridError::Length(_) => ApiError::PuzzleLength,
            ParseGridError::Character(_) => ApiError::PuzzleCharacters,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        warn!(
            "422 {} {} - {}",
            request.method(),
            request.uri().path(),
            self
        );
        (Status::UnprocessableEntity, Json(ErrorBody::new(self.to_string()))).respond_to(request)
    }
}

/// Unknown route.
#[catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<ErrorBody> {
    warn!("{} {} 404", request.method(), request.uri().path());
    Json(ErrorBody::new("Not Found"))
}

/// Body is not syntactically valid JSON.
#[catch(400)]
pub fn bad_request(request: &Request<'_>) -> Json<ErrorBody> {
    warn!("{} {} 400", request.method(), request.uri().path());
    Json(ErrorBody::new("Bad Request"))
}

/// Body parses as JSON but does not match the request shape.
#[catch(422)]
pub fn unprocessable(request: &Request<'_>) -> Json<ErrorBody> {
    warn!("{} {} 422", request.method(), request.uri().path());
    Json(ErrorBody::new("Unprocessable Entity"))
}
