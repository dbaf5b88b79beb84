//! HTTP API for checking and solving Sudoku puzzles.
//!
//! A thin Rocket surface over the `sudoku-core` engine: request fields are
//! validated and sanitized here, the engine does the board work, and its
//! results are mapped onto JSON responses and status codes.

#[macro_use]
extern crate rocket;

mod error;
mod routes;
mod validate;

pub use error::ApiError;

use rocket::{Build, Rocket};

/// Build the Rocket application with all routes and catchers mounted.
pub fn rocket() -> Rocket<Build> {
    rocket::build()
        .mount("/api", routes::api_routes())
        .register(
            "/",
            catchers![error::bad_request, error::not_found, error::unprocessable],
        )
}
