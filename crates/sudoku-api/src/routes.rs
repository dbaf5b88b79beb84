//! The `/api/check` and `/api/solve` routes.

use log::warn;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::Route;
use serde::Serialize;
use sudoku_core::{check_placement, Conflict, Placement, Solver};

use crate::error::{ApiError, ErrorBody};
use crate::validate::{self, CheckRequest, SolveRequest};

/// Response body of `/api/check`.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<Vec<Conflict>>,
}

/// Response body of a successful `/api/solve`.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub solution: String,
}

/// All routes mounted under `/api`.
pub fn api_routes() -> Vec<Route> {
    routes![
        check,
        solve,
        check_get,
        check_put,
        check_delete,
        check_patch,
        solve_get,
        solve_put,
        solve_delete,
        solve_patch,
    ]
}

/// Check a single placement against the board rules.
#[post("/check", format = "json", data = "<body>")]
fn check(body: Json<CheckRequest>) -> Result<Custom<Json<CheckResponse>>, ApiError> {
    let input = validate::check(body.into_inner())?;

    match check_placement(&input.grid, input.pos, input.value) {
        Placement::Valid => Ok(Custom(
            Status::Ok,
            Json(CheckResponse {
                valid: true,
                conflict: None,
            }),
        )),
        Placement::Invalid(conflicts) => Ok(Custom(
            Status::UnprocessableEntity,
            Json(CheckResponse {
                valid: false,
                conflict: Some(conflicts),
            }),
        )),
    }
}

/// Solve a puzzle.
///
/// Failure is detected by lack of progress: the solver restores every cell
/// it touched when no full solution exists, so an unchanged grid means the
/// puzzle cannot be solved.
#[post("/solve", format = "json", data = "<body>")]
fn solve(body: Json<SolveRequest>) -> Result<Json<SolveResponse>, ApiError> {
    let grid = validate::solve(body.into_inner())?;

    let mut working = grid.clone();
    let _ = Solver::new().solve_in_place(&mut working);

    let solution = working.flatten();
    if solution == grid.flatten() {
        return Err(ApiError::Unsolvable);
    }
    Ok(Json(SolveResponse { solution }))
}

fn method_not_allowed(method: &str, path: &str) -> Custom<Json<ErrorBody>> {
    warn!("{} is not allowed on {}", method, path);
    Custom(
        Status::MethodNotAllowed,
        Json(ErrorBody::new(format!("{} is not allowed on {}", method, path))),
    )
}

// The endpoints answer POST only; everything else gets an explicit 405.

#[get("/check")]
fn check_get() -> Custom<Json<ErrorBody>> {
    method_not_allowed("GET", "/api/check")
}

#[put("/check")]
fn check_put() -> Custom<Json<ErrorBody>> {
    method_not_allowed("PUT", "/api/check")
}

#[delete("/check")]
fn check_delete() -> Custom<Json<ErrorBody>> {
    method_not_allowed("DELETE", "/api/check")
}

#[patch("/check")]
fn check_patch() -> Custom<Json<ErrorBody>> {
    method_not_allowed("PATCH", "/api/check")
}

#[get("/solve")]
fn solve_get() -> Custom<Json<ErrorBody>> {
    method_not_allowed("GET", "/api/solve")
}

#[put("/solve")]
fn solve_put() -> Custom<Json<ErrorBody>> {
    method_not_allowed("PUT", "/api/solve")
}

#[delete("/solve")]
fn solve_delete() -> Custom<Json<ErrorBody>> {
    method_not_allowed("DELETE", "/api/solve")
}

#[patch("/solve")]
fn solve_patch() -> Custom<Json<ErrorBody>> {
    method_not_allowed("PATCH", "/api/solve")
}
