//! Server entry point.

#[rocket::launch]
fn rocket() -> _ {
    sudoku_api::rocket()
}
