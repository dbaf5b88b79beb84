//! Basic example of using the Sudoku engine

use sudoku_core::{check_placement, Grid, Placement, Position, Solver};

fn main() {
    let puzzle_string =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    let grid = match Grid::from_string(puzzle_string) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {}", err);
            return;
        }
    };

    println!("Puzzle:");
    println!("{}", grid);

    // Check a placement before solving
    let pos = Position::from_coordinate("A2").unwrap();
    match check_placement(&grid, pos, 3) {
        Placement::Valid => println!("3 fits at A2"),
        Placement::Invalid(conflicts) => println!("3 conflicts at A2: {:?}", conflicts),
    }

    // Solve it
    println!("\nSolving...\n");
    let solver = Solver::new();
    if let Some(solution) = solver.solve(&grid) {
        println!("Solution:");
        println!("{}", solution);
        println!("{}", solution.flatten());
    } else {
        println!("No solution found");
    }
}
