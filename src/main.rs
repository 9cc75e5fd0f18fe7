extern crate sudoku_engine;
use sudoku_engine::{Difficulty, Grid};

fn main() {
    env_logger::init();
    let difficulty = std::env::args()
        .nth(1)
        .map(|tag| Difficulty::from_tag(&tag))
        .unwrap_or_default();

    let mut rng = rand::thread_rng();
    let solution = Grid::generate_filled_with(&mut rng);
    let puzzle = solution.carve_with(difficulty, &mut rng);

    println!("{} puzzle, {} clues\n", difficulty, puzzle.n_clues());
    println!("{}\n", puzzle);
    println!("{}", puzzle.to_str_line());
}
