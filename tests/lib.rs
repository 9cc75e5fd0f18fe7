extern crate sudoku_engine;
use sudoku_engine::{Block, Cell, Col, Difficulty, Digit, Game, Grid, Row};

use rand::rngs::StdRng;
use rand::SeedableRng;

// the first solution backtracking finds on an empty grid, taking cells
// from left to right, top to bottom and digits in ascending order
const CANONICAL: &str =
    "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

fn canonical_grid() -> Grid {
    Grid::from_str_line(CANONICAL).unwrap()
}

#[test]
fn generate_filled_is_canonical() {
    let grid = Grid::generate_filled();
    assert!(grid.is_solved());
    assert_eq!(&*grid.to_str_line(), CANONICAL);
    // no hidden state, a second run gives the same grid
    assert_eq!(grid, Grid::generate_filled());
}

// this test is probabilistic in nature
// if an error occurs, note down the sudoku that it generated
#[test]
fn generate_filled_randomized_correctness() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let grid = Grid::generate_filled_with(&mut rng);
        if !grid.is_solved() {
            panic!(
                "Randomly generated an invalid sudoku. Please save the sudoku for debugging:\n{}",
                grid.to_str_line()
            );
        }
    }
}

#[test]
fn generate_filled_randomized_follows_seed() {
    let grid1 = Grid::generate_filled_with(&mut StdRng::seed_from_u64(42));
    let grid2 = Grid::generate_filled_with(&mut StdRng::seed_from_u64(42));
    assert_eq!(grid1, grid2);
}

#[test]
fn carve_empties_as_many_cells_as_the_difficulty_says() {
    let solution = Grid::generate_filled();
    for &(difficulty, n_cells) in &[
        (Difficulty::Easy, 30),
        (Difficulty::Medium, 40),
        (Difficulty::Hard, 50),
    ] {
        let puzzle = solution.carve(difficulty);
        assert_eq!(puzzle.n_empty(), n_cells);
        assert_eq!(puzzle.n_clues(), 81 - n_cells);
        assert!(puzzle.is_consistent());
        assert!(!puzzle.is_solved());
    }
}

#[test]
fn carve_only_removes_digits() {
    let solution = Grid::generate_filled_with(&mut StdRng::seed_from_u64(7));
    let puzzle = solution.carve_with(Difficulty::Hard, &mut StdRng::seed_from_u64(8));
    for cell in Cell::all() {
        match puzzle.get(cell) {
            None => {}
            Some(digit) => assert_eq!(Some(digit), solution.get(cell)),
        }
    }
}

#[test]
fn carve_leaves_the_solution_untouched() {
    let solution = canonical_grid();
    let _puzzle = solution.carve(Difficulty::Medium);
    assert_eq!(solution, canonical_grid());
    assert!(solution.is_solved());
}

#[test]
fn carve_clamps_to_the_filled_cells() {
    let mut rng = StdRng::seed_from_u64(1);
    let solution = canonical_grid();

    let sparse = solution.carve_cells_with(60, &mut rng);
    assert_eq!(sparse.n_empty(), 60);

    // only 21 clues left, asking for 81 empties them all
    let emptied = sparse.carve_cells_with(81, &mut rng);
    assert_eq!(emptied, Grid::empty());

    // carving an empty grid has nothing left to remove
    assert_eq!(Grid::empty().carve_cells_with(10, &mut rng), Grid::empty());
}

#[test]
fn is_solved_rejects_duplicates_in_rows() {
    let line = format!("11{}", ".".repeat(79));
    let grid = Grid::from_str_line(&line).unwrap();
    assert!(!grid.is_solved());
    assert!(!grid.is_consistent());
}

#[test]
fn is_solved_rejects_swapped_cells() {
    // swapping two digits of a row keeps the row valid
    // but breaks both their columns
    let mut grid = canonical_grid();
    let first = grid.clear(Cell::new(0)).unwrap();
    let second = grid.clear(Cell::new(1)).unwrap();
    grid.set(Cell::new(0), second);
    grid.set(Cell::new(1), first);

    assert!(grid.is_full());
    assert!(!grid.is_solved());
    assert!(!grid.is_consistent());
}

#[test]
fn is_solved_on_partial_grid() {
    let puzzle = canonical_grid().carve(Difficulty::Easy);
    assert!(!puzzle.is_solved());
    assert!(puzzle.is_consistent());
}

#[test]
fn validation_does_not_change_the_grid() {
    let puzzle = canonical_grid().carve_with(Difficulty::Medium, &mut StdRng::seed_from_u64(5));
    let before = puzzle.to_bytes();
    assert_eq!(puzzle.is_solved(), puzzle.is_solved());
    assert_eq!(puzzle.is_consistent(), puzzle.is_consistent());
    assert_eq!(puzzle.to_bytes(), before);
}

#[test]
fn candidates_exclude_row_col_and_block() {
    let mut grid = Grid::empty();
    grid.set(Cell::new(36), Digit::new(7)); // same row as cell 40
    grid.set(Cell::new(4), Digit::new(3)); // same column
    grid.set(Cell::new(30), Digit::new(5)); // same block

    let candidates = grid.candidates(Cell::new(40));
    assert_eq!(candidates.len(), 6);
    for digit in &[7, 3, 5] {
        assert!(!candidates.contains(Digit::new(*digit)));
    }
}

#[test]
fn parse_line_format() {
    // http://norvig.com/sudoku.html
    let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    let grid: Grid = line.parse().unwrap();
    assert_eq!(grid.n_clues(), 32);
    assert_eq!(&*grid.to_str_line(), line);
}

#[test]
fn parse_line_ignores_comments() {
    let line = format!("{} this is a comment", CANONICAL);
    let grid = Grid::from_str_line(&line).unwrap();
    assert_eq!(grid, canonical_grid());
}

#[test]
fn parse_line_errors() {
    use sudoku_engine::parse_errors::LineParseError;

    assert_eq!(
        Grid::from_str_line("123").unwrap_err(),
        LineParseError::NotEnoughCells(3)
    );
    assert_eq!(
        Grid::from_str_line(&"1".repeat(82)).unwrap_err(),
        LineParseError::TooManyCells
    );

    let line = format!("{}x{}", ".".repeat(17), ".".repeat(63));
    match Grid::from_str_line(&line).unwrap_err() {
        LineParseError::InvalidEntry(entry) => {
            assert_eq!((entry.cell, entry.ch), (17, 'x'));
            assert_eq!(
                (entry.row(), entry.col(), entry.block()),
                (Row::new(1), Col::new(8), Block::new(2))
            );
        }
        other => panic!("expected invalid entry, got {:?}", other),
    }
}

#[test]
fn from_bytes_checks_entries() {
    use sudoku_engine::errors::FromBytesSliceError;

    let mut bytes = canonical_grid().to_bytes();
    match Grid::from_bytes_slice(&bytes[..80]).unwrap_err() {
        FromBytesSliceError::WrongLength(len) => assert_eq!(len, 80),
        other => panic!("expected wrong length, got {:?}", other),
    }

    bytes[17] = 10;
    assert!(Grid::from_bytes(bytes).is_err());

    bytes[17] = 9;
    let grid = Grid::from_bytes(bytes).unwrap();
    assert_eq!(grid.to_bytes(), bytes);
}

#[test]
fn display_block_format() {
    let expected = "\
123 456 789
456 789 123
789 123 456

214 365 897
365 897 214
897 214 365

531 642 978
642 978 531
978 531 642";
    assert_eq!(canonical_grid().to_string(), expected);
    assert_eq!(format!("{:?}", canonical_grid()), CANONICAL);
}

#[test]
fn line_wrapper_derefs_to_str() {
    let line = Grid::empty().to_str_line();
    let dereffed_line: &str = &line;
    assert_eq!(dereffed_line, ".".repeat(81));
    println!("{}", line);
}

#[test]
fn game_deals_the_requested_difficulty() {
    let game = Game::with_rng(Difficulty::Hard, &mut StdRng::seed_from_u64(2));
    assert_eq!(game.difficulty(), Some(Difficulty::Hard));
    assert_eq!(game.board().n_empty(), 50);
    assert_eq!(game.board(), game.puzzle());
    assert!(game.board().is_consistent());
    assert!(!game.is_completed());
}

#[test]
fn game_protects_given_cells() {
    let mut game = Game::with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(2));
    let cell = Cell::all()
        .find(|&cell| game.is_given(cell))
        .unwrap();
    let given = game.board().get(cell).unwrap();
    let other = Digit::new(given.get() % 9 + 1);

    assert!(!game.set(cell, other));
    assert_eq!(game.board().get(cell), Some(given));
    assert!(!game.clear(cell));
    assert_eq!(game.board().get(cell), Some(given));
}

#[test]
fn game_completion_follows_the_board() {
    // replay the deal to know the solution of the game
    let mut rng = StdRng::seed_from_u64(3);
    let solution = Grid::generate_filled_with(&mut rng);
    let puzzle = solution.carve_with(Difficulty::Easy, &mut rng);

    let mut game = Game::with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(3));
    assert_eq!(game.puzzle(), &puzzle);

    let open_cells: Vec<Cell> = Cell::all().filter(|&cell| !game.is_given(cell)).collect();
    for (i, &cell) in open_cells.iter().enumerate() {
        let done = game.set(cell, solution.get(cell).unwrap());
        assert_eq!(done, i + 1 == open_cells.len());
    }
    assert!(game.is_completed());
    assert_eq!(game.board(), &solution);

    assert!(!game.clear(open_cells[0]));
    assert!(!game.is_completed());
}

#[test]
fn blank_game_allows_edits_anywhere() {
    let mut game = Game::blank();
    assert_eq!(game.difficulty(), None);
    assert!(Cell::all().all(|cell| !game.is_given(cell)));

    assert!(!game.set(Cell::new(80), Digit::new(5)));
    assert_eq!(game.board().get(Cell::new(80)), Some(Digit::new(5)));

    game.clear_board();
    assert_eq!(game.board(), &Grid::empty());
    assert!(!game.is_completed());
}

#[test]
fn new_game_smoke() {
    let game = Game::new(Difficulty::Easy);
    assert_eq!(game.board().n_empty(), 30);
    assert!(game.board().is_consistent());
}

#[cfg(feature = "serde")]
#[test]
fn serde_line_format() {
    let solution = canonical_grid();
    let json = serde_json::to_string(&solution).unwrap();
    assert_eq!(json, format!("\"{}\"", CANONICAL));
    assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), solution);

    assert_eq!(
        serde_json::from_str::<Difficulty>("\"hard\"").unwrap(),
        Difficulty::Hard
    );
    assert_eq!(
        serde_json::from_str::<Difficulty>("\"anything\"").unwrap(),
        Difficulty::Easy
    );
    assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
}
