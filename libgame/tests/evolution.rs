use std::collections::BTreeSet;

use libgame::{
    Board, Generation, Position, Simulation, TileState, Topology,
    render::{self, generation_label},
};
use rand::{SeedableRng, rngs::StdRng};

fn row_col(cells: &[(usize, usize)]) -> BTreeSet<Position> {
    cells
        .iter()
        .map(|&(row, col)| Position::from_row_col(row, col))
        .collect()
}

fn step_naive(previous: &Generation, topology: Topology) -> BTreeSet<Position> {
    let width = previous.width() as isize;
    let height = previous.height() as isize;
    let mut next = BTreeSet::new();

    for y in 0..height {
        for x in 0..width {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }

                    let (mut nx, mut ny) = (x + dx, y + dy);
                    if topology == Topology::Wrapped {
                        nx = (nx + width) % width;
                        ny = (ny + height) % height;
                    }
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue;
                    }

                    if previous.is_alive(Position::new(nx as usize, ny as usize)) {
                        neighbors += 1;
                    }
                }
            }

            let pos = Position::new(x as usize, y as usize);
            let next_alive = if previous.is_alive(pos) {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert(pos);
            }
        }
    }

    next
}

#[test]
fn live_count_matches_distinct_positions() {
    let cells = row_col(&[(0, 0), (3, 4), (2, 2), (0, 0)]);
    let board = Board::new(5, 4, Topology::Bounded, cells.iter().copied()).unwrap();
    assert_eq!(board.live_count(), cells.len());
}

#[test]
fn advance_matches_naive_recomputation() {
    for (seed, topology) in [
        (1, Topology::Bounded),
        (2, Topology::Wrapped),
        (3, Topology::Bounded),
        (4, Topology::Wrapped),
    ] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new_random(13, 9, topology, 45, &mut rng).unwrap();
        assert_matches_naive(&mut board, topology, seed);
    }
}

#[test]
fn narrow_wrapped_boards_match_naive_recomputation() {
    for (seed, width, height, alive_cells) in
        [(5, 1, 7, 4), (6, 2, 5, 6), (7, 6, 2, 7), (8, 1, 1, 1)]
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board =
            Board::new_random(width, height, Topology::Wrapped, alive_cells, &mut rng).unwrap();
        assert_matches_naive(&mut board, Topology::Wrapped, seed);
    }
}

fn assert_matches_naive(board: &mut Board, topology: Topology, seed: u64) {
    for step in 0..12 {
        let previous = board.current().clone();
        let expected = step_naive(&previous, topology);

        let next = board.advance();
        assert_eq!(next.alive_positions(), expected, "seed {seed} step {step}");
        assert_eq!(board.live_count(), expected.len());
        assert_eq!(board.live_count(), board.current().count_cells(TileState::Alive));
    }
}

#[test]
fn wrapped_glider_returns_after_crossing_the_board() {
    let glider = row_col(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let mut board = Board::new(6, 6, Topology::Wrapped, glider.iter().copied()).unwrap();
    let initial = board.current().clone();

    // A glider moves one cell diagonally every four generations.
    for _ in 0..24 {
        board.advance();
    }

    assert_eq!(board.current(), &initial);
    assert_eq!(board.live_count(), 5);
}

#[test]
fn vertical_blinker_oscillates() {
    let initial = row_col(&[(1, 2), (2, 2), (3, 2)]);
    let board = Board::new(5, 5, Topology::Bounded, initial.iter().copied()).unwrap();

    let generations = Simulation::run(board, 2);
    assert_eq!(generations.len(), 3);

    assert_eq!(generations[0].alive_positions(), initial);
    assert_eq!(
        generations[1].alive_positions(),
        row_col(&[(2, 1), (2, 2), (2, 3)])
    );
    assert_eq!(generations[2].alive_positions(), initial);
}

#[test]
fn rendered_history_of_blinker() {
    let initial = row_col(&[(1, 2), (2, 2), (3, 2)]);
    let board = Board::new(5, 5, Topology::Bounded, initial).unwrap();

    let frames: Vec<_> = Simulation::new(board, 2)
        .map(|(index, generation)| render::frame(&generation, &generation_label(index)))
        .collect();

    let text = render::tile(&frames, 2);

    let expected = concat!(
        " Gen0      Gen1  \n",
        "+-----+   +-----+\n",
        "|     |   |     |\n",
        "|  #  |   |     |\n",
        "|  #  |   | ### |\n",
        "|  #  |   |     |\n",
        "|     |   |     |\n",
        "+-----+   +-----+\n",
        "\n",
        " Gen2  \n",
        "+-----+\n",
        "|     |\n",
        "|  #  |\n",
        "|  #  |\n",
        "|  #  |\n",
        "|     |\n",
        "+-----+\n",
    );
    assert_eq!(text, expected);
}
