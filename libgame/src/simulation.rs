use log::{debug, info};

use crate::{board::Board, generation::Generation};

/// Drives a [`Board`] forward, yielding each generation together with its index.
///
/// Generation 0 is the initial configuration. The board is advanced again only while the last
/// generation still had alive cells and fewer than `max_generations` steps were taken.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    max_generations: usize,
    last_index: Option<usize>,
    done: bool,
}

impl Simulation {
    pub fn new(board: Board, max_generations: usize) -> Self {
        Self {
            board,
            max_generations,
            last_index: None,
            done: false,
        }
    }

    /// Runs to completion and keeps every generation.
    pub fn run(board: Board, max_generations: usize) -> Vec<Generation> {
        Self::new(board, max_generations)
            .map(|(_, generation)| generation)
            .collect()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn should_stop(&self, last_index: usize) -> bool {
        if self.board.live_count() == 0 {
            info!("all cells died out in generation {last_index}");
            return true;
        }

        if last_index >= self.max_generations {
            info!("reached the limit of {} generations", self.max_generations);
            return true;
        }

        false
    }
}

impl Iterator for Simulation {
    type Item = (usize, Generation);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let index = match self.last_index {
            None => 0,
            Some(last_index) => {
                if self.should_stop(last_index) {
                    self.done = true;
                    return None;
                }

                self.board.advance();
                last_index + 1
            }
        };

        debug!(
            "generation {index}: {} alive cells",
            self.board.live_count()
        );

        self.last_index = Some(index);
        Some((index, self.board.current().clone()))
    }
}
