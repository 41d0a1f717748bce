use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;
use strum::{Display, EnumString};

use crate::{
    error::ConfigurationError,
    generation::{Generation, TileState},
    pos::Position,
    rule,
};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// How the edges of the board behave when counting neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Topology {
    /// Cells beyond the edge are permanently dead.
    #[default]
    Bounded,

    /// Each edge is adjacent to the opposite one (torus).
    Wrapped,
}

impl Topology {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Topology::Wrapped
        } else {
            Topology::Bounded
        }
    }
}

/// The live board of a run: the current generation plus its cached live cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    current: Generation,
    live_count: usize,
    topology: Topology,
}

impl Board {
    /// Builds a board where exactly the given positions start alive. Duplicates are ignored.
    pub fn new<I>(
        width: usize,
        height: usize,
        topology: Topology,
        live: I,
    ) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = Position>,
    {
        check_dimensions(width, height)?;

        let mut current = Generation::new(width, height);
        let mut live_count = 0;

        for position in live {
            let tile = current
                .tile_mut(position)
                .ok_or(ConfigurationError::OutOfBounds {
                    position,
                    width,
                    height,
                })?;

            if !tile.is_alive() {
                *tile = TileState::Alive;
                live_count += 1;
            }
        }

        debug!("created {width}x{height} {topology} board with {live_count} alive cells");

        Ok(Self {
            current,
            live_count,
            topology,
        })
    }

    /// Builds a board with `alive_cells` cells picked uniformly at random without replacement.
    pub fn new_random<R>(
        width: usize,
        height: usize,
        topology: Topology,
        alive_cells: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError>
    where
        R: Rng,
    {
        let capacity = check_dimensions(width, height)?;
        if alive_cells > capacity {
            return Err(ConfigurationError::OverCapacity {
                requested: alive_cells,
                capacity,
            });
        }

        let mut available_board_positions = (0..width)
            .cartesian_product(0..height)
            .map(|(x, y)| Position { x, y })
            .collect_vec();

        let chosen_positions = (0..alive_cells)
            .map(|_| {
                let chosen_position_index = rng.random_range(0..available_board_positions.len());
                available_board_positions.swap_remove(chosen_position_index)
            })
            .collect_vec();

        Self::new(width, height, topology, chosen_positions)
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Computes the next generation from the current one and makes it current.
    ///
    /// Every cell reads only the previous snapshot, the new tiles go into a separate buffer
    /// which replaces the old one once all of them are known.
    pub fn advance(&mut self) -> &Generation {
        let next_tiles = self
            .current
            .enumerate_tiles()
            .map(|(tile_pos, tile)| rule::next_state(*tile, self.alive_neighbor_count(tile_pos)))
            .collect_vec();

        self.live_count = next_tiles.iter().filter(|tile| tile.is_alive()).count();
        self.current = Generation::with_tiles(self.width(), self.height(), next_tiles);

        trace!("advanced board, {} alive cells", self.live_count);

        &self.current
    }

    /// Number of alive cells among the eight neighbors of `tile_pos` in the current generation.
    pub fn alive_neighbor_count(&self, tile_pos: Position) -> usize {
        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|rel_pos| self.neighbor_pos(tile_pos, *rel_pos))
            .filter(|neighbor_pos| self.current.is_alive(*neighbor_pos))
            .count()
    }

    fn neighbor_pos(&self, tile_pos: Position, rel_pos: [isize; 2]) -> Option<Position> {
        Some(Position {
            x: self.resolve_axis(tile_pos.x, rel_pos[0], self.width())?,
            y: self.resolve_axis(tile_pos.y, rel_pos[1], self.height())?,
        })
    }

    fn resolve_axis(&self, center_pos: usize, offset_pos: isize, len: usize) -> Option<usize> {
        let abs_pos = center_pos as isize + offset_pos;
        let len = len as isize;

        match self.topology {
            Topology::Bounded => (0..len).contains(&abs_pos).then_some(abs_pos as usize),
            Topology::Wrapped => Some(abs_pos.rem_euclid(len) as usize),
        }
    }
}

/// Returns the number of cells on a `width` by `height` board.
fn check_dimensions(width: usize, height: usize) -> Result<usize, ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::EmptyBoard { width, height });
    }

    width
        .checked_mul(height)
        .ok_or(ConfigurationError::TooLarge { width, height })
}
