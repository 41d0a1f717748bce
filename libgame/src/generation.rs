use std::collections::BTreeSet;

use crate::pos::Position;

/// A frozen snapshot of every cell on the board at one step of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl Generation {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.tile(pos) == Some(&TileState::Alive)
    }

    /// Row-major slices, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks_exact(self.width.max(1))
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    pub fn alive_positions(&self) -> BTreeSet<Position> {
        self.enumerate_tiles()
            .filter(|(_, tile)| **tile == TileState::Alive)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub(crate) fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_row_major() {
        let mut generation = Generation::new(4, 3);
        *generation.tile_mut(Position::new(3, 1)).unwrap() = TileState::Alive;

        assert_eq!(generation.tiles()[7], TileState::Alive);
        assert_eq!(
            generation.rows().nth(1).unwrap(),
            &[
                TileState::Dead,
                TileState::Dead,
                TileState::Dead,
                TileState::Alive
            ]
        );
    }

    #[test]
    fn out_of_range_tiles_are_none() {
        let generation = Generation::new(2, 2);
        assert_eq!(generation.tile(Position::new(2, 0)), None);
        assert_eq!(generation.tile(Position::new(0, 2)), None);
        assert!(!generation.is_alive(Position::new(5, 5)));
    }

    #[test]
    fn alive_positions_lists_only_alive_cells() {
        let mut generation = Generation::new(3, 3);
        *generation.tile_mut(Position::new(0, 2)).unwrap() = TileState::Alive;
        *generation.tile_mut(Position::new(2, 0)).unwrap() = TileState::Alive;

        let alive = generation.alive_positions();
        assert_eq!(alive.len(), 2);
        assert!(alive.contains(&Position::new(0, 2)));
        assert!(alive.contains(&Position::new(2, 0)));
        assert_eq!(generation.count_cells(TileState::Alive), 2);
        assert_eq!(generation.count_cells(TileState::Dead), 7);
    }
}
