use crate::generation::TileState;

/// Neighbor counts that bring a dead cell to life.
pub const BIRTH: &[usize] = &[3];

/// Neighbor counts that keep a live cell alive.
pub const SURVIVE: &[usize] = &[2, 3];

/// B3/S23.
pub fn next_state(tile: TileState, alive_neighbor_count: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbor_count),
        TileState::Dead => BIRTH.contains(&alive_neighbor_count),
    };

    if alive {
        TileState::Alive
    } else {
        TileState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_on_two_or_three() {
        for count in 0..=8 {
            let expected = if count == 2 || count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_state(TileState::Alive, count), expected, "count {count}");
        }
    }

    #[test]
    fn dead_cells_are_born_on_exactly_three() {
        for count in 0..=8 {
            let expected = if count == 3 {
                TileState::Alive
            } else {
                TileState::Dead
            };
            assert_eq!(next_state(TileState::Dead, count), expected, "count {count}");
        }
    }
}
