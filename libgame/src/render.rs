use std::iter;

use itertools::Itertools;

use crate::generation::{Generation, TileState};

pub const ALIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = ' ';

pub const BOARD_CORNER: char = '+';
pub const BOARD_HORIZ: char = '-';
pub const BOARD_VERT: char = '|';

/// Blank columns between two frames on the same row.
pub const FRAME_GAP: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    lines: Vec<String>,
}

impl Frame {
    /// Width of every line in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Width of the frame drawn for a board `board_width` cells wide.
pub fn frame_width(board_width: usize) -> usize {
    board_width + 2
}

pub fn generation_label(index: usize) -> String {
    format!("Gen{index}")
}

/// Renders `generation` as `height + 3` lines that are all `width + 2` characters wide.
///
/// A label wider than the frame is cut off.
pub fn frame(generation: &Generation, label: &str) -> Frame {
    let width = frame_width(generation.width());

    let label: String = label.chars().take(width).collect();
    let title = format!("{label:^width$}");

    let border = format!(
        "{BOARD_CORNER}{}{BOARD_CORNER}",
        iter::repeat_n(BOARD_HORIZ, generation.width()).collect::<String>()
    );

    let rows = generation.rows().map(|row| {
        let cells: String = row
            .iter()
            .map(|tile| match tile {
                TileState::Alive => ALIVE_GLYPH,
                TileState::Dead => DEAD_GLYPH,
            })
            .collect();

        format!("{BOARD_VERT}{cells}{BOARD_VERT}")
    });

    let lines = iter::once(title)
        .chain(iter::once(border.clone()))
        .chain(rows)
        .chain(iter::once(border))
        .collect();

    Frame { width, lines }
}

/// How many frames of `frame_width` fit next to each other on a display `display_width` columns wide.
/// Never less than one.
pub fn frames_per_row(display_width: usize, frame_width: usize) -> usize {
    (display_width / (frame_width + FRAME_GAP)).max(1)
}

/// Lays `frames` out left to right, `frames_per_row` at a time, with a blank line between groups.
pub fn tile(frames: &[Frame], frames_per_row: usize) -> String {
    debug_assert!(
        frames
            .iter()
            .map(|frame| (frame.width(), frame.height()))
            .all_equal(),
        "frames of one run must share their dimensions"
    );

    let gap = " ".repeat(FRAME_GAP);

    frames
        .chunks(frames_per_row.max(1))
        .map(|group| {
            let height = group.first().map_or(0, Frame::height);

            (0..height)
                .map(|line| {
                    let joined = group
                        .iter()
                        .map(|frame| frame.lines[line].as_str())
                        .join(&gap);
                    joined + "\n"
                })
                .collect::<String>()
        })
        .join("\n")
}
