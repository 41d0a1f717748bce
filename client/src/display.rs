use crossterm::terminal;
use log::warn;

/// Columns assumed when the terminal can't be queried, e.g. when output is piped.
pub const FALLBACK_DISPLAY_WIDTH: usize = 80;

pub fn display_width(override_width: Option<usize>) -> usize {
    if let Some(width) = override_width {
        return width;
    }

    match terminal::size() {
        Ok((columns, _rows)) => columns as usize,
        Err(e) => {
            warn!("Couldn't query terminal width, assuming {FALLBACK_DISPLAY_WIDTH} columns: {e}");
            FALLBACK_DISPLAY_WIDTH
        }
    }
}
