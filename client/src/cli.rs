use std::path::PathBuf;

use clap::{CommandFactory, Parser, error::ErrorKind};
use libgame::{Board, ConfigurationError, Position, Topology};
use rand::{SeedableRng, rngs::StdRng};
use strum::{Display, EnumString};

use crate::config::PresetTable;

#[derive(Debug, Parser)]
#[command(name = "life", version, about = "Conway's Game of Life")]
pub struct Args {
    /// Initial configuration
    #[arg(long, value_name = "NAME", conflicts_with = "coordinates")]
    pub initial: Option<String>,

    /// Specific coordinates for a custom initial setup
    #[arg(long, value_name = "X,Y", num_args = 1.., value_parser = parse_pair)]
    pub coordinates: Vec<[usize; 2]>,

    /// How the pairs given to --coordinates are read: `xy` (column first) or `rowcol`
    #[arg(long, value_name = "ORDER", default_value_t = AxisOrder::Xy)]
    pub axis_order: AxisOrder,

    /// Dimension of the board's width and height
    #[arg(short = 'd', long = "dimension", value_name = "#", default_value_t = 10)]
    pub dimension: usize,

    /// Board width, overrides --dimension
    #[arg(long, value_name = "#")]
    pub width: Option<usize>,

    /// Board height, overrides --dimension
    #[arg(long, value_name = "#")]
    pub height: Option<usize>,

    /// Number of randomly placed alive cells when no coordinates are given
    #[arg(short, long, value_name = "#", default_value_t = 20)]
    pub cells: usize,

    /// Number of generations to run for
    #[arg(short, long, value_name = "#", default_value_t = 10)]
    pub generations: usize,

    /// Wrap edges of the board
    #[arg(short, long)]
    pub wrap: bool,

    /// Seed for the random initial setup
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with additional presets
    #[arg(long, value_name = "FILE")]
    pub presets: Option<PathBuf>,

    /// Width of the output in columns, probed from the terminal by default
    #[arg(long, value_name = "COLUMNS")]
    pub display_width: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AxisOrder {
    /// `x,y`, column first.
    Xy,

    /// `row,col`.
    RowCol,
}

impl AxisOrder {
    pub fn position(self, pair: [usize; 2]) -> Position {
        match self {
            AxisOrder::Xy => Position::from(pair),
            AxisOrder::RowCol => Position::from_row_col(pair[0], pair[1]),
        }
    }
}

/// A fully resolved initial configuration, ready to build a board from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
    pub cells: InitialCells,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialCells {
    Explicit(Vec<Position>),
    Random { count: usize },
}

impl Setup {
    pub fn build_board(&self, seed: Option<u64>) -> Result<Board, ConfigurationError> {
        match &self.cells {
            InitialCells::Explicit(positions) => Board::new(
                self.width,
                self.height,
                self.topology,
                positions.iter().copied(),
            ),
            InitialCells::Random { count } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };

                Board::new_random(self.width, self.height, self.topology, *count, &mut rng)
            }
        }
    }
}

impl Args {
    /// Checks the arguments against each other and the preset table.
    pub fn resolve(&self, presets: &PresetTable) -> Result<Setup, clap::Error> {
        let topology = Topology::from_wrap(self.wrap);

        if let Some(name) = &self.initial {
            let preset = presets.get(name).ok_or_else(|| {
                let known = presets.names().collect::<Vec<_>>().join(", ");
                usage_error(format!(
                    "Unknown initial configuration '{name}' (available: {known})"
                ))
            })?;

            return Ok(Setup {
                width: preset.width,
                height: preset.height,
                topology,
                cells: InitialCells::Explicit(preset.positions()),
            });
        }

        let width = self.width.unwrap_or(self.dimension);
        let height = self.height.unwrap_or(self.dimension);

        if width == 0 || height == 0 {
            return Err(usage_error(format!(
                "Board dimensions must be positive, got {width}x{height}"
            )));
        }

        let Some(capacity) = width.checked_mul(height) else {
            return Err(usage_error(format!(
                "Board dimensions {width}x{height} are too large"
            )));
        };

        let cells = if self.coordinates.is_empty() {
            if self.cells > capacity {
                return Err(usage_error(
                    "Number of initial cells exceeds maximum board capacity",
                ));
            }

            InitialCells::Random { count: self.cells }
        } else {
            let positions = self
                .coordinates
                .iter()
                .map(|pair| self.axis_order.position(*pair))
                .collect::<Vec<_>>();

            if let Some(position) = positions
                .iter()
                .find(|position| position.x >= width || position.y >= height)
            {
                return Err(usage_error(format!(
                    "Coordinates {position} out of range of board dimensions [{width}x{height}]"
                )));
            }

            InitialCells::Explicit(positions)
        };

        Ok(Setup {
            width,
            height,
            topology,
            cells,
        })
    }
}

fn usage_error(message: impl std::fmt::Display) -> clap::Error {
    Args::command().error(ErrorKind::ValueValidation, message)
}

fn parse_pair(value: &str) -> Result<[usize; 2], String> {
    let (first, second) = value
        .split_once(',')
        .ok_or_else(|| format!("expected a pair like 2,3, got '{value}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };

    Ok([parse(first)?, parse(second)?])
}
