pub use board::{Board, Topology};
pub use error::ConfigurationError;
pub use generation::{Generation, TileState};
pub use pos::Position;
pub use simulation::Simulation;

pub mod board;
pub mod error;
pub mod generation;
pub mod pos;
pub mod render;
pub mod rule;
pub mod simulation;
