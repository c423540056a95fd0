pub mod logger;

mod game_state;
mod grid;
mod rng;
mod session;
mod settings;
mod snake;
mod timer;
mod types;

pub use game_state::GameState;
pub use grid::Grid;
pub use rng::GameRng;
pub use session::{FrameInput, GameSession, TimerIntervals};
pub use settings::GameSettings;
pub use snake::Snake;
pub use timer::{DifficultyCurve, DifficultyTimer};
pub use types::{CellKind, Collision, Direction, FieldSize, Layout, Point};
