pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::{MoveOrder, SessionConfig};
pub use error::RejectReason;
pub use game::GameSession;
pub use history::{History, MoveRecord};
pub use rules::{LINES, detect_winner};
pub use types::{GameView, Mark, MoveEntry, Position, WinResult};
pub use wasm::TicTacToe;
