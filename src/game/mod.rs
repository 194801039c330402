//! Core Connect Four game logic: board, player types, win detection, and the
//! turn state machine with its deferred end-of-game notice.

mod board;
pub mod notice;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use notice::{EndNotice, NoticeQueue, TIE_MESSAGE};
pub use player::{PieceColor, Player};
pub use state::{Game, GameEvent, GameObserver, GameSettings, GameStatus, Placement};
pub use win::{has_win, winning_run};
