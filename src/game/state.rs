use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::notice::{EndNotice, NoticeQueue, TIE_MESSAGE};
use super::win::{self, Run};
use super::{Board, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    /// Report input that arrives after the game ended instead of ignoring it silently.
    pub notify_on_post_game_input: bool,
    /// Delay between the final piece landing and the end-of-game notice.
    pub end_notice_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            notify_on_post_game_input: false,
            end_notice_delay: Duration::from_millis(800),
        }
    }
}

/// Receives state changes from a [`Game`]. Every hook defaults to doing nothing.
pub trait GameObserver {
    fn on_piece_placed(&mut self, _row: usize, _column: usize, _player: Player) {}
    fn on_game_won(&mut self, _player: Player) {}
    fn on_game_tied(&mut self, _message: &str) {}
    fn on_turn_changed(&mut self, _player: Player) {}
    /// Only called when `notify_on_post_game_input` is enabled.
    fn on_input_after_game_end(&mut self) {}
}

/// Observer notifications as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PiecePlaced {
        row: usize,
        column: usize,
        player: Player,
    },
    GameWon(Player),
    GameTied,
    TurnChanged(Player),
    InputAfterGameEnd,
}

/// Records every notification, in order.
impl GameObserver for Vec<GameEvent> {
    fn on_piece_placed(&mut self, row: usize, column: usize, player: Player) {
        self.push(GameEvent::PiecePlaced {
            row,
            column,
            player,
        });
    }

    fn on_game_won(&mut self, player: Player) {
        self.push(GameEvent::GameWon(player));
    }

    fn on_game_tied(&mut self, _message: &str) {
        self.push(GameEvent::GameTied);
    }

    fn on_turn_changed(&mut self, player: Player) {
        self.push(GameEvent::TurnChanged(player));
    }

    fn on_input_after_game_end(&mut self) {
        self.push(GameEvent::InputAfterGameEnd);
    }
}

/// Where an accepted move landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// One game of Connect Four: board, turn and status, mutated only through
/// column selections and `reset`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    settings: GameSettings,
    notices: NoticeQueue,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Game {
            board: Board::new(settings.width, settings.height),
            current_player: Player::One,
            status: GameStatus::InProgress,
            settings,
            notices: NoticeQueue::new(settings.end_notice_delay),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The four cells that decided the game, once someone has won.
    pub fn winning_run(&self) -> Option<Run> {
        match self.status {
            GameStatus::Won(player) => win::winning_run(&self.board, player),
            _ => None,
        }
    }

    /// When the pending end-of-game notice becomes due, if one is scheduled.
    pub fn pending_notice_due(&self) -> Option<Instant> {
        self.notices.due_at()
    }

    /// Handle a column selection using the current time for any end-of-game notice.
    pub fn on_column_selected(
        &mut self,
        column: usize,
        observer: &mut impl GameObserver,
    ) -> Result<Placement, MoveError> {
        self.on_column_selected_at(column, Instant::now(), observer)
    }

    /// Handle a column selection at `now`.
    ///
    /// Rejected selections leave the game untouched. A full column is ignored
    /// silently; input after the game ended is reported only when the policy asks for it.
    pub fn on_column_selected_at(
        &mut self,
        column: usize,
        now: Instant,
        observer: &mut impl GameObserver,
    ) -> Result<Placement, MoveError> {
        let width = self.board.width();
        if column >= width {
            warn!(column, width, "column selection outside the board ignored");
            return Err(MoveError::InvalidColumn { column, width });
        }

        if self.is_terminal() {
            if self.settings.notify_on_post_game_input {
                observer.on_input_after_game_end();
            }
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        observer.on_piece_placed(row, column, player);
        debug!(row, column, player = player.number(), "piece placed");

        // Win is checked before tie: the last piece can do both.
        if win::has_win(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.notices.schedule(EndNotice::Won(player), now);
            debug!(player = player.number(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            self.notices.schedule(EndNotice::Tied, now);
            debug!("game tied");
        } else {
            self.current_player = player.other();
            observer.on_turn_changed(self.current_player);
        }

        Ok(Placement {
            row,
            column,
            player,
        })
    }

    /// Deliver the end-of-game notice if it is due at `now`.
    pub fn dispatch_due(
        &mut self,
        now: Instant,
        observer: &mut impl GameObserver,
    ) -> Option<EndNotice> {
        let notice = self.notices.poll(now)?;
        match notice {
            EndNotice::Won(player) => observer.on_game_won(player),
            EndNotice::Tied => observer.on_game_tied(TIE_MESSAGE),
        }
        Some(notice)
    }

    /// Start a new game with the same settings, cancelling any undelivered notice.
    pub fn reset(&mut self) {
        if self.notices.cancel() {
            debug!("pending end-of-game notice cancelled by reset");
        }
        self.board = Board::new(self.settings.width, self.settings.height);
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
