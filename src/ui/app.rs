use crate::config::AppConfig;
use crate::game::{Game, GameObserver, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Turns game notifications into the one-line message under the board.
#[derive(Debug, Default)]
struct StatusLine {
    message: Option<String>,
}

impl GameObserver for StatusLine {
    fn on_game_won(&mut self, player: Player) {
        self.message = Some(format!("{} wins!", player.display_name()));
    }

    fn on_game_tied(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn on_input_after_game_end(&mut self) {
        self.message = Some("Game over! Press 'r' to restart.".to_string());
    }
}

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    status: StatusLine,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game = Game::new(config.game.settings());
        App {
            selected_column: game.board().width() / 2, // Start in middle
            game,
            should_quit: false,
            status: StatusLine::default(),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Deliver the end-of-game message once its delay has passed
    fn tick(&mut self, now: Instant) {
        self.game.dispatch_due(now, &mut self.status);
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.status.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.game.board().width() {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = self.game.board().width() / 2;
                self.status.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column. Rejected drops are reported through the
    /// observer when the game wants them reported, and otherwise ignored.
    fn drop_piece(&mut self) {
        let _ = self
            .game
            .on_column_selected(self.selected_column, &mut self.status);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.status.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus, TIE_MESSAGE};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::default();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game.current_player(), Player::One);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.board().get(5, 3), Cell::Occupied(Player::One));
        assert_eq!(app.game.current_player(), Player::Two);
    }

    #[test]
    fn test_digit_keys_drop_in_that_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column, 0);
        assert_eq!(app.game.board().get(5, 0), Cell::Occupied(Player::One));

        // Column 8 does not exist on a 7-wide board.
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.game.board().piece_count(), 1);
    }

    #[test]
    fn test_win_message_appears_after_delay() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game.status(), GameStatus::Won(Player::One));
        assert_eq!(app.status.message, None);

        let due = app.game.pending_notice_due().unwrap();
        app.tick(due);
        assert_eq!(app.status.message.as_deref(), Some("Red wins!"));
    }

    #[test]
    fn test_tie_message_appears_after_delay() {
        // Fills a 7x6 board without four in a row.
        let keys = "111111222222333333544444455555666666777777".chars();
        let mut app = App::default();
        for key in keys {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game.status(), GameStatus::Tied);
        assert_eq!(app.status.message, None);

        let due = app.game.pending_notice_due().unwrap();
        app.tick(due);
        assert_eq!(app.status.message.as_deref(), Some(TIE_MESSAGE));
        assert_eq!(
            TIE_MESSAGE,
            "Somehow, you've managed a tie. You probably didn't even try to win..."
        );
    }

    #[test]
    fn test_post_game_input_message_follows_policy() {
        let mut config = AppConfig::default();
        config.game.notify_on_post_game_input = true;
        let mut app = App::new(&config);
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.status.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        let mut quiet = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut quiet, KeyCode::Char(key));
        }
        press(&mut quiet, KeyCode::Enter);
        assert_eq!(quiet.status.message, None);
    }

    #[test]
    fn test_restart_cancels_pending_message() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        let due = app.game.pending_notice_due().unwrap();

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.status.message.as_deref(), Some("New game started!"));
        assert_eq!(app.game.status(), GameStatus::InProgress);

        app.tick(due + Duration::from_secs(1));
        assert_eq!(app.status.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_current_player() {
        let mut app = App::default();
        assert!(screen_text(&app).contains("Current Player: Red"));

        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: Blue"));
        assert!(text.contains("\u{25cf}"));
    }
}
