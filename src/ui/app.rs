use crate::ai::{Agent, OpponentKind};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, CENTER_COL, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct App {
    config: AppConfig,
    game_state: GameState,
    opponent: Box<dyn Agent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// When the computer should play its pending move.
    computer_due: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let opponent = config.game.opponent.build(config.search.depth);
        let mut app = App {
            game_state: GameState::initial(Player::Human),
            opponent,
            selected_column: CENTER_COL,
            should_quit: false,
            message: None,
            computer_due: None,
            config,
        };
        app.start_game(Instant::now());
        app
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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

            self.tick(Instant::now());
            self.handle_events()?;
        }
        Ok(())
    }

    fn start_game(&mut self, now: Instant) {
        let first = self.config.game.first_player.pick(&mut rand::rng());
        self.game_state = GameState::initial(first);
        self.selected_column = CENTER_COL;
        self.computer_due = None;
        info!(first = first.name(), opponent = self.opponent.name(), "new game");
        if first == Player::Computer {
            self.schedule_computer(now);
        }
    }

    fn schedule_computer(&mut self, now: Instant) {
        self.computer_due = Some(now + Duration::from_millis(self.config.game.ai_delay_ms));
    }

    /// Let the computer move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.computer_due.is_some_and(|due| now >= due) {
            self.computer_due = None;
            self.computer_move();
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move(now);
            }
            KeyCode::Char('r') => {
                self.start_game(now);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn human_move(&mut self, now: Instant) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.game_state.current_player() != Player::Human {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(row) => {
                info!(column = self.selected_column, row, "human move");
                self.message = None;
                if !self.announce_outcome() {
                    self.schedule_computer(now);
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn computer_move(&mut self) {
        let Some(column) = self.opponent.select_action(&self.game_state) else {
            warn!("computer has no legal move");
            return;
        };
        match self.game_state.apply_move_mut(column) {
            Ok(row) => {
                info!(column, row, "computer move");
                if !self.announce_outcome() {
                    self.selected_column = column;
                }
            }
            Err(e) => warn!(column, error = %e, "computer picked an unplayable column"),
        }
    }

    /// Set the end-of-game banner. Returns true if the game just ended.
    fn announce_outcome(&mut self) -> bool {
        let Some(outcome) = self.game_state.outcome() else {
            return false;
        };
        info!(?outcome, "game over");
        self.message = Some(match outcome {
            GameOutcome::Winner(Player::Human) => "You win!".to_string(),
            GameOutcome::Winner(Player::Computer) => "Computer wins!".to_string(),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
        true
    }

    fn opponent_label(&self) -> String {
        match self.config.game.opponent {
            OpponentKind::Minimax => {
                format!("{} (depth {})", self.opponent.name(), self.config.search.depth)
            }
            OpponentKind::Greedy | OpponentKind::Random => self.opponent.name().to_string(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.opponent_label(),
        );
    }
}
