use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::input::direction_for_key;
use crate::game::{GameOverCause, Session, StepOutcome};

/// Shown after a game ends; the simulation stays frozen until a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotice {
    pub score: u32,
    pub cause: GameOverCause,
}

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub notice: Option<GameOverNotice>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            should_quit: false,
            session,
            notice: None,
        }
    }

    pub fn on_tick(&mut self, now_ms: u64) {
        if self.notice.is_some() {
            return;
        }
        if let StepOutcome::GameOver { score, cause } = self.session.step(now_ms) {
            self.notice = Some(GameOverNotice { score, cause });
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now_ms: u64) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any key acknowledges the game over and starts over
        if self.notice.take().is_some() {
            self.session.reset(now_ms);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            code => {
                if let Some(direction) = direction_for_key(code) {
                    self.session.steer(direction);
                }
            }
        }
    }
}
