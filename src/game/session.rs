use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::entity::{Direction, Invader, Pellet, Player};
use super::grid::{Grid, Pos};
use super::wave::{self, WaveSchedule};

pub const PELLET_COUNT: usize = 50;
/// Distance an invader falls per step, in cells.
pub const INVADER_FALL_PER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Invader,
    OwnTrail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Running,
    GameOver { score: u32, cause: GameOverCause },
}

/// All state of one game, from start (or reset) to game over.
pub struct Session {
    grid: Grid,
    rng: ChaCha8Rng,
    player: Player,
    pellets: Vec<Pellet>,
    invaders: Vec<Invader>,
    score: u32,
    waves: WaveSchedule,
}

impl Session {
    pub fn new(grid: Grid, seed: u64, now_ms: u64) -> Self {
        let mut session = Session {
            grid,
            rng: ChaCha8Rng::seed_from_u64(seed),
            player: Player::new(grid.center()),
            pellets: Vec::with_capacity(PELLET_COUNT),
            invaders: Vec::new(),
            score: 0,
            waves: WaveSchedule::new(now_ms),
        };
        session.init_game();
        session
    }

    /// Repopulates pellets and the first batch of invaders for the current
    /// wave. Score, wave clock and player are left alone.
    pub fn init_game(&mut self) {
        self.pellets.clear();
        self.invaders.clear();

        // Positions may repeat; stacked pellets are all eaten together
        for _ in 0..PELLET_COUNT {
            let pos = Pos::new(
                self.rng.gen_range(0..self.grid.width()),
                self.rng.gen_range(0..self.grid.height()),
            );
            self.pellets.push(Pellet { pos });
        }

        self.spawn_wave();
    }

    fn spawn_wave(&mut self) {
        let added = wave::spawn_wave(
            &mut self.invaders,
            self.waves.wave,
            self.grid.width(),
            &mut self.rng,
        );
        log::debug!(
            "wave {} spawned {} invaders ({} total, next in {} ms)",
            self.waves.wave,
            added,
            self.invaders.len(),
            self.waves.interval_ms
        );
    }

    /// Advances the simulation by one frame.
    ///
    /// Game over is reported, not acted on: the session keeps its final state
    /// until [`Session::reset`] is called.
    pub fn step(&mut self, now_ms: u64) -> StepOutcome {
        if self.waves.poll(now_ms).is_some() {
            self.spawn_wave();
        }

        let next = Pos::new(
            self.player.pos.x + self.player.direction.dx,
            self.player.pos.y + self.player.direction.dy,
        );
        self.player.pos = self.grid.wrap(next);
        self.player.push_trail(self.score as usize + 1);

        let head = self.player.pos;
        let before = self.pellets.len();
        self.pellets.retain(|pellet| pellet.pos != head);
        let eaten = before - self.pellets.len();
        if eaten > 0 {
            self.score += eaten as u32;
            log::trace!("ate {} pellet(s) at {:?}, score {}", eaten, head, self.score);
        }

        let height = f64::from(self.grid.height());
        for invader in &mut self.invaders {
            invader.y += INVADER_FALL_PER_STEP;
            if invader.y >= height {
                invader.y = 0.0;
                invader.x = wave::random_column(self.grid.width(), &mut self.rng);
            }
        }

        if self.invaders.iter().any(|invader| invader.touches(head)) {
            return self.game_over(GameOverCause::Invader);
        }
        if self.player.hits_own_trail() {
            return self.game_over(GameOverCause::OwnTrail);
        }
        StepOutcome::Running
    }

    fn game_over(&self, cause: GameOverCause) -> StepOutcome {
        log::info!("game over ({:?}) with score {} on wave {}", cause, self.score, self.waves.wave);
        StepOutcome::GameOver {
            score: self.score,
            cause,
        }
    }

    /// Starts a fresh game on the same grid, with the wave clock running
    /// from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.player.trail.clear();
        self.score = 0;
        self.waves = WaveSchedule::new(now_ms);
        self.init_game();
        self.player.pos = self.grid.center();
        self.player.direction = Direction::NONE;
        log::debug!("session reset at {} ms", now_ms);
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        self.player.steer(direction)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn invaders(&self) -> &[Invader] {
        &self.invaders
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn wave(&self) -> u32 {
        self.waves.wave
    }

    pub fn wave_interval_ms(&self) -> u64 {
        self.waves.interval_ms
    }

    #[cfg(test)]
    pub fn last_wave_ms(&self) -> u64 {
        self.waves.last_wave_ms
    }
}
