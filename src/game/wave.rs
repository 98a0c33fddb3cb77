use rand::Rng;

use super::entity::Invader;

pub const BASE_WAVE_INTERVAL_MS: u64 = 5000;
pub const WAVE_INTERVAL_STEP_MS: u64 = 500;
pub const MIN_WAVE_INTERVAL_MS: u64 = 1000;

const BASE_INVADERS: u32 = 5;
const INVADERS_PER_WAVE: u32 = 2;

/// Number of invaders added when wave `wave` spawns.
pub fn invader_count(wave: u32) -> usize {
    BASE_INVADERS.saturating_add(wave.saturating_mul(INVADERS_PER_WAVE)) as usize
}

/// Appends a wave's batch along the top row at random columns.
pub fn spawn_wave<R: Rng>(invaders: &mut Vec<Invader>, wave: u32, width: i32, rng: &mut R) -> usize {
    let count = invader_count(wave);
    invaders.reserve(count);
    for _ in 0..count {
        invaders.push(Invader {
            x: random_column(width, rng),
            y: 0.0,
        });
    }
    count
}

pub fn random_column<R: Rng>(width: i32, rng: &mut R) -> i32 {
    if width <= 0 {
        return 0;
    }
    rng.gen_range(0..width)
}

/// Accelerating wave clock. The period is measured from the last spawn, so a
/// late frame delays the next wave instead of releasing several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSchedule {
    pub wave: u32,
    pub interval_ms: u64,
    pub last_wave_ms: u64,
}

impl WaveSchedule {
    pub fn new(now_ms: u64) -> Self {
        WaveSchedule {
            wave: 1,
            interval_ms: BASE_WAVE_INTERVAL_MS,
            last_wave_ms: now_ms,
        }
    }

    /// Advances to the next wave if the interval has elapsed and returns its
    /// number. The caller spawns the batch.
    pub fn poll(&mut self, now_ms: u64) -> Option<u32> {
        if now_ms.saturating_sub(self.last_wave_ms) <= self.interval_ms {
            return None;
        }
        self.last_wave_ms = now_ms;
        self.wave = self.wave.saturating_add(1);
        self.interval_ms = self
            .interval_ms
            .saturating_sub(WAVE_INTERVAL_STEP_MS)
            .max(MIN_WAVE_INTERVAL_MS);
        Some(self.wave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_invader_count_grows_by_two() {
        assert_eq!(invader_count(1), 7);
        assert_eq!(invader_count(2), 9);
        assert_eq!(invader_count(10), 25);
    }

    #[test]
    fn test_poll_waits_for_strictly_more_than_interval() {
        let mut schedule = WaveSchedule::new(0);
        assert_eq!(schedule.poll(5000), None);
        assert_eq!(schedule.poll(5001), Some(2));
        assert_eq!(schedule.last_wave_ms, 5001);
        assert_eq!(schedule.interval_ms, 4500);
    }

    #[test]
    fn test_interval_shrinks_to_floor() {
        let mut schedule = WaveSchedule::new(0);
        let mut now = 0;
        for k in 1..=12u64 {
            now += schedule.interval_ms + 1;
            assert!(schedule.poll(now).is_some());
            assert_eq!(schedule.interval_ms, 5000u64.saturating_sub(500 * k).max(1000));
        }
        assert_eq!(schedule.interval_ms, MIN_WAVE_INTERVAL_MS);
        assert_eq!(schedule.wave, 13);
    }

    #[test]
    fn test_late_frame_spawns_once() {
        let mut schedule = WaveSchedule::new(0);
        assert_eq!(schedule.poll(60_000), Some(2));
        assert_eq!(schedule.poll(60_001), None);
        assert_eq!(schedule.wave, 2);
    }

    #[test]
    fn test_clock_behind_last_wave_does_not_fire() {
        let mut schedule = WaveSchedule::new(10_000);
        assert_eq!(schedule.poll(0), None);
    }

    #[test]
    fn test_spawn_wave_places_batch_on_top_row() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut invaders = Vec::new();
        assert_eq!(spawn_wave(&mut invaders, 3, 12, &mut rng), 11);
        assert_eq!(invaders.len(), 11);
        for invader in &invaders {
            assert!((0..12).contains(&invader.x));
            assert_eq!(invader.y, 0.0);
        }
    }
}
