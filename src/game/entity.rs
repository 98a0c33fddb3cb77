use std::collections::VecDeque;

use super::grid::Pos;

/// Unit heading of the player, or standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    pub fn reversed(self) -> Direction {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

pub struct Player {
    pub pos: Pos,
    pub direction: Direction,
    /// Previously occupied cells, most recent first.
    pub trail: VecDeque<Pos>,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Player {
            pos,
            direction: Direction::NONE,
            trail: VecDeque::new(),
        }
    }

    /// Applies a requested heading unless it points straight back.
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if self.direction != Direction::NONE && requested == self.direction.reversed() {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Records the current position at the head of the trail and trims the
    /// tail down to `max_len`.
    pub fn push_trail(&mut self, max_len: usize) {
        self.trail.push_front(self.pos);
        while self.trail.len() > max_len {
            self.trail.pop_back();
        }
    }

    /// True if the current position overlaps the trail behind the head entry.
    pub fn hits_own_trail(&self) -> bool {
        self.trail.iter().skip(1).any(|&segment| segment == self.pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pellet {
    pub pos: Pos,
}

/// Falling enemy. `x` is a whole column, `y` descends in sub-cell steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invader {
    pub x: i32,
    pub y: f64,
}

impl Invader {
    /// Contact test against a player cell: closer than one cell on both axes.
    pub fn touches(&self, pos: Pos) -> bool {
        (f64::from(self.x) - f64::from(pos.x)).abs() < 1.0
            && (self.y - f64::from(pos.y)).abs() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steer_rejects_reversal() {
        let mut player = Player::new(Pos::new(5, 5));
        assert!(player.steer(Direction::DOWN));
        assert!(!player.steer(Direction::UP));
        assert_eq!(player.direction, Direction::DOWN);
        assert!(player.steer(Direction::LEFT));
        assert!(!player.steer(Direction::RIGHT));
        assert_eq!(player.direction, Direction::LEFT);
    }

    #[test]
    fn test_steer_from_rest_accepts_anything() {
        for dir in [Direction::UP, Direction::DOWN, Direction::LEFT, Direction::RIGHT] {
            let mut player = Player::new(Pos::new(0, 0));
            assert!(player.steer(dir));
            assert_eq!(player.direction, dir);
        }
    }

    #[test]
    fn test_push_trail_caps_length() {
        let mut player = Player::new(Pos::new(0, 0));
        for x in 0..5 {
            player.pos = Pos::new(x, 0);
            player.push_trail(3);
        }
        let trail: Vec<Pos> = player.trail.iter().copied().collect();
        assert_eq!(trail, vec![Pos::new(4, 0), Pos::new(3, 0), Pos::new(2, 0)]);
    }

    #[test]
    fn test_own_trail_ignores_head_entry() {
        let mut player = Player::new(Pos::new(1, 1));
        player.trail = VecDeque::from(vec![Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)]);
        assert!(!player.hits_own_trail());

        player.trail = VecDeque::from(vec![Pos::new(1, 1), Pos::new(2, 1), Pos::new(1, 1)]);
        assert!(player.hits_own_trail());
    }

    #[test]
    fn test_invader_contact_threshold() {
        let pos = Pos::new(4, 6);
        assert!(Invader { x: 4, y: 6.0 }.touches(pos));
        assert!(Invader { x: 4, y: 5.1 }.touches(pos));
        assert!(Invader { x: 4, y: 6.9 }.touches(pos));
        assert!(!Invader { x: 4, y: 5.0 }.touches(pos));
        assert!(!Invader { x: 4, y: 7.0 }.touches(pos));
        assert!(!Invader { x: 5, y: 6.0 }.touches(pos));
    }
}
