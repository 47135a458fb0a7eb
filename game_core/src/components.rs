use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // Top edge (clamped to field)
    pub vy: f32,       // Vertical velocity, units per frame
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self {
            player_id,
            y,
            vy: 0.0,
        }
    }

    /// Vertical interval covered by the paddle, exclusive at both ends
    pub fn covers(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to the field centre, serving in a random diagonal
    pub fn reset(&mut self, config: &Config, speed: f32, rng: &mut GameRng) {
        self.pos = config.center();

        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = serve_velocity(config, speed, sx, sy);
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Rescale velocity to `speed`, keeping its heading
    pub fn set_speed(&mut self, speed: f32) {
        self.vel = rescale(self.vel, speed);
    }
}

/// Serve velocity along `(sx, sy * slope)` with magnitude `speed`
pub fn serve_velocity(config: &Config, speed: f32, sx: f32, sy: f32) -> Vec2 {
    let angle = (sy * config.serve_slope).atan2(sx);
    Vec2::new(angle.cos(), angle.sin()) * speed
}

/// Angle-preserving rescale. A zero vector keeps heading 0 (to the right).
pub fn rescale(vel: Vec2, speed: f32) -> Vec2 {
    let angle = vel.y.atan2(vel.x);
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = none, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(up: bool, down: bool) -> Self {
        Self {
            dir: down as i8 - up as i8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_preserves_angle() {
        let vel = Vec2::new(2.0, 1.2);
        let scaled = rescale(vel, 7.0);
        assert!((scaled.length() - 7.0).abs() < 1e-5);
        assert!((scaled.y.atan2(scaled.x) - vel.y.atan2(vel.x)).abs() < 1e-6);
    }

    #[test]
    fn test_rescale_zero_vector_points_right() {
        let scaled = rescale(Vec2::ZERO, 4.0);
        assert_eq!(scaled, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_reset_centres_ball_at_preset_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 100.0), Vec2::new(-2.0, 1.0));

        ball.reset(&config, 4.0, &mut rng);

        assert_eq!(ball.pos, Vec2::new(450.0, 300.0));
        assert!((ball.speed() - 4.0).abs() < 1e-5);
        let slope = (ball.vel.y / ball.vel.x).abs();
        assert!((slope - config.serve_slope).abs() < 1e-5);
    }

    #[test]
    fn test_intent_from_keys() {
        assert_eq!(PaddleIntent::from_keys(true, false).dir, -1);
        assert_eq!(PaddleIntent::from_keys(false, true).dir, 1);
        assert_eq!(PaddleIntent::from_keys(true, true).dir, 0);
        assert_eq!(PaddleIntent::from_keys(false, false).dir, 0);
    }

    #[test]
    fn test_paddle_covers_is_exclusive() {
        let paddle = Paddle::new(0, 100.0);
        assert!(paddle.covers(150.0, 100.0));
        assert!(!paddle.covers(100.0, 100.0));
        assert!(!paddle.covers(200.0, 100.0));
    }
}
