use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_accel: f32,
    pub paddle_friction: f32,
    pub paddle_max_speed: f32,
    pub ball_radius: f32,
    pub serve_slope: f32,
    pub speed_presets: [f32; 4],
    pub crazy_delay_ms: f64,
    pub crazy_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_accel: Params::PADDLE_ACCEL,
            paddle_friction: Params::PADDLE_FRICTION,
            paddle_max_speed: Params::PADDLE_MAX_SPEED,
            ball_radius: Params::BALL_RADIUS,
            serve_slope: Params::SERVE_SLOPE,
            speed_presets: Params::SPEED_PRESETS,
            crazy_delay_ms: Params::CRAZY_DELAY_MS,
            crazy_speed: Params::CRAZY_SPEED,
        }
    }
}

/// Why a configuration override was rejected
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::Invalid("field must have positive size"));
        }
        if self.paddle_height <= 0.0 || self.paddle_height > self.field_height {
            return Err(ConfigError::Invalid("paddle must fit inside the field"));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.field_width {
            return Err(ConfigError::Invalid("paddles overlap"));
        }
        if !(0.0..=1.0).contains(&self.paddle_friction) {
            return Err(ConfigError::Invalid("friction must be within 0..=1"));
        }
        if self.paddle_max_speed <= 0.0 || self.ball_radius <= 0.0 {
            return Err(ConfigError::Invalid("speeds and radius must be positive"));
        }
        if self.speed_presets.iter().any(|s| *s <= 0.0) || self.crazy_speed <= 0.0 {
            return Err(ConfigError::Invalid("ball speeds must be positive"));
        }
        Ok(())
    }

    /// Get X of the paddle's left edge based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_margin // Left paddle
        } else {
            self.field_width - self.paddle_margin - self.paddle_width // Right paddle
        }
    }

    /// X of the face the ball bounces off
    pub fn paddle_face_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_margin + self.paddle_width
        } else {
            self.field_width - self.paddle_margin - self.paddle_width
        }
    }

    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp paddle top edge to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle top edge that centres it vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
