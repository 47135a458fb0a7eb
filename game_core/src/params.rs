/// Game tuning parameters for Crazy Pong
///
/// Distances are in canvas units, velocities in units per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between field edge and paddle
    pub const PADDLE_ACCEL: f32 = 1.2;
    pub const PADDLE_FRICTION: f32 = 0.85;
    pub const PADDLE_MAX_SPEED: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const SERVE_SLOPE: f32 = 0.6; // |vy / vx| of a fresh serve

    // Speed presets (Slow, Normal, Fast, Insane)
    pub const SPEED_PRESETS: [f32; 4] = [1.0, 2.0, 4.0, 7.0];

    // Crazy mode
    pub const CRAZY_DELAY_MS: f64 = 20_000.0;
    pub const CRAZY_SPEED: f32 = 6.0;

    // HUD
    pub const TIMER_FONT: &'static str = "32px Arial";
    pub const TIMER_Y: f32 = 40.0;
}
