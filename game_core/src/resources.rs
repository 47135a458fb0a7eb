/// Host clock for the simulation
///
/// Physics advances one step per frame; the clock only feeds the
/// elapsed-time label and the crazy-mode deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64,         // Host timestamp in milliseconds
    pub frame: u64,       // Physics steps taken
    pub round_start: f64, // When the elapsed-time label last reset
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self {
            now,
            frame: 0,
            round_start: now,
        }
    }

    pub fn advance(&mut self, now: f64) {
        self.now = now;
        self.frame += 1;
    }

    pub fn reset_round(&mut self) {
        self.round_start = self.now;
    }

    /// Whole seconds shown on the timer label
    pub fn round_elapsed_secs(&self) -> u64 {
        ((self.now - self.round_start).max(0.0) / 1000.0).floor() as u64
    }
}

/// One-shot crazy-mode trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct CrazyTimer {
    pub deadline: Option<f64>, // Armed on the first Start
    pub active: bool,
}

impl CrazyTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm once; later calls keep the first deadline
    pub fn arm(&mut self, now: f64, delay_ms: f64) {
        if self.deadline.is_none() {
            self.deadline = Some(now + delay_ms);
        }
    }

    pub fn is_due(&self, now: f64) -> bool {
        !self.active && self.deadline.is_some_and(|d| now >= d)
    }
}

/// Miss tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Balls that got past the right paddle
    pub right: u32, // Balls that got past the left paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub crazy_mode_started: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.crazy_mode_started = false;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}
