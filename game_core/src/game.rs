//! Local two-player game: state, controls and the frame loop

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, draw_frame, rescale, serve_velocity, step, Ball, Config, CrazyTimer,
    Events, GameRng, Key, KeyState, LoopAction, LoopFsm, LoopState, Paddle, Score, SpeedPreset,
    Surface, Time, TransitionResult,
};

/// Everything one game needs, owned in one place
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub keys: KeyState,
    fsm: LoopFsm,
    speed: SpeedPreset,
    crazy: CrazyTimer,
    saved_vel: Vec2,
    ball: Entity,
    paddles: [Entity; 2],
}

impl Game {
    pub fn new(config: Config, seed: u64, now: f64) -> Self {
        let mut world = World::new();
        let speed = SpeedPreset::default();

        let spawn_y = config.paddle_spawn_y();
        let paddles = [
            create_paddle(&mut world, 0, spawn_y),
            create_paddle(&mut world, 1, spawn_y),
        ];

        // First serve goes right and down
        let vel = serve_velocity(&config, speed.magnitude(&config), 1.0, 1.0);
        let ball = create_ball(&mut world, config.center(), vel);

        Self {
            world,
            time: Time::new(now),
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            keys: KeyState::new(),
            fsm: LoopFsm::new(),
            speed,
            crazy: CrazyTimer::new(),
            saved_vel: Vec2::ZERO,
            ball,
            paddles,
        }
    }

    pub fn state(&self) -> LoopState {
        self.fsm.state()
    }

    pub fn speed(&self) -> SpeedPreset {
        self.speed
    }

    pub fn crazy_mode(&self) -> bool {
        self.crazy.active
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.config.center(), Vec2::ZERO))
    }

    pub fn paddle(&self, player_id: u8) -> Paddle {
        let entity = self.paddles[usize::from(player_id.min(1))];
        self.world
            .get::<&Paddle>(entity)
            .map(|p| *p)
            .unwrap_or_else(|_| Paddle::new(player_id, self.config.paddle_spawn_y()))
    }

    fn set_ball_vel(&mut self, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.vel = vel;
        }
    }

    fn log_rejected(result: &TransitionResult) {
        if !result.success {
            log::warn!(
                "Ignoring {:?} while {:?}",
                result.action,
                result.from_state
            );
        }
    }

    /// Start the loop and arm the crazy-mode timer
    pub fn start(&mut self, now: f64) -> TransitionResult {
        let result = self.fsm.transition(LoopAction::Start);
        Self::log_rejected(&result);
        if result.success {
            self.time.now = now;
            self.time.reset_round();
            self.crazy.arm(now, self.config.crazy_delay_ms);
            log::info!("Game started at {} speed", self.speed.as_str());
        }
        result
    }

    /// Freeze the ball, remembering its velocity
    pub fn pause(&mut self) -> TransitionResult {
        let result = self.fsm.transition(LoopAction::Pause);
        Self::log_rejected(&result);
        if result.success {
            self.saved_vel = self.ball().vel;
            self.set_ball_vel(Vec2::ZERO);
            log::info!("Game paused");
        }
        result
    }

    /// Restore the saved velocity and keep looping
    pub fn resume(&mut self) -> TransitionResult {
        let result = self.fsm.transition(LoopAction::Resume);
        Self::log_rejected(&result);
        if result.success {
            self.set_ball_vel(self.saved_vel);
            log::info!("Game resumed");
        }
        result
    }

    /// Switch preset, rescaling the ball while keeping its heading
    pub fn set_speed(&mut self, preset: SpeedPreset) {
        self.speed = preset;
        let magnitude = preset.magnitude(&self.config);
        if self.fsm.is_paused() {
            // The frozen ball has no heading; rescale what Resume will restore
            self.saved_vel = rescale(self.saved_vel, magnitude);
        } else if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.set_speed(magnitude);
        }
        log::debug!("Ball speed set to {} ({})", preset.as_str(), magnitude);
    }

    /// Dropdown entry point; unknown indices are ignored
    pub fn set_speed_index(&mut self, index: usize) -> bool {
        match SpeedPreset::from_index(index) {
            Some(preset) => {
                self.set_speed(preset);
                true
            }
            None => {
                log::warn!("Ignoring unknown speed preset index {}", index);
                false
            }
        }
    }

    /// Record a key press by its `KeyboardEvent.key` name
    ///
    /// Returns whether the key belongs to the game.
    pub fn key_down(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.keys.key_down(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.keys.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Run one frame if the loop is running
    ///
    /// Returns whether the host should schedule another frame.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.fsm.is_running() {
            return false;
        }

        let input = self.keys.snapshot();
        step(
            &mut self.world,
            &mut self.time,
            now,
            &self.config,
            &input,
            self.speed,
            &mut self.crazy,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        true
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.world, &self.time, &self.config, surface);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_stopped_and_centred() {
        let game = Game::default();
        assert_eq!(game.state(), LoopState::Stopped);
        assert_eq!(game.speed(), SpeedPreset::Normal);
        assert_eq!(game.ball().pos, Vec2::new(450.0, 300.0));
        assert_eq!(game.paddle(0).y, 250.0);
        assert_eq!(game.paddle(1).y, 250.0);
        assert!(!game.crazy_mode());
    }

    #[test]
    fn test_tick_only_runs_when_started() {
        let mut game = Game::default();
        let before = game.ball().pos;
        assert!(!game.tick(16.0));
        assert_eq!(game.ball().pos, before);

        game.start(0.0);
        assert!(game.tick(16.0));
        assert_ne!(game.ball().pos, before);
        assert_eq!(game.time.frame, 1);
    }

    #[test]
    fn test_pause_freezes_and_resume_restores_exactly() {
        let mut game = Game::default();
        game.start(0.0);
        for i in 1..=10 {
            game.tick(i as f64 * 16.0);
        }
        let vel = game.ball().vel;
        let pos = game.ball().pos;

        assert!(game.pause().success);
        assert_eq!(game.ball().vel, Vec2::ZERO);
        assert!(!game.tick(500.0));
        assert_eq!(game.ball().pos, pos);

        assert!(game.resume().success);
        assert_eq!(game.ball().vel.x.to_bits(), vel.x.to_bits());
        assert_eq!(game.ball().vel.y.to_bits(), vel.y.to_bits());
    }

    #[test]
    fn test_speed_change_while_paused_applies_on_resume() {
        let mut game = Game::default();
        game.start(0.0);
        let heading = game.ball().vel.normalize();
        game.pause();

        game.set_speed(SpeedPreset::Insane);
        assert_eq!(game.ball().vel, Vec2::ZERO, "Ball stays frozen");

        game.resume();
        let vel = game.ball().vel;
        assert!((vel.length() - 7.0).abs() < 1e-5);
        assert!((vel.normalize() - heading).length() < 1e-5);
    }

    #[test]
    fn test_invalid_actions_are_rejected() {
        let mut game = Game::default();
        assert!(!game.pause().success);
        assert!(!game.resume().success);
        game.start(0.0);
        assert!(!game.start(10.0).success);
        assert_eq!(game.state(), LoopState::Running);
    }

    #[test]
    fn test_set_speed_index_bounds() {
        let mut game = Game::default();
        assert!(game.set_speed_index(2));
        assert_eq!(game.speed(), SpeedPreset::Fast);
        assert!(!game.set_speed_index(9));
        assert_eq!(game.speed(), SpeedPreset::Fast);
    }

    #[test]
    fn test_keys_drive_paddles() {
        let mut game = Game::default();
        game.start(0.0);
        game.key_down("w");
        game.key_down("ArrowDown");
        game.tick(16.0);
        assert!(game.paddle(0).y < 250.0);
        assert!(game.paddle(1).y > 250.0);

        assert!(game.key_up("w"));
        assert!(!game.key_down("Enter"));
        assert!(!game.keys.is_held(Key::LeftUp));
    }
}
