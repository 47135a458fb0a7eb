pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod speed;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use speed::*;

use hecs::World;
use systems::*;

/// Advance the simulation by exactly one frame
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    now: f64,
    config: &Config,
    input: &InputSnapshot,
    speed: SpeedPreset,
    crazy: &mut CrazyTimer,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();
    time.advance(now);

    // 1. Ingest this frame's input snapshot
    apply_inputs(world, input);

    // 2. Timed speed-up, before anything moves
    check_crazy_mode(world, time, config, crazy, events);

    // 3. Move paddles and ball
    move_paddles(world, config);
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 5. Check for a miss (ball exited the field)
    check_scoring(world, config, speed, time, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
