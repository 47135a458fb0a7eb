use crate::{Ball, Config, Events, GameRng, Score, SpeedPreset, Time};
use hecs::World;

/// Serve a new ball when the current one leaves the field sideways
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    speed: SpeedPreset,
    time: &mut Time,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            // Past the left paddle
            score.increment_right();
            events.right_scored = true;
        } else if ball.pos.x > config.field_width {
            // Past the right paddle
            score.increment_left();
            events.left_scored = true;
        } else {
            continue;
        }

        ball.reset(config, speed.magnitude(config), rng);
        time.reset_round();
        log::debug!(
            "Ball missed (score {}:{}), serving at {} speed",
            score.left,
            score.right,
            speed.as_str()
        );
    }
}
