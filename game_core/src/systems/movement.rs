use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Accelerate, damp and clamp each paddle, then move it within the field
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.vy += intent.dir as f32 * config.paddle_accel;
        paddle.vy *= config.paddle_friction;
        paddle.vy = paddle
            .vy
            .clamp(-config.paddle_max_speed, config.paddle_max_speed);
        paddle.y = config.clamp_paddle_y(paddle.y + paddle.vy);
    }
}

/// Move ball one frame along its velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
