use crate::{Ball, Config, Events, Paddle};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Plain interval checks after the move; a fast ball can skip past a
/// paddle within a single frame.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    let r = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls, only when heading into the wall
        let into_top = ball.pos.y - r < 0.0 && ball.vel.y < 0.0;
        let into_bottom = ball.pos.y + r > config.field_height && ball.vel.y > 0.0;
        if into_top || into_bottom {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if !paddle.covers(ball.pos.y, config.paddle_height) {
                continue;
            }
            let face_x = config.paddle_face_x(paddle.player_id);
            let hit = if paddle.player_id == 0 {
                ball.pos.x - r < face_x && ball.vel.x < 0.0
            } else {
                ball.pos.x + r > face_x && ball.vel.x > 0.0
            };
            if hit {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}
