//! Frame drawing against an abstract 2D surface

use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Paddle, Params, Time};

pub const FOREGROUND: &str = "#fff";

/// Minimal 2D drawing API the game needs
///
/// The browser client backs this with a `CanvasRenderingContext2d`.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// Text centred horizontally on `x`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str);
}

/// Label for the round clock
pub fn timer_label(time: &Time) -> String {
    format!("Time: {}s", time.round_elapsed_secs())
}

/// Draw paddles, ball and the elapsed-time label
pub fn draw_frame<S: Surface + ?Sized>(world: &World, time: &Time, config: &Config, surface: &mut S) {
    surface.clear(config.field_width, config.field_height);
    surface.set_fill(FOREGROUND);

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.player_id);
    for paddle in &paddles {
        surface.fill_rect(
            config.paddle_x(paddle.player_id),
            paddle.y,
            config.paddle_width,
            config.paddle_height,
        );
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, config.ball_radius);
    }

    surface.fill_text(
        &timer_label(time),
        config.field_width / 2.0,
        Params::TIMER_Y,
        Params::TIMER_FONT,
    );
}
