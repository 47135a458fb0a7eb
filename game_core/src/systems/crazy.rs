use crate::{Ball, Config, CrazyTimer, Events, Time};
use hecs::World;

/// Fire crazy mode once its deadline has passed
pub fn check_crazy_mode(
    world: &mut World,
    time: &Time,
    config: &Config,
    crazy: &mut CrazyTimer,
    events: &mut Events,
) {
    if !crazy.is_due(time.now) {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.set_speed(config.crazy_speed);
    }
    crazy.active = true;
    events.crazy_mode_started = true;
    log::info!("Crazy mode! Ball speed forced to {}", config.crazy_speed);
}
