use hecs::World;

use crate::{InputSnapshot, Paddle, PaddleIntent};

/// Copy this frame's input snapshot onto the paddle intents
pub fn apply_inputs(world: &mut World, input: &InputSnapshot) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.for_player(paddle.player_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_inputs_routed_by_player() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 250.0);
        let right = create_paddle(&mut world, 1, 250.0);
        let input = InputSnapshot {
            left: PaddleIntent { dir: -1 },
            right: PaddleIntent { dir: 1 },
        };

        apply_inputs(&mut world, &input);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
    }
}
