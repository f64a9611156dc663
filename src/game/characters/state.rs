// Koala behaviour states
//
// There is no transition table. Every frame each state gets a chance to react
// to the input and may switch the koala into itself, so the order the
// reactions run in decides ties:
//
//   Jumping -> Walking (left, then right) -> gravity + clamp -> Standing
//
// `CollisionResolver::update` owns that sequence.

use log::debug;

use super::character::Koala;
use super::config::KoalaConfig;
use crate::engine::input::{Action, Controls};

/// What the koala is doing, which also picks its animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehavioralState {
    /// Grounded and not moving horizontally
    Standing,
    /// Grounded and moving horizontally
    Walking,
    /// Took off from the ground
    Jumping,
    /// Reserved; nothing enters or leaves this state
    #[allow(dead_code)]
    Attacking,
}

impl BehavioralState {
    /// Reactions run before gravity is applied, in this order
    pub const PRE_GRAVITY: [BehavioralState; 2] =
        [BehavioralState::Jumping, BehavioralState::Walking];

    /// Apply this state's reaction to the current input
    pub fn react_to_input(self, koala: &mut Koala, controls: &Controls<'_>, config: &KoalaConfig) {
        match self {
            Self::Standing => {
                if koala.velocity.x.abs() < 1.0 {
                    koala.velocity.x = 0.0;
                    if koala.grounded {
                        koala.state = Self::Standing;
                    }
                }
            }
            Self::Walking => {
                if controls.is_active(Action::MoveLeft) {
                    koala.velocity.x = -config.max_velocity;
                    if koala.grounded {
                        koala.state = Self::Walking;
                    }
                    koala.faces_right = false;
                }
                // Evaluated after left, so holding both ends up moving right
                if controls.is_active(Action::MoveRight) {
                    koala.velocity.x = config.max_velocity;
                    if koala.grounded {
                        koala.state = Self::Walking;
                    }
                    koala.faces_right = true;
                }
            }
            Self::Jumping => {
                if controls.is_active(Action::Jump) && koala.grounded {
                    koala.velocity.y += config.jump_velocity;
                    koala.state = Self::Jumping;
                    koala.grounded = false;
                    debug!(
                        "Koala jumped from ({:.2}, {:.2})",
                        koala.position.x, koala.position.y
                    );
                }
            }
            Self::Attacking => {}
        }
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Standing => "stand",
            Self::Walking => "walk",
            Self::Jumping => "jump",
            Self::Attacking => "attack",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{InputConfig, InputSnapshot, Key};
    use glam::Vec2;

    fn react(state: BehavioralState, koala: &mut Koala, input: &InputSnapshot) {
        let bindings = InputConfig::default();
        let controls = Controls::new(input, &bindings);
        state.react_to_input(koala, &controls, &KoalaConfig::default());
    }

    fn grounded_koala() -> Koala {
        let mut koala = Koala::new(Vec2::new(5.0, 5.0));
        koala.grounded = true;
        koala
    }

    #[test]
    fn test_jump_from_ground() {
        let mut koala = grounded_koala();
        koala.velocity.y = 1.0;
        react(
            BehavioralState::Jumping,
            &mut koala,
            &InputSnapshot::new().with_key(Key::Up),
        );

        assert_eq!(koala.velocity.y, 41.0);
        assert_eq!(koala.state, BehavioralState::Jumping);
        assert!(!koala.grounded);
    }

    #[test]
    fn test_no_jump_in_air() {
        let mut koala = Koala::new(Vec2::ZERO);
        let before = koala.clone();
        react(
            BehavioralState::Jumping,
            &mut koala,
            &InputSnapshot::new().with_key(Key::W),
        );
        assert_eq!(koala, before);
    }

    #[test]
    fn test_jump_from_touch_zone() {
        let mut koala = grounded_koala();
        react(
            BehavioralState::Jumping,
            &mut koala,
            &InputSnapshot::new().with_pointer(1.0),
        );
        assert_eq!(koala.state, BehavioralState::Jumping);
    }

    #[test]
    fn test_walk_left_on_ground() {
        let mut koala = grounded_koala();
        koala.state = BehavioralState::Standing;
        react(
            BehavioralState::Walking,
            &mut koala,
            &InputSnapshot::new().with_key(Key::Left),
        );

        assert_eq!(koala.velocity.x, -10.0);
        assert_eq!(koala.state, BehavioralState::Walking);
        assert!(!koala.faces_right);
    }

    #[test]
    fn test_walk_in_air_keeps_state() {
        let mut koala = Koala::new(Vec2::ZERO);
        koala.state = BehavioralState::Jumping;
        react(
            BehavioralState::Walking,
            &mut koala,
            &InputSnapshot::new().with_key(Key::D),
        );

        assert_eq!(koala.velocity.x, 10.0);
        assert_eq!(koala.state, BehavioralState::Jumping);
        assert!(koala.faces_right);
    }

    #[test]
    fn test_left_and_right_right_wins() {
        let mut koala = grounded_koala();
        react(
            BehavioralState::Walking,
            &mut koala,
            &InputSnapshot::new().with_key(Key::A).with_key(Key::Right),
        );

        assert_eq!(koala.velocity.x, 10.0);
        assert!(koala.faces_right);
    }

    #[test]
    fn test_shared_zone_edge_triggers_both_directions() {
        let mut koala = grounded_koala();
        react(
            BehavioralState::Walking,
            &mut koala,
            &InputSnapshot::new().with_pointer(0.25),
        );
        assert_eq!(koala.velocity.x, 10.0);
        assert!(koala.faces_right);
    }

    #[test]
    fn test_standing_zeroes_slow_drift() {
        let mut koala = grounded_koala();
        koala.velocity.x = -0.9;
        react(BehavioralState::Standing, &mut koala, &InputSnapshot::new());

        assert_eq!(koala.velocity.x, 0.0);
        assert_eq!(koala.state, BehavioralState::Standing);
    }

    #[test]
    fn test_standing_in_air_keeps_state() {
        let mut koala = Koala::new(Vec2::ZERO);
        koala.velocity.x = 0.5;
        react(BehavioralState::Standing, &mut koala, &InputSnapshot::new());

        assert_eq!(koala.velocity.x, 0.0);
        assert_eq!(koala.state, BehavioralState::Walking);
    }

    #[test]
    fn test_standing_ignores_fast_motion() {
        let mut koala = grounded_koala();
        koala.velocity.x = 1.0;
        react(BehavioralState::Standing, &mut koala, &InputSnapshot::new());

        assert_eq!(koala.velocity.x, 1.0);
        assert_eq!(koala.state, BehavioralState::Walking);
    }

    #[test]
    fn test_attacking_is_noop() {
        let mut koala = grounded_koala();
        let before = koala.clone();
        let input = InputSnapshot::new()
            .with_key(Key::Up)
            .with_key(Key::Left)
            .with_pointer(0.9);
        react(BehavioralState::Attacking, &mut koala, &input);
        assert_eq!(koala, before);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(BehavioralState::Standing.animation_name(), "stand");
        assert_eq!(BehavioralState::Walking.animation_name(), "walk");
        assert_eq!(BehavioralState::Jumping.animation_name(), "jump");
    }
}
