// Koala character
//
// - Character data (position, velocity, flags)
// - Movement configuration
// - Behaviour state machine
// - Animation selection
// - Per-frame movement and tile collision

pub mod animation;
pub mod character;
pub mod config;
pub mod controller;
pub mod state;

// Re-export commonly used types
pub use animation::{KoalaAnimations, SpriteSheetConfig};
pub use character::Koala;
pub use config::{KoalaConfig, SPRITE_FRAME_HEIGHT, SPRITE_FRAME_WIDTH};
pub use controller::{CollisionResolver, StepReport};

// Re-export for tests and future expansion
#[allow(unused_imports)]
pub use animation::{Animation, PlayMode};
#[allow(unused_imports)]
pub use config::ConfigError;
#[allow(unused_imports)]
pub use state::BehavioralState;
