// Koala tuning - fixed for the whole session, computed once at startup

/// World units per sprite pixel (1 unit == 16 pixels)
pub const UNIT_SCALE: f32 = 1.0 / 16.0;

/// Pixel size of one frame in the koala sprite sheet
pub const SPRITE_FRAME_WIDTH: u32 = 18;
pub const SPRITE_FRAME_HEIGHT: u32 = 26;

/// Errors raised while building a koala configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Sprite frame must have a non-zero size, got {width}x{height}")]
    InvalidSpriteSize { width: u32, height: u32 },
}

/// Movement constants shared by the state machine and the collision resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KoalaConfig {
    // Dimensions (bounding box)
    /// Width in world units
    pub width: f32,
    /// Height in world units
    pub height: f32,

    // Movement
    /// Horizontal speed cap (units/second)
    pub max_velocity: f32,
    /// Upward velocity added when a jump starts
    pub jump_velocity: f32,
    /// Horizontal velocity multiplier applied at the end of every frame
    pub damping: f32,
    /// Added to vertical velocity once per frame, independent of frame time
    pub gravity: f32,
}

impl KoalaConfig {
    /// Build the configuration from the pixel size of one sprite frame
    pub fn from_sprite_size(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSpriteSize { width, height });
        }

        Ok(Self::scaled(width, height))
    }

    fn scaled(width: u32, height: u32) -> Self {
        Self {
            width: width as f32 * UNIT_SCALE,
            height: height as f32 * UNIT_SCALE,
            max_velocity: 10.0,
            jump_velocity: 40.0,
            damping: 0.87,
            gravity: -2.5,
        }
    }
}

impl Default for KoalaConfig {
    fn default() -> Self {
        Self::scaled(SPRITE_FRAME_WIDTH, SPRITE_FRAME_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_koala_sprite() {
        let from_sprite =
            KoalaConfig::from_sprite_size(SPRITE_FRAME_WIDTH, SPRITE_FRAME_HEIGHT).unwrap();
        assert_eq!(KoalaConfig::default(), from_sprite);
    }

    #[test]
    fn test_default_config() {
        let config = KoalaConfig::default();
        assert_eq!(config.width, 1.125);
        assert_eq!(config.height, 1.625);
        assert_eq!(config.max_velocity, 10.0);
        assert_eq!(config.jump_velocity, 40.0);
        assert_eq!(config.damping, 0.87);
        assert_eq!(config.gravity, -2.5);
    }

    #[test]
    fn test_from_sprite_size_matches_default() {
        let config =
            KoalaConfig::from_sprite_size(SPRITE_FRAME_WIDTH, SPRITE_FRAME_HEIGHT).unwrap();
        assert_eq!(config, KoalaConfig::default());
    }

    #[test]
    fn test_from_sprite_size_scales() {
        let config = KoalaConfig::from_sprite_size(32, 16).unwrap();
        assert_eq!(config.width, 2.0);
        assert_eq!(config.height, 1.0);
    }

    #[test]
    fn test_zero_sprite_rejected() {
        assert_eq!(
            KoalaConfig::from_sprite_size(0, 26),
            Err(ConfigError::InvalidSpriteSize {
                width: 0,
                height: 26
            })
        );
    }
}
