// Key-framed sprite animations

use super::config::{SPRITE_FRAME_HEIGHT, SPRITE_FRAME_WIDTH};
use super::state::BehavioralState;

/// How the frame index advances once the last frame is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Play once and hold the last frame
    Normal,
    /// Bounce back and forth: 0, 1, 2, 1, 0, 1, ...
    LoopPingPong,
}

/// A sequence of sprite-sheet regions sampled by a running clock
///
/// Animations hold no playback state; the frame is a pure function of time.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Region indices in the sprite sheet
    pub frames: Vec<usize>,
    pub play_mode: PlayMode,
}

impl Animation {
    pub fn new(frame_duration: f32, frames: Vec<usize>, play_mode: PlayMode) -> Self {
        Self {
            frame_duration,
            frames,
            play_mode,
        }
    }

    /// A single frame that never changes
    pub fn still(region: usize) -> Self {
        Self::new(0.0, vec![region], PlayMode::Normal)
    }

    /// Index into `frames` for the given time
    pub fn key_frame_index(&self, state_time: f32) -> usize {
        let len = self.frames.len();
        if len <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }

        let frame_number = (state_time / self.frame_duration) as usize;
        match self.play_mode {
            PlayMode::Normal => frame_number.min(len - 1),
            PlayMode::LoopPingPong => {
                let frame_number = frame_number % (len * 2 - 2);
                if frame_number >= len {
                    len - 2 - (frame_number - len)
                } else {
                    frame_number
                }
            }
        }
    }

    /// Sprite region to show at the given time
    pub fn key_frame(&self, state_time: f32) -> Option<usize> {
        self.frames.get(self.key_frame_index(state_time)).copied()
    }
}

/// The koala's animation set
#[derive(Debug, Clone)]
pub struct KoalaAnimations {
    pub stand: Animation,
    pub walk: Animation,
    pub jump: Animation,
}

impl KoalaAnimations {
    /// Seconds per walk frame
    pub const WALK_FRAME_DURATION: f32 = 0.15;

    /// Animations laid out on the koala sheet: stand, jump, then three walk frames
    pub fn standard() -> Self {
        Self {
            stand: Animation::still(0),
            jump: Animation::still(1),
            walk: Animation::new(
                Self::WALK_FRAME_DURATION,
                vec![2, 3, 4],
                PlayMode::LoopPingPong,
            ),
        }
    }

    /// Animation for a state; `Attacking` has none
    pub fn for_state(&self, state: BehavioralState) -> Option<&Animation> {
        match state {
            BehavioralState::Standing => Some(&self.stand),
            BehavioralState::Walking => Some(&self.walk),
            BehavioralState::Jumping => Some(&self.jump),
            BehavioralState::Attacking => None,
        }
    }

    /// Sprite region for a state at a point in time
    pub fn region(&self, state: BehavioralState, state_time: f32) -> Option<usize> {
        self.for_state(state)?.key_frame(state_time)
    }
}

impl Default for KoalaAnimations {
    fn default() -> Self {
        Self::standard()
    }
}

/// Sprite sheet layout: equally sized frames in a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheetConfig {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Number of frames in the row
    pub columns: u32,
}

impl SpriteSheetConfig {
    pub fn new(frame_width: u32, frame_height: u32, columns: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            columns,
        }
    }

    /// The koala sheet: five 18x26 frames
    pub fn koala() -> Self {
        Self::new(SPRITE_FRAME_WIDTH, SPRITE_FRAME_HEIGHT, 5)
    }

    /// UVs of a region on a texture holding exactly this sheet
    pub fn region_uvs(&self, region: usize) -> (f32, f32, f32, f32) {
        self.frame_uvs(region, self.frame_width * self.columns, self.frame_height)
    }

    /// Calculate UV coordinates for a region
    /// Returns (u_min, v_min, u_max, v_max) in normalized coordinates [0, 1]
    pub fn frame_uvs(
        &self,
        region: usize,
        texture_width: u32,
        texture_height: u32,
    ) -> (f32, f32, f32, f32) {
        let col = region as u32 % self.columns.max(1);

        let u_min = (col * self.frame_width) as f32 / texture_width as f32;
        let u_max = ((col + 1) * self.frame_width) as f32 / texture_width as f32;
        let v_max = self.frame_height as f32 / texture_height as f32;

        (u_min, 0.0, u_max, v_max)
    }
}
