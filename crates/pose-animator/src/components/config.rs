//! Animation configuration: which behaviors are active and how fast they run.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Independent per-tick behaviors. Any combination is valid, including empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AnimationFlags: u32 {
        /// Vertical sine oscillation around the baseline height.
        const FLOAT_UPDOWN = 0x01;
        /// Spin around the X axis.
        const ROTATE_X     = 0x02;
        /// Spin around the Y axis.
        const ROTATE_Y     = 0x04;
        /// Spin around the Z axis.
        const ROTATE_Z     = 0x08;

        const FLOAT_UPDOWN_AND_ROTATE_X = Self::FLOAT_UPDOWN.bits() | Self::ROTATE_X.bits();
        const FLOAT_UPDOWN_AND_ROTATE_Y = Self::FLOAT_UPDOWN.bits() | Self::ROTATE_Y.bits();
        const FLOAT_UPDOWN_AND_ROTATE_Z = Self::FLOAT_UPDOWN.bits() | Self::ROTATE_Z.bits();
    }
}

impl AnimationFlags {
    /// No behavior: ticks only advance time.
    pub const NONE: Self = Self::empty();
}

impl Default for AnimationFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// Parameters for a [`TransformAnimator`](super::animator::TransformAnimator).
///
/// Loaded from JSON at runtime, e.g.
/// `{"flags": "FLOAT_UPDOWN | ROTATE_Y", "rotation_speed": 90.0, "floating_speed": 2.0, "floating_height": 0.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Active behaviors.
    pub flags: AnimationFlags,
    /// Degrees per second, applied to every enabled rotation axis.
    pub rotation_speed: f32,
    /// Angular frequency (radians per second) of the vertical oscillation.
    pub floating_speed: f32,
    /// Half-range of the vertical oscillation in world units.
    pub floating_height: f32,
}

impl AnimationConfig {
    pub fn new(flags: AnimationFlags) -> Self {
        Self {
            flags,
            ..Default::default()
        }
    }

    /// Float up and down with the given angular speed and amplitude.
    pub fn floating(speed: f32, height: f32) -> Self {
        Self::new(AnimationFlags::FLOAT_UPDOWN).with_floating(speed, height)
    }

    /// Spin around the given axes at `speed` degrees per second.
    pub fn rotating(axes: AnimationFlags, speed: f32) -> Self {
        Self::new(axes).with_rotation_speed(speed)
    }

    // -- Builder methods --

    pub fn with_flags(mut self, flags: AnimationFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_floating(mut self, speed: f32, height: f32) -> Self {
        self.floating_speed = speed;
        self.floating_height = height;
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
