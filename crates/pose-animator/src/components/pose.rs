//! Position + rotation carriers that an animator can drive.

use glam::{EulerRot, Quat, Vec3};

/// Anything with a mutable position and a rotation expressible as Euler angles.
///
/// Rotation is exchanged as three independent angles in degrees (X = pitch,
/// Y = yaw, Z = roll). Implementors decide how those angles are stored, and
/// any normalization that storage applies is visible to the caller.
pub trait PoseTarget {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn euler_degrees(&self) -> Vec3;
    fn set_euler_degrees(&mut self, degrees: Vec3);
}

/// Build a quaternion from per-axis degrees, applying yaw, then pitch, then roll.
pub fn quat_from_euler_degrees(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Inverse of [`quat_from_euler_degrees`]. Angles come back in [-180, 180].
pub fn euler_degrees_from_quat(rotation: Quat) -> Vec3 {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
}

/// Plain pose with rotation kept as raw Euler degrees.
///
/// Angles accumulate without wraparound, so a spin of 720 degrees reads back as 720.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Position in world space.
    pub position: Vec3,
    /// Rotation in degrees around X, Y and Z.
    pub rotation: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation as a quaternion, for renderers.
    pub fn rotation_quat(&self) -> Quat {
        quat_from_euler_degrees(self.rotation)
    }
}

impl PoseTarget for Pose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn euler_degrees(&self) -> Vec3 {
        self.rotation
    }

    fn set_euler_degrees(&mut self, degrees: Vec3) {
        self.rotation = degrees;
    }
}

/// Pose with quaternion rotation, for hosts that store orientation that way.
///
/// Euler angles are derived on read and recomposed on write, so they are
/// normalized by the quaternion decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuatPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for QuatPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl From<Pose> for QuatPose {
    fn from(pose: Pose) -> Self {
        Self {
            position: pose.position,
            rotation: pose.rotation_quat(),
        }
    }
}

impl PoseTarget for QuatPose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn euler_degrees(&self) -> Vec3 {
        euler_degrees_from_quat(self.rotation)
    }

    fn set_euler_degrees(&mut self, degrees: Vec3) {
        self.rotation = quat_from_euler_degrees(degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_keeps_unbounded_angles() {
        let mut pose = Pose::default();
        pose.set_euler_degrees(Vec3::new(720.0, -30.0, 0.0));
        assert_eq!(pose.euler_degrees(), Vec3::new(720.0, -30.0, 0.0));
    }

    #[test]
    fn yaw_quarter_turn_maps_forward_to_side() {
        let pose = Pose::default().with_rotation(Vec3::new(0.0, 90.0, 0.0));
        let v = pose.rotation_quat() * Vec3::NEG_Z;
        assert!((v - Vec3::NEG_X).length() < 1e-5, "rotated = {v:?}");
    }

    #[test]
    fn quat_pose_normalizes_angles() {
        let mut pose = QuatPose::default();
        pose.set_euler_degrees(Vec3::new(0.0, 370.0, 0.0));
        let deg = pose.euler_degrees();
        assert!((deg.y - 10.0).abs() < 1e-3, "yaw = {}", deg.y);
        assert!(deg.x.abs() < 1e-3 && deg.z.abs() < 1e-3);
    }

    #[test]
    fn euler_conversion_is_consistent() {
        let degrees = Vec3::new(20.0, -45.0, 60.0);
        let back = euler_degrees_from_quat(quat_from_euler_degrees(degrees));
        assert!((back - degrees).length() < 1e-3, "back = {back:?}");
    }
}
