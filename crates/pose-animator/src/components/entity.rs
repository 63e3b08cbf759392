use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::animator::TransformAnimator;
use crate::components::pose::Pose;

/// A placed object: a pose plus an optional animator that drives it.
/// The entity owns both, so the animator never holds a reference to the pose.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position and rotation in world space.
    pub pose: Pose,
    /// Procedural animation (optional — entities without one stay put).
    pub animator: Option<TransformAnimator>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pose: Pose::default(),
            animator: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pose.position = pos;
        self
    }

    /// Rotation in degrees around X, Y and Z.
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.pose.rotation = rotation;
        self
    }

    pub fn with_animator(mut self, animator: TransformAnimator) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Capture the current pose as the animator baseline, honoring its
    /// `start_on_activate` setting. Does nothing without an animator.
    pub fn activate(&mut self) {
        if let Some(anim) = &mut self.animator {
            anim.activate(&self.pose);
        }
    }

    /// Advance this entity's animator by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(anim) = &mut self.animator {
            anim.tick(dt, &mut self.pose);
        }
    }

    /// Snap back to the animator baseline and stop.
    pub fn reset_animation(&mut self) {
        if let Some(anim) = &mut self.animator {
            anim.reset(&mut self.pose);
        }
    }
}
