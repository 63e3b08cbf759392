//! Animator system — drives every entity's animator and packs poses for the renderer.

use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::renderer::instance::{PoseBuffer, PoseInstance};

/// Tick all active entity animators against their own poses.
///
/// Call this once per frame with the frame delta, before building the pose buffer.
pub fn tick_animators(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        if entity.active {
            entity.tick(dt);
        }
    }
}

/// Rebuild the pose buffer from a set of entities. Inactive entities are skipped.
pub fn build_pose_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut PoseBuffer) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        buffer.push(PoseInstance::new(
            entity.id.0,
            entity.pose.position,
            entity.pose.rotation_quat(),
        ));
    }
}
