pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::types::EntityId;
pub use components::animator::TransformAnimator;
pub use components::config::{AnimationConfig, AnimationFlags};
pub use components::entity::Entity;
pub use components::pose::{Pose, PoseTarget, QuatPose, quat_from_euler_degrees, euler_degrees_from_quat};
pub use crate::core::scene::Scene;
pub use renderer::instance::{PoseInstance, PoseBuffer};
pub use systems::animator::{tick_animators, build_pose_buffer};
