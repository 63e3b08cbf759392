pub mod runner;

pub use runner::AnimatorRunner;

use std::cell::RefCell;

use glam::Vec3;
use pose_animator::{EntityId, Pose};
use wasm_bindgen::prelude::*;

// Entity ids start at 1; 0 is returned from spawn calls that fail.
const INVALID_ID: u32 = 0;

thread_local! {
    static RUNNER: RefCell<AnimatorRunner> = RefCell::new(AnimatorRunner::new());
}

fn with_runner<R>(f: impl FnOnce(&mut AnimatorRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

#[wasm_bindgen]
pub fn animator_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("pose-animator: initialized");
}

/// Advance every animator by `dt` seconds and repack poses.
#[wasm_bindgen]
pub fn animator_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Spawn an animated entity. Rotation is in degrees. Returns 0 on a bad config.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn animator_spawn(
    config_json: &str,
    x: f32,
    y: f32,
    z: f32,
    pitch: f32,
    yaw: f32,
    roll: f32,
    start: bool,
) -> u32 {
    let pose = Pose::new(Vec3::new(x, y, z), Vec3::new(pitch, yaw, roll));
    with_runner(|r| r.spawn_json(config_json, pose, start))
        .map_or(INVALID_ID, |id| id.0)
}

#[wasm_bindgen]
pub fn animator_despawn(id: u32) -> bool {
    with_runner(|r| r.despawn(EntityId(id)))
}

#[wasm_bindgen]
pub fn animator_set_config(id: u32, config_json: &str) -> bool {
    match pose_animator::AnimationConfig::from_json(config_json) {
        Ok(config) => with_runner(|r| r.set_config(EntityId(id), config)),
        Err(e) => {
            log::warn!("rejected animation config for entity {}: {}", id, e);
            false
        }
    }
}

#[wasm_bindgen]
pub fn animator_start(id: u32) -> bool {
    with_runner(|r| r.start(EntityId(id)))
}

#[wasm_bindgen]
pub fn animator_stop(id: u32) -> bool {
    with_runner(|r| r.stop(EntityId(id)))
}

#[wasm_bindgen]
pub fn animator_reset(id: u32) -> bool {
    with_runner(|r| r.reset(EntityId(id)))
}

/// Move an entity while its animator is stopped (or let it drift horizontally while floating).
#[wasm_bindgen]
pub fn animator_move_to(id: u32, x: f32, y: f32, z: f32) -> bool {
    with_runner(|r| r.move_to(EntityId(id), Vec3::new(x, y, z)))
}

// ---- Pose buffer accessors ----

#[wasm_bindgen]
pub fn get_poses_ptr() -> *const f32 {
    with_runner(|r| r.poses_ptr())
}

#[wasm_bindgen]
pub fn get_pose_count() -> u32 {
    with_runner(|r| r.pose_count())
}

#[wasm_bindgen]
pub fn get_pose_stride_floats() -> u32 {
    pose_animator::PoseInstance::FLOATS as u32
}
