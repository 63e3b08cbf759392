use pose_animator::{
    AnimationConfig, Entity, EntityId, Pose, PoseBuffer, Scene, TransformAnimator,
    build_pose_buffer, tick_animators,
};
use glam::Vec3;

/// Owns the scene of animated entities and drives it from the host frame loop.
///
/// The browser side calls [`tick`](Self::tick) once per animation frame, then
/// reads the packed poses through [`poses_ptr`](Self::poses_ptr).
pub struct AnimatorRunner {
    scene: Scene,
    poses: PoseBuffer,
    next_id: u32,
}

impl AnimatorRunner {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            poses: PoseBuffer::new(),
            next_id: 1,
        }
    }

    /// Spawn an animated entity at the given pose. Returns its id.
    pub fn spawn(&mut self, config: AnimationConfig, pose: Pose, start: bool) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let mut entity = Entity::new(id)
            .with_animator(TransformAnimator::new(config).with_start_on_activate(start));
        entity.pose = pose;
        self.scene.spawn(entity);
        log::debug!("spawned animated entity {:?} with {:?}", id, config.flags);
        id
    }

    /// Spawn from a JSON configuration. Malformed JSON is logged and yields `None`.
    pub fn spawn_json(&mut self, json: &str, pose: Pose, start: bool) -> Option<EntityId> {
        match AnimationConfig::from_json(json) {
            Ok(config) => Some(self.spawn(config, pose, start)),
            Err(e) => {
                log::warn!("rejected animation config: {}", e);
                None
            }
        }
    }

    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.scene.despawn(id).is_some()
    }

    /// Replace an entity's configuration, re-baselining on its current pose.
    pub fn set_config(&mut self, id: EntityId, config: AnimationConfig) -> bool {
        self.with_entity(id, |entity| {
            if let Some(anim) = &mut entity.animator {
                anim.set_config(config, &entity.pose);
            }
        })
    }

    pub fn start(&mut self, id: EntityId) -> bool {
        self.with_entity(id, |entity| {
            if let Some(anim) = &mut entity.animator {
                anim.start();
            }
        })
    }

    pub fn stop(&mut self, id: EntityId) -> bool {
        self.with_entity(id, |entity| {
            if let Some(anim) = &mut entity.animator {
                anim.stop();
            }
        })
    }

    pub fn reset(&mut self, id: EntityId) -> bool {
        self.with_entity(id, Entity::reset_animation)
    }

    /// Run one frame: advance every animator, then repack poses.
    pub fn tick(&mut self, dt: f32) {
        tick_animators(&mut self.scene, dt);
        build_pose_buffer(self.scene.iter(), &mut self.poses);
    }

    pub fn pose(&self, id: EntityId) -> Option<Pose> {
        self.scene.get(id).map(|e| e.pose)
    }

    pub fn move_to(&mut self, id: EntityId, position: Vec3) -> bool {
        self.with_entity(id, |entity| entity.pose.position = position)
    }

    pub fn entity_count(&self) -> usize {
        self.scene.len()
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn poses_ptr(&self) -> *const f32 {
        self.poses.instances_ptr()
    }

    pub fn pose_count(&self) -> u32 {
        self.poses.instance_count()
    }

    pub fn pose_floats(&self) -> &[f32] {
        self.poses.as_floats()
    }

    fn with_entity(&mut self, id: EntityId, f: impl FnOnce(&mut Entity)) -> bool {
        match self.scene.get_mut(id) {
            Some(entity) => {
                f(entity);
                true
            }
            None => {
                log::warn!("no entity with id {:?}", id);
                false
            }
        }
    }
}

impl Default for AnimatorRunner {
    fn default() -> Self {
        Self::new()
    }
}
