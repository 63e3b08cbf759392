//! Procedural transform animation: float up and down, spin around any axis.
//!
//! The animator never owns the transform it drives. The owner passes its pose
//! in by reference on every call that reads or writes it, and calls [`tick`]
//! once per frame from its own update loop.
//!
//! [`tick`]: TransformAnimator::tick

use glam::Vec3;

use super::config::{AnimationConfig, AnimationFlags};
use super::pose::{Pose, PoseTarget};

/// Per-object animation state.
#[derive(Debug, Clone, Default)]
pub struct TransformAnimator {
    /// Active behaviors and their parameters.
    config: AnimationConfig,
    /// Start running as soon as the owner activates the animator.
    pub start_on_activate: bool,
    /// Whether ticks currently mutate the pose.
    running: bool,
    /// Seconds accumulated while running since the last reset.
    elapsed: f32,
    /// Pose captured at activation or at the last configuration change.
    baseline: Pose,
}

impl TransformAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_start_on_activate(mut self, start: bool) -> Self {
        self.start_on_activate = start;
        self
    }

    /// Capture the current pose as baseline, then start if `auto_start` is set.
    pub fn initialize(&mut self, auto_start: bool, target: &impl PoseTarget) {
        self.capture_baseline(target);
        if auto_start {
            self.start();
        }
    }

    /// [`initialize`](Self::initialize) using the `start_on_activate` setting.
    pub fn activate(&mut self, target: &impl PoseTarget) {
        self.initialize(self.start_on_activate, target);
    }

    /// Replace the configuration and re-baseline on the current pose.
    /// Running state is left as is.
    pub fn set_config(&mut self, config: AnimationConfig, target: &impl PoseTarget) {
        self.config = config;
        self.capture_baseline(target);
        log::debug!("animator reconfigured: {:?}", config.flags);
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("animator started at t={}", self.elapsed);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::debug!("animator stopped at t={}", self.elapsed);
        }
        self.running = false;
    }

    /// Zero the clock, snap the pose back to the baseline, and stop.
    pub fn reset(&mut self, target: &mut impl PoseTarget) {
        self.elapsed = 0.0;
        target.set_position(self.baseline.position);
        target.set_euler_degrees(self.baseline.rotation);
        self.stop();
        log::debug!("animator reset to {:?}", self.baseline);
    }

    /// Advance by `dt` seconds and write the resulting pose. No-op while stopped.
    pub fn tick(&mut self, dt: f32, target: &mut impl PoseTarget) {
        if !self.running {
            return;
        }

        let flags = self.config.flags;
        let step = self.config.rotation_speed * dt;

        let mut rotation = target.euler_degrees();
        if flags.contains(AnimationFlags::ROTATE_X) {
            rotation.x += step;
        }
        if flags.contains(AnimationFlags::ROTATE_Y) {
            rotation.y += step;
        }
        if flags.contains(AnimationFlags::ROTATE_Z) {
            rotation.z += step;
        }

        // Phase uses the time before this tick's advance.
        let mut position = target.position();
        if flags.contains(AnimationFlags::FLOAT_UPDOWN) {
            position.y = self.baseline.position.y
                + (self.config.floating_speed * self.elapsed).sin() * self.config.floating_height;
        }

        self.elapsed += dt;

        target.set_euler_degrees(rotation);
        target.set_position(position);
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds accumulated since the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn baseline(&self) -> Pose {
        self.baseline
    }

    pub fn baseline_position(&self) -> Vec3 {
        self.baseline.position
    }

    pub fn baseline_rotation(&self) -> Vec3 {
        self.baseline.rotation
    }

    fn capture_baseline(&mut self, target: &impl PoseTarget) {
        self.baseline = Pose::new(target.position(), target.euler_degrees());
    }
}
