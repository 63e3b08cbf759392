use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

/// Per-entity pose data read by the host renderer straight out of wasm memory.
/// Layout: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PoseInstance {
    /// Position in world space.
    pub position: [f32; 3],
    /// Rotation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    /// Entity id, stored as a float so the buffer stays homogeneous.
    pub entity_id: f32,
}

impl PoseInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(id: u32, position: Vec3, rotation: Quat) -> Self {
        Self {
            position: position.to_array(),
            rotation: rotation.to_array(),
            entity_id: id as f32,
        }
    }
}

/// Packed pose instances for every visible entity, rebuilt each frame.
pub struct PoseBuffer {
    pub instances: Vec<PoseInstance>,
}

impl PoseBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: PoseInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for direct memory reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data viewed as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for PoseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<PoseInstance>(), PoseInstance::STRIDE_BYTES);
        assert_eq!(PoseInstance::FLOATS, 8);
    }

    #[test]
    fn buffer_flattens_instances() {
        let mut buf = PoseBuffer::new();
        buf.push(PoseInstance::new(3, Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY));
        buf.push(PoseInstance::default());

        assert_eq!(buf.instance_count(), 2);
        let floats = buf.as_floats();
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[..8], &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0, 3.0]);
    }
}
