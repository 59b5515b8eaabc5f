use bevy::prelude::*;
use cc_scene::NodeId;

/// Links a spawned mesh back to its arena record.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneNodeRef(pub NodeId);

#[derive(Component)]
pub struct ContainerRoot;

/// World-fixed lights owned by the mounted scene.
#[derive(Component)]
pub struct StageLight;

#[derive(Component)]
pub struct SceneCamera;

#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitAngles {
    pub yaw: f32,
    /// Elevation above the horizon.
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitAngles {
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length();
        Self {
            yaw: position.x.atan2(position.z),
            pitch: (position.y / distance).asin(),
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        Vec3::new(
            horizontal * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            horizontal * self.yaw.cos(),
        )
    }
}
