use bevy::prelude::*;
use cc_scene::AnimationState;

mod animate;
mod camera;
mod components;
mod export;
mod interaction;
mod mount;
pub mod settings;
mod texture;

pub use camera::OrbitSettings;
pub use components::{ContainerRoot, OrbitAngles, SceneCamera, SceneNodeRef, StageLight};
pub use export::{ExportSnapshot, SnapshotWriter};
pub use interaction::ToggleAutoRotate;
pub use mount::{MountedNode, MountedScene, PhaseRng, SceneLifecycle};
pub use settings::SceneSettings;
pub use texture::pattern_to_image;

#[derive(Default)]
pub struct ScenePlugin {
    pub settings: SceneSettings,
}

impl ScenePlugin {
    pub fn new(settings: SceneSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(mount::PhaseRng::from_settings(&self.settings))
            .insert_resource(AnimationState::new(self.settings.auto_rotate))
            .init_resource::<camera::OrbitSettings>()
            .init_resource::<export::SnapshotWriter>()
            .add_event::<mount::SceneLifecycle>()
            .add_event::<interaction::ToggleAutoRotate>()
            .add_event::<export::ExportSnapshot>()
            .add_systems(Startup, (mount::mount_on_startup, camera::spawn_camera))
            .add_systems(
                Update,
                (
                    mount::handle_scene_lifecycle,
                    interaction::apply_rotation_toggles,
                    animate::animate_scene.run_if(resource_exists::<mount::MountedScene>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    camera::orbit_camera,
                    export::handle_export_requests.after(animate::animate_scene),
                ),
            );
    }
}
