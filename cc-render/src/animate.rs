use bevy::prelude::*;
use cc_scene::AnimationState;

use crate::mount::{MountedScene, emissive_color};

/// Runs the frame update on the arena and copies the result onto the spawned entities.
pub fn animate_scene(
    time: Res<Time>,
    state: Res<AnimationState>,
    mut scene: ResMut<MountedScene>,
    mut transforms: Query<&mut Transform>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scene = &mut *scene;
    cc_scene::animate::update(time.elapsed_secs(), &state, &mut scene.graph);

    if let Ok(mut root) = transforms.get_mut(scene.root) {
        root.rotation = Quat::from_rotation_y(scene.graph.container().rotation_y);
    }

    for (node, mounted) in scene.graph.nodes().iter().zip(scene.nodes.iter_mut()) {
        if !node.kind().is_animated() {
            continue;
        }

        if let Ok(mut transform) = transforms.get_mut(mounted.entity) {
            transform.translation = node.position;
            transform.rotation = Quat::from_rotation_y(node.rotation_y);
        }

        // Touching the asset re-uploads it, so only write on change.
        if mounted.applied_emissive != node.emissive_intensity {
            if let Some(material) = materials.get_mut(&mounted.material) {
                material.emissive = emissive_color(node.material.emissive, node.emissive_intensity);
            }
            mounted.applied_emissive = node.emissive_intensity;
        }
    }
}
