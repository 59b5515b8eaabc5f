use bevy::prelude::*;
use cc_scene::AnimationState;
use cc_scene::interaction::{set_hovered, toggle_auto_rotate};
use tracing::info;

use crate::components::SceneNodeRef;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ToggleAutoRotate;

pub fn on_pointer_over(
    trigger: Trigger<Pointer<Over>>,
    nodes: Query<&SceneNodeRef>,
    mut state: ResMut<AnimationState>,
) {
    if let Ok(node) = nodes.get(trigger.target()) {
        set_hovered(&mut state, node.0, true);
    }
}

pub fn on_pointer_out(
    trigger: Trigger<Pointer<Out>>,
    nodes: Query<&SceneNodeRef>,
    mut state: ResMut<AnimationState>,
) {
    if let Ok(node) = nodes.get(trigger.target()) {
        set_hovered(&mut state, node.0, false);
    }
}

pub fn apply_rotation_toggles(
    mut events: EventReader<ToggleAutoRotate>,
    mut state: ResMut<AnimationState>,
) {
    for _ in events.read() {
        let enabled = toggle_auto_rotate(&mut state);
        info!(enabled, "auto-rotate toggled");
    }
}
