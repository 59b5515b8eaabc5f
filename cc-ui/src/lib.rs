use bevy::app::Plugin;
use bevy::ecs::system::SystemParam;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};
use cc_render::{ExportSnapshot, MountedScene, SceneLifecycle, SceneSettings, ToggleAutoRotate};
use cc_scene::AnimationState;
use tracing::debug;

const PANEL_TITLE: &str = "CYBER CONTAINER";

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut bevy::app::App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, control_panel_ui);
    }
}

/// Something the user asked the scene to do, from a button or a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleRotation,
    Export,
    Remount,
    Unmount,
}

/// Maps this frame's key presses to an action. First match wins.
pub fn shortcut_action(keys: &ButtonInput<KeyCode>) -> Option<UiAction> {
    if keys.just_pressed(KeyCode::Space) {
        Some(UiAction::ToggleRotation)
    } else if keys.just_pressed(KeyCode::F12) {
        Some(UiAction::Export)
    } else if keys.just_pressed(KeyCode::F5) {
        Some(UiAction::Remount)
    } else if keys.just_pressed(KeyCode::Escape) {
        Some(UiAction::Unmount)
    } else {
        None
    }
}

#[derive(SystemParam)]
struct SceneRequests<'w> {
    lifecycle: EventWriter<'w, SceneLifecycle>,
    toggle: EventWriter<'w, ToggleAutoRotate>,
    export: EventWriter<'w, ExportSnapshot>,
}

impl SceneRequests<'_> {
    fn dispatch(&mut self, action: UiAction) {
        debug!(?action, "ui action");
        match action {
            UiAction::ToggleRotation => {
                self.toggle.write(ToggleAutoRotate);
            }
            UiAction::Export => {
                self.export.write(ExportSnapshot);
            }
            UiAction::Remount => {
                self.lifecycle.write(SceneLifecycle::Remount);
            }
            UiAction::Unmount => {
                self.lifecycle.write(SceneLifecycle::Unmount);
            }
        }
    }
}

fn rotation_button_label(auto_rotate: bool) -> &'static str {
    if auto_rotate { "Stop Rotation" } else { "Auto Rotate" }
}

fn control_panel_ui(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<AnimationState>,
    settings: Res<SceneSettings>,
    mounted: Option<Res<MountedScene>>,
    mut requests: SceneRequests,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut action = None;
    if !ctx.wants_keyboard_input() {
        action = shortcut_action(&keys);
    }

    egui::Window::new(PANEL_TITLE)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            if mounted.is_some() {
                ui.label(format!("hovered coins: {}", state.hovered.len()));
                ui.horizontal(|ui| {
                    if ui.button(rotation_button_label(state.auto_rotate)).clicked() {
                        action = Some(UiAction::ToggleRotation);
                    }
                    if ui.button("Download Icon").clicked() {
                        action = Some(UiAction::Export);
                    }
                });
                ui.small(format!("saves to {}", settings.export_path.display()));
            } else {
                ui.label("Scene unmounted");
                if ui.button("Mount").clicked() {
                    action = Some(UiAction::Remount);
                }
            }
            ui.separator();
            ui.small("Space rotate · F12 export · F5 remount · Esc unmount");
        });

    if let Some(action) = action {
        requests.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_map_to_actions() {
        let cases = [
            (KeyCode::Space, UiAction::ToggleRotation),
            (KeyCode::F12, UiAction::Export),
            (KeyCode::F5, UiAction::Remount),
            (KeyCode::Escape, UiAction::Unmount),
        ];
        for (key, expected) in cases {
            let mut keys = ButtonInput::<KeyCode>::default();
            keys.press(key);
            assert_eq!(shortcut_action(&keys), Some(expected));
        }
    }

    #[test]
    fn held_keys_fire_once() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Space);
        keys.clear();
        assert!(keys.pressed(KeyCode::Space));
        assert_eq!(shortcut_action(&keys), None);
    }

    #[test]
    fn rotation_label_reflects_state() {
        assert_eq!(rotation_button_label(true), "Stop Rotation");
        assert_eq!(rotation_button_label(false), "Auto Rotate");
    }
}
