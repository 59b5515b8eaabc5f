use bevy::log::LogPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use cc_render::ScenePlugin;
use cc_ui::UiPlugin;
use clap::Parser;
use tracing::info;

mod cli;

use cli::Cli;

fn main() {
    tracing_subscriber::fmt().without_time().compact().init();

    let cli = Cli::parse();
    let settings = cli.scene_settings();
    info!(
        seed = ?settings.seed,
        auto_rotate = settings.auto_rotate,
        "Starting cyber container"
    );

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "CYBER CONTAINER".to_string(),
                        resolution: WindowResolution::new(cli.width as f32, cli.height as f32),
                        ..default()
                    }),
                    ..default()
                })
                // tracing_subscriber already owns the global logger.
                .disable::<LogPlugin>(),
        )
        .add_plugins(MeshPickingPlugin)
        .add_plugins(ScenePlugin::new(settings))
        .add_plugins(UiPlugin)
        .run();
}
