use bevy::core_pipeline::bloom::Bloom;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::components::{OrbitAngles, SceneCamera};
use crate::settings::SceneSettings;

pub const BACKGROUND: Color = Color::srgb(0.0, 8.0 / 255.0, 20.0 / 255.0);
const CAMERA_START: Vec3 = Vec3::new(5.0, 3.0, 7.0);
const CAMERA_FOV_DEGREES: f32 = 50.0;

#[derive(Resource, Debug, Clone)]
pub struct OrbitSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Highest allowed elevation; the floor is the horizon.
    pub max_pitch: f32,
    pub rotate_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            min_distance: 6.0,
            max_distance: 12.0,
            max_pitch: 1.5,
            rotate_sensitivity: 0.005,
            zoom_step: 0.5,
        }
    }
}

pub fn spawn_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    commands.insert_resource(ClearColor(BACKGROUND));

    let mut camera = commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        DistanceFog {
            color: BACKGROUND,
            falloff: FogFalloff::Linear {
                start: 5.0,
                end: 15.0,
            },
            ..default()
        },
        OrbitAngles::from_position(CAMERA_START),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    if settings.bloom {
        camera.insert(Bloom::NATURAL);
    }
}

pub fn orbit_camera(
    settings: Res<OrbitSettings>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    mut wheel_events: EventReader<MouseWheel>,
    mut cameras: Query<(&mut Transform, &mut OrbitAngles), With<SceneCamera>>,
) {
    let mut look_delta = Vec2::ZERO;
    for ev in motion_events.read() {
        look_delta += ev.delta;
    }
    if !buttons.pressed(MouseButton::Left) {
        look_delta = Vec2::ZERO;
    }

    let mut scroll = 0.0;
    for ev in wheel_events.read() {
        scroll += ev.y;
    }

    if look_delta == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    let Ok((mut transform, mut orbit)) = cameras.single_mut() else {
        return;
    };

    orbit.yaw -= look_delta.x * settings.rotate_sensitivity;
    orbit.pitch = (orbit.pitch + look_delta.y * settings.rotate_sensitivity)
        .clamp(0.0, settings.max_pitch);
    orbit.distance = (orbit.distance - scroll * settings.zoom_step)
        .clamp(settings.min_distance, settings.max_distance);

    *transform = Transform::from_translation(orbit.position()).looking_at(Vec3::ZERO, Vec3::Y);
}
