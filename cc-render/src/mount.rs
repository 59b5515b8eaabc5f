use std::sync::Arc;

use bevy::color::Alpha;
use bevy::picking::Pickable;
use bevy::prelude::*;
use cc_scene::{
    AnimationState, EntityKind, LightAttachment, LightKind, LightSpec, SceneEntity, SceneError,
    SceneGraph, SceneLayout, Shape, TexturePattern,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::components::{ContainerRoot, SceneNodeRef, StageLight};
use crate::interaction;
use crate::settings::SceneSettings;
use crate::texture::pattern_to_image;

const POINT_LUMENS_PER_UNIT: f32 = 40_000.0;
const SPOT_LUMENS_PER_UNIT: f32 = 200_000.0;
const DIRECTIONAL_LUX_PER_UNIT: f32 = 2_000.0;
const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1_500.0;
const SPOT_RANGE: f32 = 20.0;

/// Source of per-entity phase offsets for the whole session.
#[derive(Resource)]
pub struct PhaseRng(pub StdRng);

impl PhaseRng {
    pub fn from_settings(settings: &SceneSettings) -> Self {
        match settings.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MountedNode {
    pub entity: Entity,
    pub material: Handle<StandardMaterial>,
    /// Emissive multiplier last written into `material`.
    pub applied_emissive: f32,
}

/// Everything owned by the currently mounted scene. Removing it tears the scene down.
#[derive(Resource)]
pub struct MountedScene {
    pub graph: SceneGraph,
    pub root: Entity,
    pub stage_lights: Vec<Entity>,
    /// Indexed by `NodeId`.
    pub nodes: Vec<MountedNode>,
    pub panel_texture: Handle<Image>,
}

impl MountedScene {
    pub fn node(&self, id: cc_scene::NodeId) -> Option<&MountedNode> {
        self.nodes.get(id.0)
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLifecycle {
    Unmount,
    /// Tears down the current scene (if any) and mounts a fresh one with new phases.
    Remount,
}

pub fn mount_on_startup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<SceneSettings>,
    mut rng: ResMut<PhaseRng>,
    mut state: ResMut<AnimationState>,
) {
    if let Err(err) = mount(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &settings,
        &mut rng,
        &mut state,
    ) {
        error!("scene setup aborted: {err}");
    }
}

pub fn handle_scene_lifecycle(
    mut commands: Commands,
    mut events: EventReader<SceneLifecycle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<SceneSettings>,
    mut rng: ResMut<PhaseRng>,
    mut state: ResMut<AnimationState>,
    mounted: Option<Res<MountedScene>>,
) {
    let Some(last) = events.read().last().copied() else {
        return;
    };

    if let Some(scene) = mounted.as_deref() {
        unmount(&mut commands, scene, &mut state);
    }

    if last == SceneLifecycle::Remount
        && let Err(err) = mount(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut images,
            &settings,
            &mut rng,
            &mut state,
        )
    {
        error!("scene remount aborted: {err}");
    }
}

fn unmount(commands: &mut Commands, scene: &MountedScene, state: &mut AnimationState) {
    commands.entity(scene.root).despawn();
    for &light in &scene.stage_lights {
        commands.entity(light).despawn();
    }
    // The scene's ambient term lives in a resource, not under the root.
    commands.insert_resource(AmbientLight::default());
    commands.remove_resource::<MountedScene>();
    state.hovered.clear();
    info!("scene unmounted");
}

/// Generates the panel texture, builds the graph and spawns it under a container root.
pub fn mount(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    settings: &SceneSettings,
    rng: &mut PhaseRng,
    state: &mut AnimationState,
) -> Result<(), SceneError> {
    let pattern = Arc::new(TexturePattern::generate(
        settings.texture_size,
        settings.texture_size,
        settings.stripe_width,
    )?);
    let graph = SceneGraph::build(&SceneLayout::cyber_container(), pattern, &mut rng.0);
    let panel_texture = images.add(pattern_to_image(graph.texture()));

    let root = commands
        .spawn((
            ContainerRoot,
            Name::new("container"),
            Transform::from_rotation(Quat::from_rotation_y(graph.container().rotation_y)),
            Visibility::default(),
        ))
        .id();

    let mut nodes = Vec::with_capacity(graph.len());
    for node in graph.nodes() {
        let material = materials.add(material_for(node, &panel_texture));
        let mut entity = commands.spawn((
            Mesh3d(meshes.add(mesh_for(node.shape))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(node.position)
                .with_rotation(Quat::from_rotation_y(node.rotation_y)),
            SceneNodeRef(node.id()),
            Name::new(format!("{}-{}", node.kind().label(), node.id().0)),
        ));
        if node.kind() == EntityKind::Coin {
            entity
                .observe(interaction::on_pointer_over)
                .observe(interaction::on_pointer_out);
        } else {
            entity.insert(Pickable::IGNORE);
        }
        let entity = entity.id();
        commands.entity(root).add_child(entity);
        nodes.push(MountedNode {
            entity,
            material,
            applied_emissive: node.emissive_intensity,
        });
    }

    let mut stage_lights = Vec::new();
    for light in graph.lights() {
        let Some(entity) = spawn_light(commands, light) else {
            continue;
        };
        match light.attachment {
            LightAttachment::Container => {
                commands.entity(root).add_child(entity);
            }
            LightAttachment::Stage => {
                commands.entity(entity).insert(StageLight);
                stage_lights.push(entity);
            }
        }
    }

    info!(
        coins = graph.coins().count(),
        numbers = graph.numbers().count(),
        lights = graph.lights().len(),
        "scene mounted"
    );

    state.reset(settings.auto_rotate);
    commands.insert_resource(MountedScene {
        graph,
        root,
        stage_lights,
        nodes,
        panel_texture,
    });
    Ok(())
}

pub fn mesh_for(shape: Shape) -> Mesh {
    match shape {
        Shape::Cuboid { size } => Cuboid::from_size(size).into(),
        Shape::Cylinder {
            radius,
            height,
            segments,
        } => Cylinder::new(radius, height)
            .mesh()
            .resolution(segments)
            .build(),
        Shape::Rectangle { width, height } => Rectangle::new(width, height).into(),
    }
}

pub fn emissive_color(color: Color, intensity: f32) -> LinearRgba {
    let c = color.to_linear();
    LinearRgba::rgb(c.red * intensity, c.green * intensity, c.blue * intensity)
}

pub fn material_for(node: &SceneEntity, panel_texture: &Handle<Image>) -> StandardMaterial {
    let params = &node.material;
    StandardMaterial {
        base_color: params.base_color.with_alpha(params.opacity),
        base_color_texture: node.texture.as_ref().map(|_| panel_texture.clone()),
        emissive: emissive_color(params.emissive, node.emissive_intensity),
        metallic: params.metallic,
        perceptual_roughness: params.roughness,
        specular_transmission: params.transmission,
        thickness: params.thickness,
        clearcoat: params.clearcoat,
        clearcoat_perceptual_roughness: params.clearcoat_roughness,
        alpha_mode: if params.is_transparent() {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    }
}

/// Spawns a light entity. Ambient light is a resource, so it yields no entity.
fn spawn_light(commands: &mut Commands, light: &LightSpec) -> Option<Entity> {
    let entity = match light.kind {
        LightKind::Ambient => {
            commands.insert_resource(AmbientLight {
                color: light.color,
                brightness: light.intensity * AMBIENT_BRIGHTNESS_PER_UNIT,
                affects_lightmapped_meshes: true,
            });
            return None;
        }
        LightKind::Point { range } => commands.spawn((
            PointLight {
                color: light.color,
                intensity: light.intensity * POINT_LUMENS_PER_UNIT,
                range,
                shadows_enabled: light.cast_shadows,
                ..default()
            },
            Transform::from_translation(light.position),
        )),
        LightKind::Directional => commands.spawn((
            DirectionalLight {
                color: light.color,
                illuminance: light.intensity * DIRECTIONAL_LUX_PER_UNIT,
                shadows_enabled: light.cast_shadows,
                ..default()
            },
            Transform::from_translation(light.position).looking_at(Vec3::ZERO, Vec3::Y),
        )),
        LightKind::Spot { angle, penumbra } => commands.spawn((
            SpotLight {
                color: light.color,
                intensity: light.intensity * SPOT_LUMENS_PER_UNIT,
                range: SPOT_RANGE,
                outer_angle: angle,
                inner_angle: angle * (1.0 - penumbra.clamp(0.0, 1.0)),
                shadows_enabled: light.cast_shadows,
                ..default()
            },
            // Straight down onto the container; Y cannot be the up vector here.
            Transform::from_translation(light.position).looking_at(Vec3::ZERO, Vec3::Z),
        )),
    };
    Some(entity.id())
}
