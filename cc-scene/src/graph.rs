use std::f32::consts::TAU;
use std::sync::Arc;

use bevy::prelude::Vec3;
use rand::Rng;

use crate::layout::{LightSpec, MaterialSpec, PartSpec, SceneLayout, Shape};
use crate::texture::TexturePattern;

/// Index into the scene graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Body,
    Panel,
    Frame,
    Coin,
    Number,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Panel => "panel",
            Self::Frame => "frame",
            Self::Coin => "coin",
            Self::Number => "number",
        }
    }

    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Coin | Self::Number)
    }
}

#[derive(Debug, Clone)]
pub struct SceneEntity {
    id: NodeId,
    kind: EntityKind,
    base_position: Vec3,
    phase: f32,
    pub position: Vec3,
    pub rotation_y: f32,
    pub shape: Shape,
    pub material: MaterialSpec,
    /// Current emissive multiplier, rewritten by the frame update for coins.
    pub emissive_intensity: f32,
    /// Shared surface pattern for textured materials.
    pub texture: Option<Arc<TexturePattern>>,
}

impl SceneEntity {
    fn new(id: NodeId, part: &PartSpec, phase: f32, texture: &Arc<TexturePattern>) -> Self {
        Self {
            id,
            kind: part.kind,
            base_position: part.position,
            phase,
            position: part.position,
            rotation_y: part.rotation_y,
            shape: part.shape,
            emissive_intensity: part.material.emissive_intensity,
            material: part.material.clone(),
            texture: part.material.textured.then(|| Arc::clone(texture)),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Per-entity oscillation offset in `[0, 2π)`, fixed at construction.
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

/// Root group every entity and container light hangs under.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerGroup {
    pub rotation_y: f32,
}

#[derive(Debug, Clone)]
pub struct SceneGraph {
    container: ContainerGroup,
    nodes: Vec<SceneEntity>,
    lights: Vec<LightSpec>,
    texture: Arc<TexturePattern>,
}

impl SceneGraph {
    /// Assembles the static hierarchy. Coins and numbers draw their phase from `rng`.
    pub fn build<R: Rng + ?Sized>(
        layout: &SceneLayout,
        texture: Arc<TexturePattern>,
        rng: &mut R,
    ) -> Self {
        let mut nodes = Vec::with_capacity(
            1 + layout.panels.len()
                + layout.frames.len()
                + layout.coin_positions.len()
                + layout.number_positions.len(),
        );

        let mut push = |part: &PartSpec, phase: f32| {
            let id = NodeId(nodes.len());
            nodes.push(SceneEntity::new(id, part, phase, &texture));
        };

        push(&layout.body, 0.0);
        for panel in &layout.panels {
            push(panel, 0.0);
        }
        for frame in &layout.frames {
            push(frame, 0.0);
        }
        for &position in &layout.coin_positions {
            let part = PartSpec {
                kind: EntityKind::Coin,
                shape: layout.coin_shape,
                position,
                rotation_y: 0.0,
                material: layout.coin_material.clone(),
            };
            push(&part, rng.gen_range(0.0..TAU));
        }
        for &position in &layout.number_positions {
            let part = PartSpec {
                kind: EntityKind::Number,
                shape: layout.number_shape,
                position,
                rotation_y: 0.0,
                material: layout.number_material.clone(),
            };
            push(&part, rng.gen_range(0.0..TAU));
        }

        Self {
            container: ContainerGroup::default(),
            nodes,
            lights: layout.lights.clone(),
            texture,
        }
    }

    pub fn container(&self) -> &ContainerGroup {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut ContainerGroup {
        &mut self.container
    }

    pub fn nodes(&self) -> &[SceneEntity] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [SceneEntity] {
        &mut self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneEntity> {
        self.nodes.get(id.0)
    }

    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &SceneEntity> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn ids_of(&self, kind: EntityKind) -> Vec<NodeId> {
        self.of_kind(kind).map(|n| n.id).collect()
    }

    pub fn coins(&self) -> impl Iterator<Item = &SceneEntity> {
        self.of_kind(EntityKind::Coin)
    }

    pub fn numbers(&self) -> impl Iterator<Item = &SceneEntity> {
        self.of_kind(EntityKind::Number)
    }

    pub fn lights(&self) -> &[LightSpec] {
        &self.lights
    }

    /// The corrugated pattern shared by both panels.
    pub fn texture(&self) -> &Arc<TexturePattern> {
        &self.texture
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
