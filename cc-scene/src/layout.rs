use bevy::prelude::{Color, Vec3};

use crate::graph::EntityKind;

pub const COIN_EMISSIVE_IDLE: f32 = 0.2;
pub const COIN_EMISSIVE_HOVERED: f32 = 0.5;
pub const NUMBER_EMISSIVE: f32 = 1.5;
pub const NUMBER_OPACITY: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { size: Vec3 },
    /// Upright cylinder; the axis runs along Y.
    Cylinder { radius: f32, height: f32, segments: u32 },
    /// Flat quad in the XY plane facing +Z.
    Rectangle { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSpec {
    pub base_color: Color,
    pub opacity: f32,
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    /// Sampled from the shared corrugated pattern.
    pub textured: bool,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            opacity: 1.0,
            metallic: 0.0,
            roughness: 0.5,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            transmission: 0.0,
            thickness: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            textured: false,
        }
    }
}

impl MaterialSpec {
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Point { range: f32 },
    Directional,
    Spot { angle: f32, penumbra: f32 },
}

/// Where a light hangs in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightAttachment {
    /// Child of the container group, rotates with it.
    Container,
    Stage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightSpec {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub cast_shadows: bool,
    pub attachment: LightAttachment,
}

impl LightSpec {
    fn point(color: Color, intensity: f32, position: Vec3, range: f32) -> Self {
        Self {
            kind: LightKind::Point { range },
            color,
            intensity,
            position,
            cast_shadows: false,
            attachment: LightAttachment::Container,
        }
    }

    fn stage(kind: LightKind, color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            kind,
            color,
            intensity,
            position,
            cast_shadows: false,
            attachment: LightAttachment::Stage,
        }
    }

    fn with_shadows(mut self) -> Self {
        self.cast_shadows = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec {
    pub kind: EntityKind,
    pub shape: Shape,
    pub position: Vec3,
    pub rotation_y: f32,
    pub material: MaterialSpec,
}

/// Fixed layout data the graph is assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub body: PartSpec,
    pub panels: [PartSpec; 2],
    pub frames: [PartSpec; 4],
    pub coin_shape: Shape,
    pub coin_material: MaterialSpec,
    pub coin_positions: Vec<Vec3>,
    pub number_shape: Shape,
    pub number_material: MaterialSpec,
    pub number_positions: Vec<Vec3>,
    pub lights: Vec<LightSpec>,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::cyber_container()
    }
}

impl SceneLayout {
    pub fn cyber_container() -> Self {
        let glass = MaterialSpec {
            base_color: Color::srgb_u8(0x0a, 0x0a, 0x1a),
            opacity: 0.3,
            metallic: 0.9,
            roughness: 0.1,
            transmission: 0.9,
            thickness: 0.5,
            clearcoat: 1.0,
            clearcoat_roughness: 0.1,
            ..Default::default()
        };

        let corrugated = MaterialSpec {
            opacity: 0.6,
            metallic: 0.8,
            roughness: 0.4,
            textured: true,
            ..Default::default()
        };

        let frame = MaterialSpec {
            base_color: Color::srgb_u8(0x05, 0x05, 0x10),
            metallic: 0.9,
            roughness: 0.3,
            ..Default::default()
        };

        let panel = |z: f32, rotation_y: f32| PartSpec {
            kind: EntityKind::Panel,
            shape: Shape::Rectangle {
                width: 3.8,
                height: 2.3,
            },
            position: Vec3::new(0.0, 0.0, z),
            rotation_y,
            material: corrugated.clone(),
        };

        let strut = |size: Vec3, position: Vec3| PartSpec {
            kind: EntityKind::Frame,
            shape: Shape::Cuboid { size },
            position,
            rotation_y: 0.0,
            material: frame.clone(),
        };

        let green = Color::srgb_u8(0x00, 0xff, 0x88);
        let gold = Color::srgb_u8(0xff, 0xd7, 0x00);

        Self {
            body: PartSpec {
                kind: EntityKind::Body,
                shape: Shape::Cuboid {
                    size: Vec3::new(4.0, 2.5, 2.0),
                },
                position: Vec3::ZERO,
                rotation_y: 0.0,
                material: glass,
            },
            panels: [
                panel(1.01, 0.0),
                panel(-1.01, std::f32::consts::PI),
            ],
            frames: [
                strut(Vec3::new(4.1, 0.1, 2.1), Vec3::new(0.0, 1.3, 0.0)),
                strut(Vec3::new(4.1, 0.1, 2.1), Vec3::new(0.0, -1.3, 0.0)),
                strut(Vec3::new(0.1, 2.5, 2.1), Vec3::new(2.05, 0.0, 0.0)),
                strut(Vec3::new(0.1, 2.5, 2.1), Vec3::new(-2.05, 0.0, 0.0)),
            ],
            coin_shape: Shape::Cylinder {
                radius: 0.15,
                height: 0.05,
                segments: 32,
            },
            coin_material: MaterialSpec {
                base_color: gold,
                metallic: 0.9,
                roughness: 0.1,
                emissive: Color::srgb_u8(0xff, 0xa5, 0x00),
                emissive_intensity: COIN_EMISSIVE_IDLE,
                ..Default::default()
            },
            coin_positions: vec![
                Vec3::new(-0.8, 0.2, 1.2),
                Vec3::new(-0.4, -0.3, 1.2),
                Vec3::new(0.3, 0.5, 1.2),
                Vec3::new(0.7, -0.1, 1.2),
                Vec3::new(-0.2, 0.8, 1.2),
            ],
            number_shape: Shape::Cuboid {
                size: Vec3::new(0.3, 0.4, 0.05),
            },
            number_material: MaterialSpec {
                base_color: green,
                opacity: NUMBER_OPACITY,
                emissive: green,
                emissive_intensity: NUMBER_EMISSIVE,
                ..Default::default()
            },
            number_positions: vec![
                Vec3::new(-0.6, 0.6, 1.15),
                Vec3::new(0.5, 0.2, 1.15),
                Vec3::new(-0.3, -0.5, 1.15),
                Vec3::new(0.8, 0.7, 1.15),
                Vec3::new(0.1, -0.2, 1.15),
            ],
            lights: vec![
                // Neon glow from inside the container.
                LightSpec::point(green, 3.0, Vec3::new(0.0, 0.0, 0.8), 3.0),
                LightSpec::point(green, 2.0, Vec3::new(0.0, 0.0, -0.8), 3.0),
                // Gold accents in front of the coins.
                LightSpec::point(gold, 1.5, Vec3::new(-0.5, 0.0, 1.0), 2.0),
                LightSpec::point(gold, 1.5, Vec3::new(0.5, 0.0, 1.0), 2.0),
                LightSpec::stage(LightKind::Ambient, Color::WHITE, 0.1, Vec3::ZERO),
                LightSpec::stage(
                    LightKind::Directional,
                    Color::srgb_u8(0x4a, 0x5f, 0xff),
                    1.5,
                    Vec3::new(5.0, 10.0, 5.0),
                )
                .with_shadows(),
                LightSpec::stage(LightKind::Directional, green, 0.8, Vec3::new(-5.0, 5.0, -5.0)),
                LightSpec::stage(
                    LightKind::Spot {
                        angle: 0.6,
                        penumbra: 1.0,
                    },
                    Color::WHITE,
                    2.0,
                    Vec3::new(0.0, 5.0, 0.0),
                )
                .with_shadows(),
            ],
        }
    }
}
