use crate::layout::{COIN_EMISSIVE_HOVERED, COIN_EMISSIVE_IDLE, NUMBER_EMISSIVE, NUMBER_OPACITY};
use crate::{AnimationState, EntityKind, SceneGraph};

pub const COIN_BOB_AMPLITUDE: f32 = 0.1;
pub const COIN_BOB_FREQUENCY: f32 = 2.0;
/// Radians added to each coin's spin per frame.
pub const COIN_SPIN_STEP: f32 = 0.02;

pub const NUMBER_BOB_AMPLITUDE: f32 = 0.15;
pub const NUMBER_BOB_FREQUENCY: f32 = 1.5;

/// Radians added to the container's yaw per frame while auto-rotate is on.
pub const CONTAINER_SPIN_STEP: f32 = 0.003;

/// Vertical offset of an oscillating entity at `elapsed` seconds.
pub fn bob_offset(elapsed: f32, frequency: f32, amplitude: f32, phase: f32) -> f32 {
    amplitude * (elapsed * frequency + phase).sin()
}

/// Advances the scene by one rendered frame.
///
/// Positions are recomputed from `elapsed`; spins accumulate a fixed step per
/// call, so this must run at most once per frame.
pub fn update(elapsed: f32, state: &AnimationState, graph: &mut SceneGraph) {
    for node in graph.nodes_mut() {
        match node.kind() {
            EntityKind::Coin => {
                let base = node.base_position();
                node.position.y = base.y
                    + bob_offset(elapsed, COIN_BOB_FREQUENCY, COIN_BOB_AMPLITUDE, node.phase());
                node.rotation_y += COIN_SPIN_STEP;
                node.emissive_intensity = if state.is_hovered(node.id()) {
                    COIN_EMISSIVE_HOVERED
                } else {
                    COIN_EMISSIVE_IDLE
                };
            }
            EntityKind::Number => {
                let base = node.base_position();
                node.position.y = base.y
                    + bob_offset(
                        elapsed,
                        NUMBER_BOB_FREQUENCY,
                        NUMBER_BOB_AMPLITUDE,
                        node.phase(),
                    );
                node.emissive_intensity = NUMBER_EMISSIVE;
                node.material.opacity = NUMBER_OPACITY;
            }
            EntityKind::Body | EntityKind::Panel | EntityKind::Frame => {}
        }
    }

    if state.auto_rotate {
        graph.container_mut().rotation_y += CONTAINER_SPIN_STEP;
    }
}
