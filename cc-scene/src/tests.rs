use std::f32::consts::{FRAC_PI_4, TAU};
use std::sync::Arc;

use bevy::prelude::Vec3;
use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animate::{self, CONTAINER_SPIN_STEP, COIN_SPIN_STEP};
use crate::interaction::{export_snapshot, set_hovered, toggle_auto_rotate};
use crate::layout::{COIN_EMISSIVE_HOVERED, COIN_EMISSIVE_IDLE, NUMBER_EMISSIVE};
use crate::texture::{BASE_COLOR, SEAM_COLOR};
use crate::{AnimationState, EntityKind, SceneError, SceneGraph, SceneLayout, TexturePattern};

fn icon_graph(seed: u64) -> SceneGraph {
    let texture = Arc::new(TexturePattern::generate(512, 512, 20).unwrap());
    let mut rng = StdRng::seed_from_u64(seed);
    SceneGraph::build(&SceneLayout::cyber_container(), texture, &mut rng)
}

fn single_coin_graph() -> SceneGraph {
    let mut layout = SceneLayout::cyber_container();
    layout.coin_positions = vec![Vec3::new(0.0, 0.5, 1.2)];
    layout.number_positions.clear();
    let texture = Arc::new(TexturePattern::generate(8, 8, 2).unwrap());
    let mut rng = StdRng::seed_from_u64(0);
    SceneGraph::build(&layout, texture, &mut rng)
}

#[test]
fn builds_full_hierarchy() {
    let graph = icon_graph(1);
    assert_eq!(graph.of_kind(EntityKind::Body).count(), 1);
    assert_eq!(graph.of_kind(EntityKind::Panel).count(), 2);
    assert_eq!(graph.of_kind(EntityKind::Frame).count(), 4);
    assert_eq!(graph.coins().count(), 5);
    assert_eq!(graph.numbers().count(), 5);
    assert_eq!(graph.lights().len(), 8);
    for (idx, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id().0, idx);
    }
}

#[test]
fn phases_are_in_range_and_seeded() {
    let a = icon_graph(42);
    let b = icon_graph(42);
    for node in a.nodes().iter().filter(|n| n.kind().is_animated()) {
        assert!((0.0..TAU).contains(&node.phase()));
    }
    let phases_a: Vec<f32> = a.nodes().iter().map(|n| n.phase()).collect();
    let phases_b: Vec<f32> = b.nodes().iter().map(|n| n.phase()).collect();
    assert_eq!(phases_a, phases_b);
}

#[test]
fn phase_survives_updates() {
    let mut graph = icon_graph(7);
    let before: Vec<f32> = graph.nodes().iter().map(|n| n.phase()).collect();
    let state = AnimationState::default();
    for frame in 0..120 {
        animate::update(frame as f32 / 60.0, &state, &mut graph);
    }
    let after: Vec<f32> = graph.nodes().iter().map(|n| n.phase()).collect();
    assert_eq!(before, after);
}

#[test]
fn coin_height_depends_only_on_time() {
    let mut graph = icon_graph(3);
    let state = AnimationState::default();
    let coin = graph.coins().next().unwrap().id();

    animate::update(1.25, &state, &mut graph);
    let first = graph.node(coin).unwrap().clone();
    animate::update(1.25, &state, &mut graph);
    let second = graph.node(coin).unwrap();

    assert_eq!(first.position.y, second.position.y);
    assert!((second.rotation_y - first.rotation_y - COIN_SPIN_STEP).abs() < 1e-6);
}

#[test]
fn accumulators_advance_per_call() {
    let mut graph = icon_graph(5);
    let state = AnimationState::default();
    for _ in 0..10 {
        animate::update(0.0, &state, &mut graph);
    }
    assert!((graph.container().rotation_y - 10.0 * CONTAINER_SPIN_STEP).abs() < 1e-6);
    for coin in graph.coins() {
        assert!((coin.rotation_y - 10.0 * COIN_SPIN_STEP).abs() < 1e-5);
    }
    for number in graph.numbers() {
        assert_eq!(number.rotation_y, 0.0);
    }
}

#[test]
fn bob_offsets_match_reference_points() {
    assert_eq!(animate::bob_offset(0.0, 2.0, 0.1, 0.0), 0.0);
    let quarter = animate::bob_offset(FRAC_PI_4, 2.0, 0.1, 0.0);
    assert!((quarter - 0.1).abs() < 1e-6);
}

#[test]
fn coin_offset_tracks_phase() {
    let mut graph = single_coin_graph();
    let state = AnimationState::default();
    let coin = graph.coins().next().unwrap().id();
    let phase = graph.node(coin).unwrap().phase();

    animate::update(0.0, &state, &mut graph);
    let node = graph.node(coin).unwrap();
    let expected = 0.5 + 0.1 * phase.sin();
    assert!((node.position.y - expected).abs() < 1e-6);
    assert_eq!(node.position.x, 0.0);
    assert_eq!(node.position.z, 1.2);

    let t = FRAC_PI_4;
    animate::update(t, &state, &mut graph);
    let expected = 0.5 + 0.1 * (2.0 * t + phase).sin();
    assert!((graph.node(coin).unwrap().position.y - expected).abs() < 1e-6);
}

#[test]
fn number_bob_and_glow() {
    let mut graph = icon_graph(9);
    let state = AnimationState::default();
    animate::update(2.0, &state, &mut graph);
    for number in graph.numbers() {
        let expected = number.base_position().y + 0.15 * (1.5 * 2.0 + number.phase()).sin();
        assert!((number.position.y - expected).abs() < 1e-6);
        assert_eq!(number.emissive_intensity, NUMBER_EMISSIVE);
        assert!(number.material.is_transparent());
    }
}

#[test]
fn static_parts_do_not_move() {
    let mut graph = icon_graph(11);
    let state = AnimationState::default();
    let before: Vec<Vec3> = graph
        .nodes()
        .iter()
        .filter(|n| !n.kind().is_animated())
        .map(|n| n.position)
        .collect();
    animate::update(3.0, &state, &mut graph);
    let after: Vec<Vec3> = graph
        .nodes()
        .iter()
        .filter(|n| !n.kind().is_animated())
        .map(|n| n.position)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn hover_sets_coin_glow() {
    let mut graph = icon_graph(13);
    let mut state = AnimationState::default();
    let coins = graph.ids_of(EntityKind::Coin);
    set_hovered(&mut state, coins[2], true);

    animate::update(0.5, &state, &mut graph);
    for coin in graph.coins() {
        let expected = if coin.id() == coins[2] {
            COIN_EMISSIVE_HOVERED
        } else {
            COIN_EMISSIVE_IDLE
        };
        assert_eq!(coin.emissive_intensity, expected);
    }

    set_hovered(&mut state, coins[2], false);
    animate::update(0.5, &state, &mut graph);
    assert_eq!(
        graph.node(coins[2]).unwrap().emissive_intensity,
        COIN_EMISSIVE_IDLE
    );
}

#[test]
fn toggle_freezes_rotation_without_reset() {
    let mut graph = icon_graph(17);
    let mut state = AnimationState::default();
    let original = state.auto_rotate;

    for _ in 0..5 {
        animate::update(0.0, &state, &mut graph);
    }
    let spun = graph.container().rotation_y;

    assert!(!toggle_auto_rotate(&mut state));
    for _ in 0..5 {
        animate::update(0.0, &state, &mut graph);
    }
    assert_eq!(graph.container().rotation_y, spun);

    assert!(toggle_auto_rotate(&mut state));
    assert_eq!(state.auto_rotate, original);
    assert_eq!(graph.container().rotation_y, spun);
}

#[test]
fn repeated_hover_is_idempotent() {
    let graph = icon_graph(19);
    let mut state = AnimationState::default();
    let coin = graph.ids_of(EntityKind::Coin)[0];

    set_hovered(&mut state, coin, true);
    set_hovered(&mut state, coin, true);
    assert_eq!(state.hovered.len(), 1);
    assert!(state.is_hovered(coin));

    set_hovered(&mut state, coin, false);
    set_hovered(&mut state, coin, false);
    assert!(state.hovered.is_empty());
}

#[test]
fn icon_texture_stripe_boundaries() {
    let tex = TexturePattern::generate(512, 512, 20).unwrap();
    assert_eq!(tex.pixel(0, 0), Some(SEAM_COLOR));
    assert_eq!(tex.pixel(40, 0), Some(SEAM_COLOR));
    assert_eq!(tex.pixel(40, 511), Some(SEAM_COLOR));
    for x in (1..20).chain(21..40) {
        assert_eq!(tex.pixel(x, 100), Some(BASE_COLOR), "column {x}");
    }
}

#[test]
fn panels_share_one_texture() {
    let graph = icon_graph(23);
    let panels: Vec<_> = graph.of_kind(EntityKind::Panel).collect();
    let front = panels[0].texture.as_ref().unwrap();
    let back = panels[1].texture.as_ref().unwrap();
    assert!(Arc::ptr_eq(front, back));
    assert!(Arc::ptr_eq(front, graph.texture()));
    assert!(
        graph
            .nodes()
            .iter()
            .filter(|n| n.kind() != EntityKind::Panel)
            .all(|n| n.texture.is_none())
    );
}

#[test]
fn export_without_surface_is_reported() {
    assert!(matches!(
        export_snapshot(None),
        Err(SceneError::NoCanvasAvailable)
    ));
}

#[test]
fn export_encodes_png() {
    let frame = RgbaImage::from_pixel(4, 3, image::Rgba([0, 8, 20, 255]));
    let bytes = export_snapshot(Some(&frame)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (4, 3));
}

#[test]
fn state_reset_clears_hover() {
    let graph = icon_graph(29);
    let mut state = AnimationState::new(false);
    set_hovered(&mut state, graph.ids_of(EntityKind::Coin)[1], true);
    state.reset(true);
    assert!(state.auto_rotate);
    assert!(state.hovered.is_empty());
}

#[test]
fn encode_error_keeps_source() {
    use std::error::Error;

    let cause = image::ImageError::Limits(image::error::LimitError::from_kind(
        image::error::LimitErrorKind::DimensionError,
    ));
    let err = SceneError::from(cause);
    assert!(matches!(err, SceneError::Encode(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("failed to encode snapshot"));
}
