use std::collections::HashSet;

use bevy::prelude::Resource;

use crate::NodeId;

/// Mutable per-mount state shared by the UI and the frame update.
#[derive(Debug, Clone, PartialEq, Eq, Resource)]
pub struct AnimationState {
    pub auto_rotate: bool,
    pub hovered: HashSet<NodeId>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            hovered: HashSet::new(),
        }
    }
}

impl AnimationState {
    pub fn new(auto_rotate: bool) -> Self {
        Self {
            auto_rotate,
            ..Default::default()
        }
    }

    pub fn is_hovered(&self, id: NodeId) -> bool {
        self.hovered.contains(&id)
    }

    pub fn reset(&mut self, auto_rotate: bool) {
        self.auto_rotate = auto_rotate;
        self.hovered.clear();
    }
}
