//! Scene composition and per-frame animation for the cyber container icon.
//!
//! Everything in this crate is plain data and arithmetic. The Bevy side
//! (`cc-render`) mounts a [`SceneGraph`] into the world and calls
//! [`animate::update`] once per rendered frame.

pub mod animate;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod layout;
pub mod state;
pub mod texture;

pub use error::SceneError;
pub use graph::{ContainerGroup, EntityKind, NodeId, SceneEntity, SceneGraph};
pub use layout::{LightAttachment, LightKind, LightSpec, MaterialSpec, SceneLayout, Shape};
pub use state::AnimationState;
pub use texture::{TexturePattern, WrapMode};

#[cfg(test)]
mod tests;
