//! Components related to graphics and animation
//!
//! Rendering itself is the job of the host engine; these components are the
//! named-animation seam it consumes. Nothing in this crate steps animation
//! frames.

use specs::{Component, VecStorage};

/// The named animations the renderer knows how to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKey {
    Player,
    EnemyFront,
    EnemyBack,
    EnemyLeft,
    EnemyRight,
}

/// What the renderer should draw for an entity: a named animation plus a
/// horizontal flip for facing
#[derive(Debug, Clone, Component)]
#[storage(VecStorage)]
pub struct Sprite {
    pub animation: AnimationKey,
    pub flip_x: bool,
}

impl Sprite {
    pub fn new(animation: AnimationKey) -> Self {
        Self {
            animation,
            flip_x: false,
        }
    }
}
