//! Components related to character specific properties

use component_group::ComponentGroup;
use specs::{Component, NullStorage};

/// All the components of a player. Grouped together so a fresh session can
/// spawn the player in one place and Rust will complain if a field is ever
/// forgotten.
#[derive(Debug, ComponentGroup)]
pub struct PlayerComponents {
    //IMPORTANT NOTE: Only components that are *guaranteed* to be present on a
    // player should go here. If a component may be removed for some reason,
    // this may cause a panic at runtime.
    pub keyboard_controlled: KeyboardControlled,
    pub camera_focus: CameraFocus,
    pub player: Player,
    pub gravity: super::Gravity,
    pub grounded: super::Grounded,
    pub position: super::Position,
    pub velocity: super::Velocity,
    pub bounding_box: super::BoundingBox,
    pub sprite: super::Sprite,
}

/// The keyboard controlled player. Only one entity should hold this at a
/// given time.
#[derive(Debug, Clone, Copy, Default, Component)]
#[storage(NullStorage)]
pub struct KeyboardControlled;

/// The entity with this component and a Position component will be centered
/// in the camera. Only one entity should hold this at a given time.
#[derive(Debug, Clone, Copy, Default, Component)]
#[storage(NullStorage)]
pub struct CameraFocus;

/// Entities with this component are targeted by patrol agents and take part
/// in stomp/bullet contact resolution
#[derive(Debug, Clone, Copy, Default, Component)]
#[storage(NullStorage)]
pub struct Player;
