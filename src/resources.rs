//! ECS Resources for use by various systems

use rand::rngs::StdRng;
use specs::Entity;

use crate::components::{Rect, Vec2};

/// Width of the camera's visible region in world pixels (the host renders an
/// 800x416 window at 2x zoom)
pub const CAMERA_WIDTH: f32 = 400.0;
/// Height of the camera's visible region in world pixels
pub const CAMERA_HEIGHT: f32 = 208.0;

/// Resource that represents the time elapsed since the last time all of the
/// systems were run, in milliseconds. Often around one frame (~33 ms at 30
/// fps) but may be larger if the host loop lags.
#[derive(Debug, Clone, Copy)]
pub struct TimeDelta(pub f32);

/// Resource that represents any events that have taken place before the
/// current frame.
///
/// This queue resets every frame
#[derive(Debug, Default)]
pub struct EventQueue(pub Vec<Event>);

impl<'a> IntoIterator for &'a EventQueue {
    type Item = &'a Event;
    type IntoIter = ::std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

/// Represents an event from the user of the application
#[derive(Debug, Clone)]
pub enum Event {
    KeyDown(Key),
    KeyUp(Key),
}

/// The keys the game cares about, already mapped from whatever the host's
/// input layer polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// Resource holding the overlap contacts the physics step found during the
/// current frame. Drained by the combat resolver in the same tick, so no
/// contact survives across frames.
#[derive(Debug, Default)]
pub struct ContactQueue(pub Vec<Contact>);

/// An overlap between two tagged entity groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The player overlapped a patrol agent
    PlayerEnemy(Entity),
    /// The player overlapped the active bullet slot with this index
    PlayerBullet(usize),
}

/// Resource tracking session-level outcomes. The win-condition wiring lives
/// outside this crate and consumes `all_enemies_defeated`.
#[derive(Debug, Default)]
pub struct GameState {
    pub enemies_total: usize,
    pub enemies_defeated: usize,
    /// Times the player has been knocked back to the respawn point
    pub respawns: usize,
}

impl GameState {
    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies_total > 0 && self.enemies_defeated >= self.enemies_total
    }
}

/// Resource exposing the currently visible world rectangle. Follows the
/// camera-focus entity, clamped to the world bounds. Used for the firing
/// visibility gate.
#[derive(Debug, Clone)]
pub struct Camera {
    pub view: Rect,
}

impl Camera {
    pub fn new(center: Vec2, bounds: &WorldBounds) -> Self {
        let mut camera = Self {
            view: Rect::from_center(center, CAMERA_WIDTH, CAMERA_HEIGHT),
        };
        camera.follow(center, bounds);
        camera
    }

    /// Re-centers the view on the given point without leaving the world
    pub fn follow(&mut self, center: Vec2, bounds: &WorldBounds) {
        let max_x = (bounds.width - self.view.width).max(0.0);
        let max_y = (bounds.height - self.view.height).max(0.0);
        self.view.x = (center.x - self.view.width / 2.0).max(0.0).min(max_x);
        self.view.y = (center.y - self.view.height / 2.0).max(0.0).min(max_y);
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.view.contains_point(point)
    }
}

/// Resource describing the playable world rectangle (origin at 0,0)
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// Resource holding the level's solid terrain rectangles, built from the
/// tilemap collaborator's object layers
#[derive(Debug, Default)]
pub struct StaticColliders(pub Vec<Rect>);

/// Resource holding the point the player is teleported to after a bullet hit
#[derive(Debug, Clone, Copy)]
pub struct RespawnPoint(pub Vec2);

/// Resource holding the session's random number generator. Seeded from the
/// session key so a session's patrol randomization is reproducible.
pub struct SessionRng(pub StdRng);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_clamps_to_world_bounds() {
        let bounds = WorldBounds {
            width: 3840.0,
            height: 416.0,
        };

        let camera = Camera::new(Vec2::new(0.0, 0.0), &bounds);
        assert_eq!(camera.view.left(), 0.0);
        assert_eq!(camera.view.top(), 0.0);

        let camera = Camera::new(Vec2::new(3840.0, 416.0), &bounds);
        assert_eq!(camera.view.right(), 3840.0);
        assert_eq!(camera.view.bottom(), 416.0);
    }

    #[test]
    fn camera_centers_when_away_from_edges() {
        let bounds = WorldBounds {
            width: 3840.0,
            height: 416.0,
        };
        let camera = Camera::new(Vec2::new(700.0, 208.0), &bounds);
        assert_eq!(camera.view.center_x(), 700.0);
        assert!(camera.contains(Vec2::new(700.0, 208.0)));
        assert!(!camera.contains(Vec2::new(950.0, 208.0)));
    }

    #[test]
    fn all_enemies_defeated_requires_at_least_one_enemy() {
        let mut state = GameState::default();
        assert!(!state.all_enemies_defeated());

        state.enemies_total = 2;
        state.enemies_defeated = 1;
        assert!(!state.all_enemies_defeated());

        state.enemies_defeated = 2;
        assert!(state.all_enemies_defeated());
    }
}
