//! Components for physics-related uses

use specs::{Component, HashMapStorage, NullStorage, VecStorage};

/// An XY pair in world pixel coordinates (y grows downward, as in the
/// physics collaborator this crate is designed against).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
///
/// Used for static terrain colliders, the camera's visible region, and
/// transient overlap tests between entity bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds the rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Represents the XY world coordinates of the center of an entity.
///
/// This is distinct from the screen coordinates which are bounded by the size
/// of the display.
///
/// Not to be modified outside of the physics system (the combat resolver's
/// respawn teleport is the one exception).
#[derive(Debug, Clone, Component)]
#[storage(VecStorage)]
pub struct Position(pub Vec2);

/// The current velocity of an entity in pixels per second
#[derive(Debug, Clone, Default, Component)]
#[storage(VecStorage)]
pub struct Velocity(pub Vec2);

/// Represents the bounding box centered around an entity's position.
/// BoundingBox alone doesn't mean much without a Position also attached to
/// the entity.
#[derive(Debug, Clone, Component)]
#[storage(VecStorage)]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
}

/// Entities with this component are pulled downward by the physics system and
/// resolved against the level's static colliders. Patrol agents deliberately
/// do not carry it: they hold their spawn height, like the original sprites
/// with gravity disabled.
#[derive(Debug, Clone, Copy, Default, Component)]
#[storage(NullStorage)]
pub struct Gravity;

/// True while the entity is resting on a solid surface. Written by the
/// physics system, read by the input system to gate jumping.
#[derive(Debug, Clone, Copy, Default, Component)]
#[storage(HashMapStorage)]
pub struct Grounded(pub bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_overlap_and_containment() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 4.0, 4.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        assert!(a.contains_point(Vec2::new(3.0, 3.0)));
        assert!(!a.contains_point(Vec2::new(11.0, 3.0)));
    }

    #[test]
    fn rect_from_center_is_centered() {
        let rect = Rect::from_center(Vec2::new(10.0, 20.0), 4.0, 6.0);
        assert_eq!(rect.left(), 8.0);
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.top(), 17.0);
        assert_eq!(rect.bottom(), 23.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }
}
