//! The projectile pool: a fixed number of reusable bullet slots
//!
//! Bullets are created once at pool construction and only ever recycled, so
//! sustained fire never allocates. "Destroying" a bullet just deactivates its
//! slot.

use crate::components::Vec2;
use crate::resources::WorldBounds;

/// Number of slots in the pool; the hard cap on simultaneously active bullets
pub const BULLET_CAPACITY: usize = 50;
/// Horizontal bullet speed in pixels per second
pub const BULLET_SPEED: f32 = 200.0;
/// Lifetime budget of a bullet in milliseconds; expired bullets are released
/// by the per-tick sweep regardless of position
pub const BULLET_TTL: f32 = 3000.0;
/// Square bounding box side used for bullet overlap tests
pub const BULLET_SIZE: f32 = 8.0;

// Inactive slots are parked here so stale geometry can never overlap anything
const PARKED: Vec2 = Vec2 {
    x: -1000.0,
    y: -1000.0,
};

/// One pooled projectile slot
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Pool occupancy flag; an inactive bullet has no collision effect
    pub active: bool,
    pub position: Vec2,
    /// Sign is the travel direction
    pub velocity_x: f32,
    /// Milliseconds of lifetime left before the sweep forcibly expires it
    pub ttl_remaining: f32,
}

impl Bullet {
    fn parked() -> Self {
        Self {
            active: false,
            position: PARKED,
            velocity_x: 0.0,
            ttl_remaining: 0.0,
        }
    }
}

/// Fixed-capacity pool of bullet slots
#[derive(Debug)]
pub struct BulletPool {
    slots: Vec<Bullet>,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::with_capacity(BULLET_CAPACITY)
    }
}

impl BulletPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Bullet::parked(); capacity],
        }
    }

    /// Claims an inactive slot, repositions it to `(x, y)` with a fresh
    /// lifetime, and returns it for the caller to aim. Returns `None` when
    /// every slot is active — pool exhaustion is a normal outcome and the
    /// caller is expected to silently skip firing.
    pub fn acquire(&mut self, x: f32, y: f32) -> Option<&mut Bullet> {
        let slot = self.slots.iter_mut().find(|slot| !slot.active)?;
        slot.active = true;
        slot.position = Vec2::new(x, y);
        slot.velocity_x = 0.0;
        slot.ttl_remaining = BULLET_TTL;
        Some(slot)
    }

    /// Deactivates the slot, zeroes its velocity, and parks it off-world.
    /// Releasing an already-inactive slot is a no-op, so the sweep and the
    /// combat resolver can race freely.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Bullet::parked();
        }
    }

    /// Releases every active slot. Used as a blanket reset when the player is
    /// hit, so simultaneous overlaps cannot cascade into repeated respawns.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            *slot = Bullet::parked();
        }
    }

    /// Per-tick sweep: ticks down each active slot's lifetime and releases
    /// any slot that has expired or left the world. Both expiry paths share
    /// this one check, so there is no timer/sweep race to worry about.
    pub fn expire_stale(&mut self, dt: f32, bounds: &WorldBounds) {
        for i in 0..self.slots.len() {
            let slot = &mut self.slots[i];
            if !slot.active {
                continue;
            }
            slot.ttl_remaining -= dt;
            if slot.ttl_remaining <= 0.0 || !bounds.contains(slot.position) {
                self.release(i);
            }
        }
    }

    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Bullet] {
        &mut self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }
}
