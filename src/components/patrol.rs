//! The patrol state machine data carried by every enemy agent

use rand::Rng;
use specs::{Component, HashMapStorage};

use super::AnimationKey;

/// Horizontal patrol speed in pixels per second
pub const PATROL_SPEED: f32 = 50.0;
/// Time spent walking before pausing to look around (ms)
pub const WALK_DURATION: f32 = 2000.0;
/// Time spent looking around before resuming the walk (ms)
pub const LOOK_DURATION: f32 = 1000.0;
/// Minimum time between shots from the same agent (ms)
pub const SHOOT_DELAY: f32 = 2000.0;

/// Horizontal facing of a patrol agent. Doubles as the travel direction of
/// anything it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// The sign this facing contributes to a horizontal velocity
    pub fn x_sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The states of the patrol cycle: pace back and forth, pause to look at or
/// away from the screen, resume pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolState {
    Walking,
    LookingFront,
    LookingBack,
}

/// Entities with this component pace within a bounded range around their
/// spawn point and periodically fire at the player. An entity missing any of
/// the other patrol prerequisites (position, velocity, sprite) is simply
/// ignored by the AI system.
#[derive(Debug, Clone, PartialEq, Component)]
#[storage(HashMapStorage)]
pub struct Patrol {
    /// Origin of the patrol, immutable after creation
    pub spawn_x: f32,
    /// Half-width of the excursion from `spawn_x`
    pub range: f32,
    pub speed: f32,
    pub facing: Facing,
    pub state: PatrolState,
    /// Milliseconds elapsed in the current state; reset on every transition
    pub state_timer: f32,
    /// Facing to resume once a looking pause ends
    pub last_facing: Facing,
    /// Milliseconds until the next shot is permitted (<= 0 means ready)
    pub shoot_cooldown: f32,
}

impl Patrol {
    /// A deterministic patrol: walking right, timers at zero
    pub fn new(spawn_x: f32, range: f32) -> Self {
        Self {
            spawn_x,
            range,
            speed: PATROL_SPEED,
            facing: Facing::Right,
            state: PatrolState::Walking,
            state_timer: 0.0,
            last_facing: Facing::Right,
            shoot_cooldown: 0.0,
        }
    }

    /// A patrol with randomized starting state and a random timer offset so
    /// identically-configured agents visibly desynchronize
    pub fn randomized<R: Rng>(rng: &mut R, spawn_x: f32, range: f32) -> Self {
        let facing = if rng.gen_bool(0.5) {
            Facing::Right
        } else {
            Facing::Left
        };
        // Most agents start mid-walk; the rest start mid-pause
        let state = if rng.gen_bool(0.3) {
            if rng.gen_bool(0.5) {
                PatrolState::LookingFront
            } else {
                PatrolState::LookingBack
            }
        } else {
            PatrolState::Walking
        };

        Self {
            facing,
            state,
            state_timer: rng.gen_range(0.0, WALK_DURATION),
            last_facing: facing,
            ..Self::new(spawn_x, range)
        }
    }

    /// Leftmost position the agent may reach
    pub fn min_x(&self) -> f32 {
        self.spawn_x - self.range
    }

    /// Rightmost position the agent may reach
    pub fn max_x(&self) -> f32 {
        self.spawn_x + self.range
    }

    /// The animation matching the current state and facing
    pub fn current_animation(&self) -> AnimationKey {
        match self.state {
            PatrolState::Walking => match self.facing {
                Facing::Left => AnimationKey::EnemyLeft,
                Facing::Right => AnimationKey::EnemyRight,
            },
            PatrolState::LookingFront => AnimationKey::EnemyFront,
            PatrolState::LookingBack => AnimationKey::EnemyBack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn randomized_patrols_start_in_valid_states() {
        let mut rng = StdRng::from_seed([3; 32]);
        let mut seen_walking = false;
        let mut seen_looking = false;

        for _ in 0..500 {
            let patrol = Patrol::randomized(&mut rng, 700.0, 30.0);

            assert!(patrol.state_timer >= 0.0 && patrol.state_timer < WALK_DURATION);
            assert_eq!(patrol.shoot_cooldown, 0.0);
            assert_eq!(patrol.last_facing, patrol.facing);
            assert_eq!(patrol.spawn_x, 700.0);
            assert_eq!(patrol.range, 30.0);

            match patrol.state {
                PatrolState::Walking => seen_walking = true,
                PatrolState::LookingFront | PatrolState::LookingBack => seen_looking = true,
            }
        }

        // Both branches of the spawn randomization must be reachable
        assert!(seen_walking);
        assert!(seen_looking);
    }

    #[test]
    fn current_animation_tracks_state_and_facing() {
        let mut patrol = Patrol::new(0.0, 10.0);
        assert_eq!(patrol.current_animation(), AnimationKey::EnemyRight);

        patrol.facing = Facing::Left;
        assert_eq!(patrol.current_animation(), AnimationKey::EnemyLeft);

        patrol.state = PatrolState::LookingFront;
        assert_eq!(patrol.current_animation(), AnimationKey::EnemyFront);

        patrol.state = PatrolState::LookingBack;
        assert_eq!(patrol.current_animation(), AnimationKey::EnemyBack);
    }

    #[test]
    fn excursion_bounds_are_centered_on_spawn() {
        let patrol = Patrol::new(700.0, 30.0);
        assert_eq!(patrol.min_x(), 670.0);
        assert_eq!(patrol.max_x(), 730.0);
    }
}
