//! Level data and entity spawning
//!
//! `LevelConfig` is the seam to the tilemap collaborator: the host parses its
//! map format and hands this crate plain rectangles and spawn points. The
//! demo level mirrors the layout this core was originally tuned against.

use specs::{Builder, World, WorldExt};

use crate::components::{
    BoundingBox, CameraFocus, Gravity, Grounded, KeyboardControlled, Patrol, Player,
    PlayerComponents, Position, Rect, Sprite, Velocity,
};
use crate::components::{AnimationKey, Vec2};
use crate::resources::{GameState, SessionRng};
use component_group::ComponentGroup;

/// Player bounding box (the original shrinks the sprite's body to roughly
/// 60% x 90% of its 18x26 display size)
pub const PLAYER_SIZE: (f32, f32) = (12.0, 24.0);
/// Patrol agent bounding box (72 px frames scaled to 40%)
pub const ENEMY_SIZE: (f32, f32) = (28.0, 28.0);

/// Where a single patrol agent starts and how far it may wander
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub range: f32,
}

/// Everything the session needs to know about a level
#[derive(Debug, Clone)]
pub struct LevelConfig {
    pub width: f32,
    pub height: f32,
    /// Player start, also the respawn point after a bullet hit
    pub player_spawn: Vec2,
    /// Solid terrain rectangles from the map's object layers
    pub colliders: Vec<Rect>,
    pub enemies: Vec<EnemySpawn>,
}

impl LevelConfig {
    /// The built-in demo level: a 240x26 tile map (16 px tiles) with a ground
    /// plane, a handful of platforms, and ten patrol agents
    pub fn demo() -> Self {
        let spawn = |x, y, range| EnemySpawn { x, y, range };
        Self {
            width: 240.0 * 16.0,
            height: 26.0 * 16.0,
            player_spawn: Vec2::new(350.0, 316.0),
            colliders: vec![
                // ground
                Rect::new(0.0, 384.0, 3840.0, 32.0),
                // parkour platforms
                Rect::new(1072.0, 320.0, 48.0, 16.0),
                Rect::new(976.0, 256.0, 64.0, 16.0),
                Rect::new(1135.0, 240.0, 49.0, 16.0),
                // locked-bars area
                Rect::new(1504.0, 304.0, 32.0, 16.0),
                Rect::new(1536.0, 304.0, 32.0, 16.0),
                Rect::new(1568.0, 304.0, 32.0, 16.0),
                Rect::new(1440.0, 240.0, 48.0, 16.0),
                Rect::new(1616.0, 240.0, 48.0, 16.0),
            ],
            enemies: vec![
                // ground level
                spawn(700.0, 368.0, 30.0),
                spawn(750.0, 368.0, 30.0),
                // parkour platforms
                spawn(1096.0, 305.0, 20.0),
                spawn(1008.0, 240.0, 25.0),
                spawn(1160.0, 225.0, 20.0),
                // locked-bars platforms
                spawn(1520.0, 289.0, 10.0),
                spawn(1552.0, 289.0, 10.0),
                spawn(1584.0, 289.0, 10.0),
                spawn(1464.0, 225.0, 15.0),
                spawn(1640.0, 225.0, 15.0),
            ],
        }
    }
}

/// Spawns the player and every patrol agent into the world. Patrol start
/// states draw from the session RNG so two sessions with the same key place
/// identically-behaving agents.
pub fn populate(world: &mut World, config: &LevelConfig) {
    let player = PlayerComponents {
        keyboard_controlled: KeyboardControlled,
        camera_focus: CameraFocus,
        player: Player,
        gravity: Gravity,
        grounded: Grounded(false),
        position: Position(config.player_spawn),
        velocity: Velocity::default(),
        bounding_box: BoundingBox {
            width: PLAYER_SIZE.0,
            height: PLAYER_SIZE.1,
        },
        sprite: Sprite::new(AnimationKey::Player),
    };
    player.create(world);

    let patrols: Vec<Patrol> = {
        let mut rng = world.write_resource::<SessionRng>();
        config
            .enemies
            .iter()
            .map(|spawn| Patrol::randomized(&mut rng.0, spawn.x, spawn.range))
            .collect()
    };

    for (spawn, patrol) in config.enemies.iter().zip(patrols) {
        let sprite = Sprite::new(patrol.current_animation());
        world
            .create_entity()
            .with(Position(Vec2::new(spawn.x, spawn.y)))
            .with(Velocity::default())
            .with(BoundingBox {
                width: ENEMY_SIZE.0,
                height: ENEMY_SIZE.1,
            })
            .with(sprite)
            .with(patrol)
            .build();
    }

    world.write_resource::<GameState>().enemies_total = config.enemies.len();
}
