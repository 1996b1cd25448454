//! The game session: one world, one dispatcher, one tick per rendered frame

use specs::{Dispatcher, DispatcherBuilder, World, WorldExt};

use crate::bullets::BulletPool;
use crate::key::SessionKey;
use crate::level::{self, LevelConfig};
use crate::resources::{
    Camera, ContactQueue, Event, EventQueue, GameState, RespawnPoint, SessionRng, StaticColliders,
    TimeDelta, WorldBounds,
};
use crate::systems;

/// Owns all state for one play-through of a level. A new session is a fresh
/// world: restarting the level means building a new session, never patching
/// up an old one.
pub struct GameSession<'a, 'b> {
    dispatcher: Dispatcher<'a, 'b>,
    world: World,
}

impl<'a, 'b> GameSession<'a, 'b> {
    pub fn new(config: LevelConfig, key: SessionKey) -> Self {
        let mut world = World::new();

        let bounds = WorldBounds {
            width: config.width,
            height: config.height,
        };
        world.insert(TimeDelta(0.0));
        world.insert(EventQueue::default());
        world.insert(ContactQueue::default());
        world.insert(GameState::default());
        world.insert(Camera::new(config.player_spawn, &bounds));
        world.insert(bounds);
        world.insert(StaticColliders(config.colliders.clone()));
        world.insert(RespawnPoint(config.player_spawn));
        world.insert(BulletPool::default());
        world.insert(SessionRng(key.to_rng()));

        // Input applies before the AI and the physics step; contacts resolve
        // after everything has moved
        let mut dispatcher = DispatcherBuilder::new()
            .with(systems::Keyboard, "Keyboard", &[])
            .with(systems::AI, "AI", &[])
            .with(systems::Physics, "Physics", &["Keyboard", "AI"])
            .with(systems::Projectiles, "Projectiles", &["Physics"])
            .with(systems::Interactions, "Interactions", &["Physics", "Projectiles"])
            .build();
        dispatcher.setup(&mut world);

        level::populate(&mut world, &config);

        Self { dispatcher, world }
    }

    /// Dispatch the given events and update the state based on the time that
    /// has elapsed. The whole tick is synchronous: it completes before the
    /// host loop asks for the next frame.
    pub fn dispatch(&mut self, delta: TimeDelta, events: Vec<Event>) {
        *self.world.write_resource::<TimeDelta>() = delta;
        *self.world.write_resource::<EventQueue>() = EventQueue(events);
        self.world.write_resource::<ContactQueue>().0.clear();

        self.dispatcher.dispatch(&self.world);

        // Register any deletions
        self.world.maintain();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
