use specs::prelude::ResourceId;
use specs::{Join, ReadExpect, ReadStorage, System, SystemData, World, WriteStorage};

use crate::components::{Grounded, KeyboardControlled, Sprite, Velocity};
use crate::resources::{Event, EventQueue, Key};

/// Horizontal run speed in pixels per second
const MOVEMENT_SPEED: f32 = 140.0;
/// Upward impulse applied on jump (y grows downward)
const JUMP_VELOCITY: f32 = -350.0;

#[derive(SystemData)]
pub struct KeyboardData<'a> {
    events: ReadExpect<'a, EventQueue>,
    keyboard_controlled: ReadStorage<'a, KeyboardControlled>,
    groundeds: ReadStorage<'a, Grounded>,
    velocities: WriteStorage<'a, Velocity>,
    sprites: WriteStorage<'a, Sprite>,
}

pub struct Keyboard;

impl<'a> System<'a> for Keyboard {
    type SystemData = KeyboardData<'a>;

    fn run(&mut self, data: Self::SystemData) {
        let KeyboardData {
            events,
            keyboard_controlled,
            groundeds,
            mut velocities,
            mut sprites,
        } = data;

        for (Velocity(vel), sprite, grounded, _) in (
            &mut velocities,
            &mut sprites,
            &groundeds,
            &keyboard_controlled,
        )
            .join()
        {
            use self::Event::*;
            use self::Key::*;

            // Held keys persist as velocity between frames; a release only
            // stops the player if they are still moving in that direction
            for event in &*events {
                match event {
                    KeyDown(Left) => {
                        vel.x = -MOVEMENT_SPEED;
                        sprite.flip_x = true;
                    }
                    KeyDown(Right) => {
                        vel.x = MOVEMENT_SPEED;
                        sprite.flip_x = false;
                    }
                    KeyUp(Left) if vel.x < 0.0 => vel.x = 0.0,
                    KeyUp(Right) if vel.x > 0.0 => vel.x = 0.0,
                    KeyDown(Jump) if grounded.0 => vel.y = JUMP_VELOCITY,
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use specs::{Builder, RunNow, World, WorldExt};

    use crate::components::{AnimationKey, Position, Vec2};

    fn test_world(grounded: bool) -> (World, specs::Entity) {
        let mut world = World::new();
        world.register::<KeyboardControlled>();
        world.register::<Grounded>();
        world.register::<Velocity>();
        world.register::<Sprite>();
        world.register::<Position>();
        world.insert(EventQueue::default());

        let player = world
            .create_entity()
            .with(KeyboardControlled)
            .with(Grounded(grounded))
            .with(Position(Vec2::new(0.0, 0.0)))
            .with(Velocity::default())
            .with(Sprite::new(AnimationKey::Player))
            .build();
        (world, player)
    }

    fn run_with(world: &mut World, events: Vec<Event>) {
        *world.write_resource::<EventQueue>() = EventQueue(events);
        Keyboard.run_now(world);
    }

    #[test]
    fn left_right_set_velocity_and_facing() {
        let (mut world, player) = test_world(true);

        run_with(&mut world, vec![Event::KeyDown(Key::Left)]);
        {
            let velocities = world.read_storage::<Velocity>();
            let sprites = world.read_storage::<Sprite>();
            assert_eq!(velocities.get(player).unwrap().0.x, -MOVEMENT_SPEED);
            assert!(sprites.get(player).unwrap().flip_x);
        }

        run_with(&mut world, vec![Event::KeyDown(Key::Right)]);
        {
            let velocities = world.read_storage::<Velocity>();
            let sprites = world.read_storage::<Sprite>();
            assert_eq!(velocities.get(player).unwrap().0.x, MOVEMENT_SPEED);
            assert!(!sprites.get(player).unwrap().flip_x);
        }
    }

    #[test]
    fn release_only_stops_matching_direction() {
        let (mut world, player) = test_world(true);

        run_with(&mut world, vec![Event::KeyDown(Key::Right)]);
        // Releasing the other key must not cancel the current movement
        run_with(&mut world, vec![Event::KeyUp(Key::Left)]);
        assert_eq!(
            world.read_storage::<Velocity>().get(player).unwrap().0.x,
            MOVEMENT_SPEED
        );

        run_with(&mut world, vec![Event::KeyUp(Key::Right)]);
        assert_eq!(world.read_storage::<Velocity>().get(player).unwrap().0.x, 0.0);
    }

    #[test]
    fn jump_requires_solid_ground() {
        let (mut world, player) = test_world(false);
        run_with(&mut world, vec![Event::KeyDown(Key::Jump)]);
        assert_eq!(world.read_storage::<Velocity>().get(player).unwrap().0.y, 0.0);

        let (mut world, player) = test_world(true);
        run_with(&mut world, vec![Event::KeyDown(Key::Jump)]);
        assert_eq!(
            world.read_storage::<Velocity>().get(player).unwrap().0.y,
            JUMP_VELOCITY
        );
    }
}
