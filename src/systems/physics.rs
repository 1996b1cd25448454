use specs::prelude::ResourceId;
use specs::{
    Entities, Join, ReadExpect, ReadStorage, System, SystemData, World, WriteExpect,
    WriteStorage,
};

use crate::components::{
    BoundingBox, CameraFocus, Gravity, Grounded, Patrol, Player, Position, Rect, Velocity,
};
use crate::resources::{Camera, Contact, ContactQueue, StaticColliders, TimeDelta, WorldBounds};

/// Downward acceleration in pixels per second squared
const GRAVITY: f32 = 800.0;

#[derive(SystemData)]
pub struct PhysicsData<'a> {
    entities: Entities<'a>,
    delta: ReadExpect<'a, TimeDelta>,
    bounds: ReadExpect<'a, WorldBounds>,
    colliders: ReadExpect<'a, StaticColliders>,
    camera: WriteExpect<'a, Camera>,
    contacts: WriteExpect<'a, ContactQueue>,
    gravities: ReadStorage<'a, Gravity>,
    patrols: ReadStorage<'a, Patrol>,
    players: ReadStorage<'a, Player>,
    camera_focus: ReadStorage<'a, CameraFocus>,
    bounding_boxes: ReadStorage<'a, BoundingBox>,
    positions: WriteStorage<'a, Position>,
    velocities: WriteStorage<'a, Velocity>,
    groundeds: WriteStorage<'a, Grounded>,
}

pub struct Physics;

impl<'a> System<'a> for Physics {
    type SystemData = PhysicsData<'a>;

    fn run(&mut self, data: Self::SystemData) {
        let PhysicsData {
            entities,
            delta,
            bounds,
            colliders,
            mut camera,
            mut contacts,
            gravities,
            patrols,
            players,
            camera_focus,
            bounding_boxes,
            mut positions,
            mut velocities,
            mut groundeds,
        } = data;

        let dt = delta.0 / 1000.0;

        // Integrate velocities. Patrol agents are clamped to their excursion
        // so the walk can never overshoot the range before the AI flips it.
        for (entity, Position(pos), Velocity(vel)) in
            (&entities, &mut positions, &mut velocities).join()
        {
            if gravities.contains(entity) {
                vel.y += GRAVITY * dt;
            }
            pos.x += vel.x * dt;
            pos.y += vel.y * dt;

            if let Some(patrol) = patrols.get(entity) {
                pos.x = pos.x.max(patrol.min_x()).min(patrol.max_x());
            }
        }

        // Resolve gravity-bound bodies against the level's solid rectangles
        // and the world edges
        for (entity, Position(pos), Velocity(vel), bb, _) in (
            &entities,
            &mut positions,
            &mut velocities,
            &bounding_boxes,
            &gravities,
        )
            .join()
        {
            let mut on_ground = false;

            for collider in colliders.0.iter() {
                let body = Rect::from_center(*pos, bb.width, bb.height);
                if !body.intersects(collider) {
                    continue;
                }

                let pen_x = (body.right() - collider.left()).min(collider.right() - body.left());
                let pen_y = (body.bottom() - collider.top()).min(collider.bottom() - body.top());

                // Push out along the shallower axis
                if pen_y <= pen_x {
                    if pos.y < collider.center_y() {
                        pos.y -= pen_y;
                        if vel.y > 0.0 {
                            vel.y = 0.0;
                        }
                        on_ground = true;
                    } else {
                        pos.y += pen_y;
                        if vel.y < 0.0 {
                            vel.y = 0.0;
                        }
                    }
                } else if pos.x < collider.center_x() {
                    pos.x -= pen_x;
                } else {
                    pos.x += pen_x;
                }
            }

            let half_w = bb.width / 2.0;
            let half_h = bb.height / 2.0;
            pos.x = pos.x.max(half_w).min(bounds.width - half_w);
            if pos.y < half_h {
                pos.y = half_h;
                if vel.y < 0.0 {
                    vel.y = 0.0;
                }
            } else if pos.y > bounds.height - half_h {
                pos.y = bounds.height - half_h;
                if vel.y > 0.0 {
                    vel.y = 0.0;
                }
                on_ground = true;
            }

            if let Some(grounded) = groundeds.get_mut(entity) {
                grounded.0 = on_ground;
            }
        }

        // Camera tracks the focused entity
        if let Some((Position(center), _)) = (&positions, &camera_focus).join().next() {
            camera.follow(*center, &bounds);
        }

        // Report player/enemy overlaps for the combat resolver to judge
        let player = (&entities, &players, &positions, &bounding_boxes)
            .join()
            .next();
        if let Some((_, _, Position(player_pos), player_bb)) = player {
            let player_body = Rect::from_center(*player_pos, player_bb.width, player_bb.height);
            for (enemy, _, Position(enemy_pos), enemy_bb) in
                (&entities, &patrols, &positions, &bounding_boxes).join()
            {
                let enemy_body = Rect::from_center(*enemy_pos, enemy_bb.width, enemy_bb.height);
                if player_body.intersects(&enemy_body) {
                    contacts.0.push(Contact::PlayerEnemy(enemy));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use specs::{Builder, Entity, RunNow, World, WorldExt};

    use crate::components::Vec2;

    const DT: f32 = 16.0;

    fn test_world() -> World {
        let mut world = World::new();
        world.register::<Gravity>();
        world.register::<Grounded>();
        world.register::<Patrol>();
        world.register::<Player>();
        world.register::<CameraFocus>();
        world.register::<BoundingBox>();
        world.register::<Position>();
        world.register::<Velocity>();

        let bounds = WorldBounds {
            width: 3840.0,
            height: 416.0,
        };
        world.insert(TimeDelta(DT));
        world.insert(Camera::new(Vec2::new(350.0, 316.0), &bounds));
        world.insert(bounds);
        world.insert(StaticColliders(vec![Rect::new(0.0, 384.0, 3840.0, 32.0)]));
        world.insert(ContactQueue::default());
        world
    }

    fn spawn_player(world: &mut World, pos: Vec2) -> Entity {
        world
            .create_entity()
            .with(Player)
            .with(CameraFocus)
            .with(Gravity)
            .with(Grounded(false))
            .with(Position(pos))
            .with(Velocity::default())
            .with(BoundingBox {
                width: 12.0,
                height: 24.0,
            })
            .build()
    }

    fn step(world: &mut World) {
        world.write_resource::<ContactQueue>().0.clear();
        Physics.run_now(world);
    }

    #[test]
    fn falling_player_lands_on_the_ground() {
        let mut world = test_world();
        let player = spawn_player(&mut world, Vec2::new(350.0, 360.0));

        for _ in 0..60 {
            step(&mut world);
        }

        let positions = world.read_storage::<Position>();
        let velocities = world.read_storage::<Velocity>();
        let groundeds = world.read_storage::<Grounded>();
        let pos = &positions.get(player).unwrap().0;
        // Player bottom rests exactly on the ground plane
        assert_eq!(pos.y + 12.0, 384.0);
        assert_eq!(velocities.get(player).unwrap().0.y, 0.0);
        assert!(groundeds.get(player).unwrap().0);
    }

    #[test]
    fn patrol_agents_never_leave_their_excursion() {
        let mut world = test_world();
        world
            .create_entity()
            .with(Patrol::new(700.0, 30.0))
            .with(Position(Vec2::new(728.0, 368.0)))
            // Fast enough to overshoot the boundary in a single frame
            .with(Velocity(Vec2::new(500.0, 0.0)))
            .with(BoundingBox {
                width: 28.0,
                height: 28.0,
            })
            .build();

        step(&mut world);

        let positions = world.read_storage::<Position>();
        let patrols = world.read_storage::<Patrol>();
        for (Position(pos), patrol) in (&positions, &patrols).join() {
            assert!(pos.x <= patrol.max_x());
            assert!(pos.x >= patrol.min_x());
        }
    }

    #[test]
    fn overlapping_player_and_enemy_produce_a_contact() {
        let mut world = test_world();
        spawn_player(&mut world, Vec2::new(700.0, 360.0));
        let enemy = world
            .create_entity()
            .with(Patrol::new(700.0, 30.0))
            .with(Position(Vec2::new(700.0, 368.0)))
            .with(Velocity::default())
            .with(BoundingBox {
                width: 28.0,
                height: 28.0,
            })
            .build();

        step(&mut world);

        let contacts = world.read_resource::<ContactQueue>();
        assert!(contacts.0.contains(&Contact::PlayerEnemy(enemy)));
    }

    #[test]
    fn distant_entities_produce_no_contact() {
        let mut world = test_world();
        spawn_player(&mut world, Vec2::new(350.0, 316.0));
        world
            .create_entity()
            .with(Patrol::new(700.0, 30.0))
            .with(Position(Vec2::new(700.0, 368.0)))
            .with(Velocity::default())
            .with(BoundingBox {
                width: 28.0,
                height: 28.0,
            })
            .build();

        step(&mut world);
        assert!(world.read_resource::<ContactQueue>().0.is_empty());
    }

    #[test]
    fn camera_follows_the_focused_entity() {
        let mut world = test_world();
        let player = spawn_player(&mut world, Vec2::new(350.0, 316.0));

        world
            .write_storage::<Position>()
            .insert(player, Position(Vec2::new(1000.0, 316.0)))
            .unwrap();
        step(&mut world);

        let camera = world.read_resource::<Camera>();
        assert_eq!(camera.view.center_x(), 1000.0);
    }
}
