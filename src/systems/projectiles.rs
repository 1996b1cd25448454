use specs::prelude::ResourceId;
use specs::{Join, ReadExpect, ReadStorage, System, SystemData, World, WriteExpect};

use crate::bullets::{BulletPool, BULLET_SIZE};
use crate::components::{BoundingBox, Player, Position, Rect};
use crate::resources::{Contact, ContactQueue, TimeDelta, WorldBounds};

#[derive(SystemData)]
pub struct ProjectilesData<'a> {
    delta: ReadExpect<'a, TimeDelta>,
    bounds: ReadExpect<'a, WorldBounds>,
    bullets: WriteExpect<'a, BulletPool>,
    contacts: WriteExpect<'a, ContactQueue>,
    players: ReadStorage<'a, Player>,
    positions: ReadStorage<'a, Position>,
    bounding_boxes: ReadStorage<'a, BoundingBox>,
}

pub struct Projectiles;

impl<'a> System<'a> for Projectiles {
    type SystemData = ProjectilesData<'a>;

    fn run(&mut self, data: Self::SystemData) {
        let ProjectilesData {
            delta,
            bounds,
            mut bullets,
            mut contacts,
            players,
            positions,
            bounding_boxes,
        } = data;

        let TimeDelta(dt) = *delta;

        for slot in bullets.slots_mut() {
            if slot.active {
                slot.position.x += slot.velocity_x * dt / 1000.0;
            }
        }

        bullets.expire_stale(dt, &bounds);

        // Report bullet hits on the player; the combat resolver handles the
        // actual respawn
        let player = (&players, &positions, &bounding_boxes).join().next();
        if let Some((_, Position(player_pos), player_bb)) = player {
            let player_body = Rect::from_center(*player_pos, player_bb.width, player_bb.height);
            for (i, slot) in bullets.slots().iter().enumerate() {
                if !slot.active {
                    continue;
                }
                let bullet_body = Rect::from_center(slot.position, BULLET_SIZE, BULLET_SIZE);
                if player_body.intersects(&bullet_body) {
                    contacts.0.push(Contact::PlayerBullet(i));
                }
            }
        }
    }
}
