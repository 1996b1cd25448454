//! Resolves the contacts the physics step reported this frame

use std::mem;

use specs::prelude::ResourceId;
use specs::{
    Entities, Join, ReadExpect, ReadStorage, System, SystemData, World, WriteExpect,
    WriteStorage,
};

use crate::bullets::BulletPool;
use crate::components::{BoundingBox, Player, Position, Vec2, Velocity};
use crate::resources::{Contact, ContactQueue, GameState, RespawnPoint};

/// Vertical slack allowed between the player's bottom edge and the enemy's
/// top edge for a contact to still count as a stomp
const STOMP_TOLERANCE: f32 = 10.0;
/// Upward impulse the player receives after a successful stomp
const STOMP_BOUNCE: f32 = -200.0;

#[derive(SystemData)]
pub struct InteractionsData<'a> {
    entities: Entities<'a>,
    contacts: WriteExpect<'a, ContactQueue>,
    bullets: WriteExpect<'a, BulletPool>,
    game_state: WriteExpect<'a, GameState>,
    respawn: ReadExpect<'a, RespawnPoint>,
    players: ReadStorage<'a, Player>,
    bounding_boxes: ReadStorage<'a, BoundingBox>,
    positions: WriteStorage<'a, Position>,
    velocities: WriteStorage<'a, Velocity>,
}

pub struct Interactions;

impl<'a> System<'a> for Interactions {
    type SystemData = InteractionsData<'a>;

    fn run(&mut self, data: Self::SystemData) {
        let InteractionsData {
            entities,
            mut contacts,
            mut bullets,
            mut game_state,
            respawn,
            players,
            bounding_boxes,
            mut positions,
            mut velocities,
        } = data;

        let contacts = mem::take(&mut contacts.0);
        if contacts.is_empty() {
            return;
        }

        let player = match (&entities, &players).join().next() {
            Some((entity, _)) => entity,
            None => return,
        };

        for contact in contacts {
            match contact {
                Contact::PlayerEnemy(enemy) => {
                    if !entities.is_alive(enemy) {
                        continue;
                    }
                    let stomped = match (
                        positions.get(player),
                        bounding_boxes.get(player),
                        velocities.get(player),
                        positions.get(enemy),
                        bounding_boxes.get(enemy),
                    ) {
                        (
                            Some(Position(player_pos)),
                            Some(player_bb),
                            Some(Velocity(player_vel)),
                            Some(Position(enemy_pos)),
                            Some(enemy_bb),
                        ) => {
                            let player_bottom = player_pos.y + player_bb.height / 2.0;
                            let enemy_top = enemy_pos.y - enemy_bb.height / 2.0;
                            // A stomp is a downward contact on the enemy's
                            // top edge; side and bottom touches do nothing
                            player_vel.y > 0.0 && player_bottom <= enemy_top + STOMP_TOLERANCE
                        }
                        _ => false,
                    };

                    if stomped {
                        entities
                            .delete(enemy)
                            .expect("bug: stomped enemy no longer in the world");
                        game_state.enemies_defeated += 1;
                        if let Some(Velocity(vel)) = velocities.get_mut(player) {
                            vel.y = STOMP_BOUNCE;
                        }
                    }
                }
                Contact::PlayerBullet(slot) => {
                    bullets.release(slot);
                    // Blanket reset: clearing every other bullet prevents a
                    // cascade of respawns from simultaneous overlaps
                    bullets.release_all();

                    if let Some(Position(pos)) = positions.get_mut(player) {
                        *pos = respawn.0;
                    }
                    if let Some(Velocity(vel)) = velocities.get_mut(player) {
                        *vel = Vec2::default();
                    }
                    game_state.respawns += 1;
                }
            }
        }
    }
}
