use rand::Rng;
use specs::prelude::ResourceId;
use specs::{
    Join, ReadExpect, ReadStorage, System, SystemData, World, WriteExpect, WriteStorage,
};

use crate::bullets::{BulletPool, BULLET_SPEED};
use crate::components::{
    Facing, Patrol, PatrolState, Player, Position, Sprite, Velocity, LOOK_DURATION, SHOOT_DELAY,
    WALK_DURATION,
};
use crate::resources::{Camera, SessionRng, TimeDelta};

#[derive(SystemData)]
pub struct AIData<'a> {
    delta: ReadExpect<'a, TimeDelta>,
    camera: ReadExpect<'a, Camera>,
    rng: WriteExpect<'a, SessionRng>,
    bullets: WriteExpect<'a, BulletPool>,
    players: ReadStorage<'a, Player>,
    positions: ReadStorage<'a, Position>,
    patrols: WriteStorage<'a, Patrol>,
    velocities: WriteStorage<'a, Velocity>,
    sprites: WriteStorage<'a, Sprite>,
}

pub struct AI;

impl<'a> System<'a> for AI {
    type SystemData = AIData<'a>;

    fn run(&mut self, data: Self::SystemData) {
        let AIData {
            delta,
            camera,
            mut rng,
            mut bullets,
            players,
            positions,
            mut patrols,
            mut velocities,
            mut sprites,
        } = data;

        let TimeDelta(dt) = *delta;
        let player_pos = (&players, &positions)
            .join()
            .next()
            .map(|(_, Position(pos))| *pos);

        // Entities missing any of these components are not patrol agents and
        // are skipped without complaint
        for (patrol, Position(pos), Velocity(vel), sprite) in
            (&mut patrols, &positions, &mut velocities, &mut sprites).join()
        {
            patrol.state_timer += dt;
            if patrol.shoot_cooldown > 0.0 {
                patrol.shoot_cooldown -= dt;
            }

            match patrol.state {
                PatrolState::Walking => {
                    vel.x = patrol.speed * patrol.facing.x_sign();

                    // Reverse at the excursion bounds (physics keeps the
                    // position clamped inside them)
                    if pos.x >= patrol.max_x() && patrol.facing == Facing::Right {
                        patrol.facing = Facing::Left;
                        sprite.animation = patrol.current_animation();
                    } else if pos.x <= patrol.min_x() && patrol.facing == Facing::Left {
                        patrol.facing = Facing::Right;
                        sprite.animation = patrol.current_animation();
                    }

                    // Fire only while both the agent and the player are on
                    // screen. The cooldown resets even when the pool is
                    // exhausted: the agent skips that shot and tries again
                    // next cycle.
                    if patrol.shoot_cooldown <= 0.0 {
                        if let Some(player_pos) = player_pos {
                            if camera.contains(*pos) && camera.contains(player_pos) {
                                if let Some(bullet) = bullets.acquire(pos.x, pos.y) {
                                    bullet.velocity_x = BULLET_SPEED * patrol.facing.x_sign();
                                }
                                patrol.shoot_cooldown = SHOOT_DELAY;
                            }
                        }
                    }

                    if patrol.state_timer >= WALK_DURATION {
                        patrol.state_timer = 0.0;
                        patrol.last_facing = patrol.facing;
                        patrol.state = if rng.0.gen_bool(0.5) {
                            PatrolState::LookingFront
                        } else {
                            PatrolState::LookingBack
                        };
                        vel.x = 0.0;
                        sprite.animation = patrol.current_animation();
                    }
                }
                PatrolState::LookingFront | PatrolState::LookingBack => {
                    vel.x = 0.0;

                    if patrol.state_timer >= LOOK_DURATION {
                        patrol.state_timer = 0.0;
                        patrol.state = PatrolState::Walking;
                        patrol.facing = patrol.last_facing;
                        sprite.animation = patrol.current_animation();
                    }
                }
            }
        }
    }
}
