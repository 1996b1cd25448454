#![deny(unused_must_use)]

mod bullets;
mod components;
mod key;
mod level;
mod resources;
mod session;
mod systems;

use std::env;

use rand::random;
use specs::WorldExt;

use crate::bullets::BulletPool;
use crate::key::{InvalidSessionKey, SessionKey};
use crate::level::LevelConfig;
use crate::resources::{Event, GameState, Key, TimeDelta};
use crate::session::GameSession;

/// Fixed timestep of the headless demo loop
const FRAME_MS: f32 = 1000.0 / 30.0;
const RUN_SECONDS: usize = 20;

fn main() -> Result<(), InvalidSessionKey> {
    let key: SessionKey = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => random(),
    };
    println!("Session Key: {}", key);

    let mut session = GameSession::new(LevelConfig::demo(), key);

    // Scripted input: hold right and hop every three seconds. Enough to walk
    // the player into the first patrol area and exercise every system.
    let frames = RUN_SECONDS * 30;
    for frame in 0..frames {
        let mut events = Vec::new();
        if frame == 0 {
            events.push(Event::KeyDown(Key::Right));
        }
        if frame > 0 && frame % 90 == 0 {
            events.push(Event::KeyDown(Key::Jump));
        }
        session.dispatch(TimeDelta(FRAME_MS), events);
    }

    let world = session.world();
    let game_state = world.read_resource::<GameState>();
    let bullets = world.read_resource::<BulletPool>();
    println!(
        "Enemies defeated: {}/{}",
        game_state.enemies_defeated, game_state.enemies_total
    );
    println!("Respawns: {}", game_state.respawns);
    println!("Bullets still in flight: {}", bullets.active_count());
    if game_state.all_enemies_defeated() {
        println!("All patrol agents defeated!");
    }

    Ok(())
}
