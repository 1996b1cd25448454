mod ai;
mod interactions;
mod keyboard;
mod physics;
mod projectiles;

pub use self::ai::*;
pub use self::interactions::*;
pub use self::keyboard::*;
pub use self::physics::*;
pub use self::projectiles::*;
