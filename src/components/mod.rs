mod character;
mod graphics;
mod patrol;
mod physics;

pub use self::character::*;
pub use self::graphics::*;
pub use self::patrol::*;
pub use self::physics::*;
