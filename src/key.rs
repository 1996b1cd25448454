use std::fmt;
use std::str::FromStr;

use base64::DecodeError;
use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};

#[derive(Debug)]
pub enum InvalidSessionKey {
    InvalidLength,
    DecodeError(DecodeError),
}

impl fmt::Display for InvalidSessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::InvalidSessionKey::*;
        match self {
            InvalidLength => write!(f, "session key has the wrong length"),
            DecodeError(err) => write!(f, "session key is not valid base64: {}", err),
        }
    }
}

/// The seed of the random number generator
type Seed = <StdRng as SeedableRng>::Seed;

/// Uniquely identifies a session's randomization (patrol spawn states and
/// in-game state transitions)
///
/// Can be passed back to a new session to recreate the same behaviour.
///
/// To create a random SessionKey, use the `rand::random` function:
///
/// ```rust,ignore
/// let key: SessionKey = random();
/// ```
///
/// SessionKeys can be parsed from strings using `.parse()` and turned back
/// into strings with `.to_string()` or Display `{}` formatting.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SessionKey(Seed);

impl SessionKey {
    pub fn to_rng(self) -> StdRng {
        StdRng::from_seed(self.0)
    }
}

impl Distribution<SessionKey> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionKey {
        SessionKey(rng.gen())
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SessionKey(\"{}\")", self)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", base64::encode_config(&self.0, base64::URL_SAFE_NO_PAD))
    }
}

impl FromStr for SessionKey {
    type Err = InvalidSessionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key: Seed = Default::default();
        let decoded = base64::decode_config(s, base64::URL_SAFE_NO_PAD)
            .map_err(InvalidSessionKey::DecodeError)?;
        if decoded.len() != key.len() {
            return Err(InvalidSessionKey::InvalidLength);
        }
        key.copy_from_slice(&decoded);
        Ok(SessionKey(key))
    }
}
