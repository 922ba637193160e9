use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Game world a listing was posted for. Only used for display.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct World(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("World {0} does not exist, pick 1 through 4")]
    OutOfRange(u8),
    #[error("World {0:?} is not a number")]
    NotANumber(String),
}

impl World {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(id: u8) -> Result<Self, WorldError> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(WorldError::OutOfRange(id))
        }
    }

    pub fn id(&self) -> u8 {
        self.0
    }
}

impl Default for World {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for World {
    type Error = WorldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<World> for u8 {
    fn from(value: World) -> Self {
        value.0
    }
}

impl FromStr for World {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u8>()
            .map_err(|_| WorldError::NotANumber(s.to_string()))?;
        Self::new(id)
    }
}

impl Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "World {}", self.0)
    }
}
