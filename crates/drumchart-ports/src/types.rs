use serde::{Deserialize, Serialize};
use std::fmt;

pub type Tick = i64; // musical time, monotonic in stream
pub type Pitch = u8; // raw note number of the source track

/// Ticks per quarter note of a source stream. Always > 0 once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution(pub u16);

impl Resolution {
    pub fn ticks_per_quarter(self) -> Tick {
        self.0 as Tick
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
