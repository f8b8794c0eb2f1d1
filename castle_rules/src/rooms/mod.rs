//! Rooms: named locations that each own one encounter.

use rand::RngCore;
use std::fmt;
use std::io::{self, Write};

use crate::encounters::{Encounter, Outcome};

/// Index of a room in a castle's fixed room list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

pub struct Room {
    pub name: String,
    encounter: Box<dyn Encounter>,
}

impl Room {
    pub fn new(name: impl Into<String>, encounter: impl Encounter + 'static) -> Self {
        Self {
            name: name.into(),
            encounter: Box::new(encounter),
        }
    }

    /// Run this room's encounter.
    pub fn visit(&mut self, out: &mut dyn Write, rng: &mut dyn RngCore) -> io::Result<Outcome> {
        self.encounter.run(out, rng)
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room").field("name", &self.name).finish_non_exhaustive()
    }
}
