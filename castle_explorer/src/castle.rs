//! Castle navigation: the door prompt and moving between rooms.

use castle_rules::{
    CastleConfig, DefaultEncounter, DoorRange, ItemPool, Outcome, Room, RoomId,
    SenseClueGenerator,
};
use rand::{Rng, RngCore};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::console::Console;
use crate::error::PlayError;

const RULE_WIDTH: usize = 40;

/// How an answer to the door prompt reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoorAnswer {
    Door(u32),
    /// Any integer, however large, that names no door.
    OutOfRange,
    NotANumber,
}

impl DoorAnswer {
    fn read(answer: &str, num_doors: u32) -> Self {
        let digits = answer
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(answer);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return DoorAnswer::NotANumber;
        }

        match answer.parse::<i64>() {
            Ok(n) if n >= 1 && n <= i64::from(num_doors) => match u32::try_from(n) {
                Ok(door) => DoorAnswer::Door(door),
                Err(_) => DoorAnswer::OutOfRange,
            },
            _ => DoorAnswer::OutOfRange,
        }
    }
}

/// A fixed list of rooms visited in non-repeating random order.
#[derive(Debug)]
pub struct Castle {
    rooms: Vec<Room>,
    selector: ItemPool<RoomId>,
    doors: DoorRange,
}

impl Castle {
    pub fn new(rooms: Vec<Room>, doors: DoorRange) -> Self {
        let selector = ItemPool::new((0..rooms.len()).map(RoomId));
        Self {
            rooms,
            selector,
            doors,
        }
    }

    /// Build a castle with one default encounter per configured room, all
    /// drawing from the same generator.
    pub fn from_config(config: &CastleConfig, generator: Rc<RefCell<SenseClueGenerator>>) -> Self {
        let rooms = config
            .rooms
            .iter()
            .map(|name| Room::new(name.as_str(), DefaultEncounter::new(Rc::clone(&generator))))
            .collect();
        Self::new(rooms, config.doors)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Offer the player a handful of doors and wait for a valid pick.
    ///
    /// The pick is returned for display only; it does not decide the room.
    pub fn select_door<R, W, G>(
        &self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<u32, PlayError>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let num_doors = rng.gen_range(self.doors.min()..=self.doors.max());
        console.say(format!("\n{}", "=".repeat(RULE_WIDTH)))?;
        console.say(format!("There are {num_doors} doors before you."))?;
        let prompt = format!("Choose a door (1-{num_doors}): ");

        loop {
            let answer = console.prompt(&prompt)?;
            match DoorAnswer::read(&answer, num_doors) {
                DoorAnswer::Door(choice) => {
                    console.say(format!("You open door {choice}.\n{}", "-".repeat(RULE_WIDTH)))?;
                    return Ok(choice);
                }
                DoorAnswer::OutOfRange => console.say(format!(
                    "Invalid selection: enter a number between 1 and {num_doors}."
                ))?,
                DoorAnswer::NotANumber => {
                    console.say("Invalid input: please enter a numeric value.")?
                }
            }
        }
    }

    /// Walk through a door into the next room and run its encounter.
    ///
    /// An empty castle resets its selector and ends the game.
    pub fn next<R, W, G>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<Outcome, PlayError>
    where
        R: BufRead,
        W: Write,
        G: RngCore,
    {
        let door = self.select_door(console, rng)?;

        let Some(id) = self.selector.draw(rng) else {
            tracing::warn!(door, "castle has no rooms");
            console.say("No rooms available. Resetting room selector.")?;
            self.selector.reset();
            return Ok(Outcome::End);
        };

        let room = &mut self.rooms[id.0];
        tracing::debug!(door, room = %room.name, %id, "entering room");
        console.say(format!("You step through and enter: {}", room.name))?;
        let outcome = room.visit(console.output(), rng)?;
        console.say(format!("{}\n", "=".repeat(RULE_WIDTH)))?;

        Ok(outcome)
    }

    /// Make every room eligible again.
    pub fn reset(&mut self) {
        self.selector.reset();
    }

    /// Rooms still unvisited in the current cycle.
    pub fn unvisited(&self) -> usize {
        self.selector.remaining()
    }
}
