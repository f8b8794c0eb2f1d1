//! Encounters: what happens when the player enters a room.

use rand::RngCore;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::content::SenseClueGenerator;

/// Whether the game keeps going after an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Continue,
    End,
}

impl Outcome {
    pub fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue)
    }
}

/// A unit of gameplay run on room entry.
///
/// Implementations write whatever the player should read to `out` and report
/// whether play continues.
pub trait Encounter {
    fn run(&mut self, out: &mut dyn Write, rng: &mut dyn RngCore) -> io::Result<Outcome>;
}

/// Prints one generated clue and sense, then lets the player move on.
///
/// This encounter never ends the game.
#[derive(Debug, Clone)]
pub struct DefaultEncounter {
    generator: Rc<RefCell<SenseClueGenerator>>,
}

impl DefaultEncounter {
    pub fn new(generator: Rc<RefCell<SenseClueGenerator>>) -> Self {
        Self { generator }
    }
}

impl Encounter for DefaultEncounter {
    fn run(&mut self, out: &mut dyn Write, rng: &mut dyn RngCore) -> io::Result<Outcome> {
        let text = self.generator.borrow_mut().generate(rng);
        writeln!(out, "{text}")?;
        Ok(Outcome::Continue)
    }
}
