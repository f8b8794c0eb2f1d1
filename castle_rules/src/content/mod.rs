//! Descriptive text shown when a room is entered.
//!
//! A room description is one clue followed by one sensory experience, each
//! drawn from its own [`ItemPool`] so neither repeats until its corpus is used up.

use rand::Rng;

use crate::selector::ItemPool;

/// Immutable text corpora the generator draws from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentCorpus {
    pub clues: Vec<String>,
    pub senses: Vec<String>,
}

/// Combines a clue and a sensory experience into one line of text.
///
/// One generator is meant to be shared by every room of a castle, so the
/// no-repeat guarantee holds across the whole castle rather than per room.
#[derive(Debug, Clone)]
pub struct SenseClueGenerator {
    clues: ItemPool<String>,
    senses: ItemPool<String>,
}

impl SenseClueGenerator {
    pub fn new(corpus: &ContentCorpus) -> Self {
        Self {
            clues: ItemPool::new(corpus.clues.iter().cloned()),
            senses: ItemPool::new(corpus.senses.iter().cloned()),
        }
    }

    /// Draw one clue and one sense and join them with a space.
    ///
    /// Falls back to whichever half is available, or an empty string when
    /// both corpora are empty. A blank corpus entry counts as missing.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let clue = self.clues.draw(rng).filter(|text| !text.is_empty());
        let sense = self.senses.draw(rng).filter(|text| !text.is_empty());

        match (clue, sense) {
            (Some(clue), Some(sense)) => format!("{clue} {sense}"),
            (Some(text), None) | (None, Some(text)) => text,
            (None, None) => String::new(),
        }
    }

    pub fn clues(&self) -> &ItemPool<String> {
        &self.clues
    }

    pub fn senses(&self) -> &ItemPool<String> {
        &self.senses
    }
}
