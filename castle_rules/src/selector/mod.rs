//! Non-repeating random selection.
//!
//! An [`ItemPool`] hands out items at random but never repeats one until every
//! item has been drawn once. When the pool is exhausted the used set is cleared
//! and the next draw comes from the full pool again.

use rand::seq::SliceRandom;
use rand::Rng;

/// A pool of candidate items plus the values already drawn this cycle.
///
/// Exclusion is by value: if the pool holds two equal items, drawing either
/// one excludes both until the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPool<T> {
    items: Vec<T>,
    used: Vec<T>,
}

impl<T> Default for ItemPool<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            used: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> ItemPool<T> {
    /// Create a pool from an initial collection of items.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            used: Vec::new(),
        }
    }

    /// Replace the pool contents and forget every previous draw.
    pub fn reinitialize(&mut self, items: impl IntoIterator<Item = T>) {
        *self = Self::new(items);
    }

    /// Append an item. Duplicates are kept.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Draw a random item that has not been drawn since the last reset.
    ///
    /// Returns `None` only when the pool itself is empty. Once every item has
    /// been drawn the used set is cleared and the draw is made from the full
    /// pool.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            self.used.clear();
            return None;
        }

        let mut available: Vec<&T> = self
            .items
            .iter()
            .filter(|item| !self.used.contains(item))
            .collect();

        if available.is_empty() {
            tracing::debug!(pool = self.items.len(), "pool exhausted, starting a new cycle");
            self.used.clear();
            available = self.items.iter().collect();
        }

        let choice = (*available.choose(rng)?).clone();
        self.used.push(choice.clone());
        Some(choice)
    }

    /// Make every item eligible again. Pool membership is unchanged.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Number of values that can still be drawn before the cycle restarts.
    pub fn remaining(&self) -> usize {
        self.items
            .iter()
            .filter(|item| !self.used.contains(item))
            .count()
    }
}

impl<T> ItemPool<T> {
    /// All items in the pool, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Values drawn since the last reset, in draw order.
    pub fn used(&self) -> &[T] {
        &self.used
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
