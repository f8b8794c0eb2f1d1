//! # Castle Rules
//!
//! The rules crate for the castle: everything that decides *what* happens,
//! with no knowledge of how the player is prompted. The console loop lives in
//! `castle_explorer`.
//!
//! ## Core Components
//!
//! - **selector**: Non-repeating random draws from a pool of items
//! - **content**: Clue and sensory corpora and the generator that combines them
//! - **encounters**: What happens when a room is entered
//! - **rooms**: Named locations wrapping an encounter
//! - **config**: The castle definition embedded at compile time

pub mod config;
pub mod content;
pub mod encounters;
pub mod error;
pub mod rooms;
pub mod selector;

pub use config::*;
pub use content::*;
pub use encounters::*;
pub use error::*;
pub use rooms::*;
pub use selector::*;
