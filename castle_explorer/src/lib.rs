//! # Castle Explorer
//!
//! Drives a game of castle exploration over a line-based console. Room
//! contents and selection rules come from `castle_rules`; this crate owns the
//! prompts and the game loop.
//!
//! ## Core Components
//!
//! - **console**: Prompting and reading answers over any `BufRead`/`Write` pair
//! - **castle**: Door selection and room-to-room navigation
//! - **game**: The play/restart loop

pub mod castle;
pub mod console;
pub mod error;
pub mod game;

pub use castle::*;
pub use console::*;
pub use error::*;
pub use game::*;
