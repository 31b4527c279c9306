//! mb-core: character birth logic for the mband client
//!
//! This crate contains the game-side half of the client with no terminal
//! dependencies: static race/class tables, the birth state machine, the two
//! stat allocation engines, and the quick-start record. It is designed to be
//! pure and testable; all rendering and input lives in mb-tui.

pub mod birth;
pub mod data;
pub mod quickstart;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
