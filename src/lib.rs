//! Bean Catcher - a catch-the-falling-beans arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `config`: Data-driven game tuning
//!
//! Rendering and raw input wiring live outside this crate. A host drives
//! [`sim::tick`] once per frame callback with a [`sim::TickInput`], then draws
//! whatever [`sim::GameState::snapshot`] returns. The simulation never reads
//! the clock or ambient randomness, so a fixed seed and a fixed input sequence
//! replay bit-for-bit.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};
