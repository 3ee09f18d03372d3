//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per [`tick`] call
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ResolveOutcome, resolve};
pub use rect::Rect;
pub use state::{Bean, GamePhase, GameState, Player, Snapshot, SpawnClock};
pub use tick::{Direction, TickInput, tick};
