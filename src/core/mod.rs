//! Core rules engine.
//!
//! Pure match logic: coordinates, ships, boards, shot resolution and the
//! match lifecycle. Nothing in here performs I/O or locking; the registry in
//! `crate::engine` serializes access to each match.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod ids;
pub mod ship;
pub mod shot;

// Re-export commonly used types
pub use board::Board;
pub use common::{EngineError, PlacementError, ShotResult};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Match, MatchStatus, Player, MAX_PLAYERS};
pub use ids::{BoardId, MatchId, PlayerId};
pub use ship::{Orientation, Placement, ShipKind};
pub use shot::{Shot, ShotLog};
