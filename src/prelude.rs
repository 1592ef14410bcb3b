//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coordinate, EngineError, MatchApi, MatchConfiguration, MatchRegistry, MatchStatus,
    Orientation, ShipKind, ShotResult,
};
