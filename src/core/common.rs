//! Common types for the rules engine: shot results and engine errors.

use crate::core::ship::ShipKind;

/// Resolved outcome of a single fire attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotResult {
    /// No ship covers the coordinate.
    Miss,
    /// A ship was hit but still has unshot cells.
    Hit,
    /// The shot completed coverage of a ship.
    Sunk,
    /// This (board, coordinate) pair was fired at before.
    AlreadyShot,
}

impl core::fmt::Display for ShotResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ShotResult::Miss => "miss",
            ShotResult::Hit => "hit",
            ShotResult::Sunk => "sunk",
            ShotResult::AlreadyShot => "already shot",
        };
        f.write_str(s)
    }
}

/// Reasons a ship placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one covered cell lies outside the board.
    OutOfBounds,
    /// At least one covered cell is already occupied by another ship.
    Overlaps,
    /// The fleet allows no further ship of this kind.
    FleetExhausted(ShipKind),
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            PlacementError::FleetExhausted(kind) => {
                write!(f, "Fleet has no {} left to place", kind.name())
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned by match and registry operations.
///
/// Every variant is recoverable; an operation that fails leaves the match
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced match does not exist.
    NotFound(String),
    /// The operation is not legal in the current lifecycle or ownership context.
    InvalidState(&'static str),
    /// Well-formed input outside the accepted domain.
    InvalidArgument(&'static str),
    /// The board or fleet rejected a ship placement.
    InvalidPlacement(PlacementError),
}

impl EngineError {
    /// Stable machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::NotFound(_) => "not_found",
            EngineError::InvalidState(_) => "invalid_state",
            EngineError::InvalidArgument(_) => "invalid_argument",
            EngineError::InvalidPlacement(_) => "invalid_placement",
        }
    }
}

impl From<PlacementError> for EngineError {
    fn from(err: PlacementError) -> Self {
        EngineError::InvalidPlacement(err)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::NotFound(code) => write!(f, "Match not found: {}", code),
            EngineError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            EngineError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            EngineError::InvalidPlacement(err) => write!(f, "Invalid placement: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidPlacement(err) => Some(err),
            _ => None,
        }
    }
}
