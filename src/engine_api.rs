use crate::core::{BoardId, EngineError, MatchConfiguration, Orientation, PlayerId, ShipKind};
use crate::domain::*;

/// Synchronous boundary of the rules engine.
///
/// Web, persistence and test layers drive matches through this trait only.
pub trait MatchApi: Send + Sync {
    fn create_match(&self, config: MatchConfiguration) -> MatchSnapshot;
    fn get_match(&self, code: &str) -> Result<MatchSnapshot, EngineError>;
    fn join(&self, code: &str, username: &str) -> Result<JoinReceipt, EngineError>;
    fn place_ship(
        &self,
        code: &str,
        player: PlayerId,
        kind: ShipKind,
        x: i64,
        y: i64,
        orientation: Orientation,
    ) -> Result<PlacementSnapshot, EngineError>;
    fn fire(
        &self,
        code: &str,
        shooter: PlayerId,
        target: BoardId,
        x: i64,
        y: i64,
    ) -> Result<ShotSnapshot, EngineError>;
    fn board_state(&self, code: &str, board: BoardId) -> Result<BoardSnapshot, EngineError>;
    fn finish(&self, code: &str) -> Result<MatchSnapshot, EngineError>;
}
