//! Serializable views of engine state handed to web, storage and test layers.

use serde::{Deserialize, Serialize};

use crate::core::{
    Board, BoardId, Match, MatchId, MatchStatus, Orientation, Placement, Player, PlayerId,
    ShipKind, Shot, ShotResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetEntry {
    pub kind: ShipKind,
    pub size: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub username: String,
}

/// Board header without ships or shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub width: u32,
    pub height: u32,
    pub owner_id: PlayerId,
    pub owner_username: String,
    pub ships_placed: usize,
    /// Every ship the fleet requires has been placed.
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub code: String,
    pub status: MatchStatus,
    pub board_width: u32,
    pub board_height: u32,
    pub fleet: Vec<FleetEntry>,
    pub strict_turns: bool,
    pub players: Vec<PlayerSnapshot>,
    pub boards: Vec<BoardSummary>,
    pub shots_fired: usize,
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    pub kind: ShipKind,
    pub start_x: u32,
    pub start_y: u32,
    pub orientation: Orientation,
    pub size: u32,
    pub sunk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotSnapshot {
    pub seq: usize,
    pub shooter_id: PlayerId,
    pub target_board_id: BoardId,
    pub x: u32,
    pub y: u32,
    pub result: ShotResult,
}

/// Full board view: ships and every shot fired at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board_id: BoardId,
    pub width: u32,
    pub height: u32,
    pub owner_id: PlayerId,
    pub owner_username: String,
    pub ships: Vec<PlacementSnapshot>,
    pub shots: Vec<ShotSnapshot>,
    pub fleet_destroyed: bool,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReceipt {
    #[serde(rename = "match")]
    pub game: MatchSnapshot,
    pub player: PlayerSnapshot,
    pub board: BoardSummary,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        PlayerSnapshot {
            id: p.id(),
            username: p.username().to_string(),
        }
    }
}

impl From<&Shot> for ShotSnapshot {
    fn from(s: &Shot) -> Self {
        ShotSnapshot {
            seq: s.seq(),
            shooter_id: s.shooter(),
            target_board_id: s.target(),
            x: s.coordinate().x,
            y: s.coordinate().y,
            result: s.result(),
        }
    }
}

impl PlacementSnapshot {
    pub fn new(placement: &Placement, sunk: bool) -> Self {
        PlacementSnapshot {
            kind: placement.kind(),
            start_x: placement.start().x,
            start_y: placement.start().y,
            orientation: placement.orientation(),
            size: placement.kind().length(),
            sunk,
        }
    }
}

impl BoardSummary {
    pub fn of(game: &Match, board: &Board) -> Self {
        BoardSummary {
            id: board.id(),
            width: board.width(),
            height: board.height(),
            owner_id: board.owner(),
            owner_username: owner_name(game, board),
            ships_placed: board.placements().len(),
            ready: board.fleet_complete(game.config().fleet()),
        }
    }
}

impl BoardSnapshot {
    pub fn of(game: &Match, board: &Board) -> Self {
        let ships = board
            .placements()
            .iter()
            .map(|p| PlacementSnapshot::new(p, game.is_sunk(board.id(), p)))
            .collect();
        let shots = game
            .shots()
            .on_board(board.id())
            .map(ShotSnapshot::from)
            .collect();
        BoardSnapshot {
            board_id: board.id(),
            width: board.width(),
            height: board.height(),
            owner_id: board.owner(),
            owner_username: owner_name(game, board),
            ships,
            shots,
            fleet_destroyed: game.fleet_destroyed(board.id()),
        }
    }
}

impl From<&Match> for MatchSnapshot {
    fn from(game: &Match) -> Self {
        let config = game.config();
        MatchSnapshot {
            id: game.id(),
            code: game.code().to_string(),
            status: game.status(),
            board_width: config.board_width(),
            board_height: config.board_height(),
            fleet: config
                .fleet()
                .entries()
                .map(|(kind, count)| FleetEntry {
                    kind,
                    size: kind.length(),
                    count,
                })
                .collect(),
            strict_turns: config.strict_turns(),
            players: game.players().iter().map(PlayerSnapshot::from).collect(),
            boards: game
                .boards()
                .iter()
                .map(|b| BoardSummary::of(game, b))
                .collect(),
            shots_fired: game.shots().len(),
            winner: game.winner(),
        }
    }
}

fn owner_name(game: &Match, board: &Board) -> String {
    game.player(board.owner())
        .map(|p| p.username().to_string())
        .unwrap_or_default()
}
