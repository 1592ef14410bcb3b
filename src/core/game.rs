//! A single match: players, boards, shot log and lifecycle.

use crate::core::board::Board;
use crate::core::common::{EngineError, PlacementError, ShotResult};
use crate::core::config::{MatchConfiguration, MAX_USERNAME_LEN};
use crate::core::coordinate::Coordinate;
use crate::core::ids::{BoardId, MatchId, PlayerId};
use crate::core::ship::{Orientation, Placement, ShipKind};
use crate::core::shot::{Shot, ShotLog};

/// Number of players in a full match.
pub const MAX_PLAYERS: usize = 2;

/// Lifecycle of a match. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Fewer than two players have joined.
    Waiting,
    /// Both players joined; shots may be fired.
    Running,
    /// Closed by the caller.
    Finished,
}

/// A participant, created on join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    username: String,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Core match state.
///
/// Every mutating method validates all of its preconditions before changing
/// anything, so a returned error means the match is untouched.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    code: String,
    status: MatchStatus,
    config: MatchConfiguration,
    players: Vec<Player>,
    boards: Vec<Board>,
    shots: ShotLog,
}

impl Match {
    /// Create a waiting match with no players.
    pub fn new(code: impl Into<String>, config: MatchConfiguration) -> Self {
        Self {
            id: MatchId::new(),
            code: code.into(),
            status: MatchStatus::Waiting,
            config,
            players: Vec::with_capacity(MAX_PLAYERS),
            boards: Vec::with_capacity(MAX_PLAYERS),
            shots: ShotLog::new(),
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn config(&self) -> &MatchConfiguration {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn shots(&self) -> &ShotLog {
        &self.shots
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id() == id)
    }

    /// The board owned by `player`.
    pub fn board_of(&self, player: PlayerId) -> Option<&Board> {
        self.boards.iter().find(|b| b.owner() == player)
    }

    /// Direct mutable access to a board during setup, for callers that inject
    /// placements without the fleet quota of `place_ship`.
    ///
    /// Returns `None` once a shot has landed on the board, so earlier shots
    /// can never count against a ship placed after them.
    pub fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        if self.shots.on_board(id).next().is_some() {
            return None;
        }
        self.boards.iter_mut().find(|b| b.id() == id)
    }

    /// Add a player and their board. The second join starts the match.
    ///
    /// Returns copies of the new player and board.
    pub fn join(&mut self, username: &str) -> Result<(Player, Board), EngineError> {
        if self.status != MatchStatus::Waiting {
            return Err(EngineError::InvalidState("not joinable"));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(EngineError::InvalidState("match full"));
        }
        let username = username.trim();
        if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
            return Err(EngineError::InvalidArgument("invalid username"));
        }

        let player = Player {
            id: PlayerId::new(),
            username: username.to_string(),
        };
        let board = Board::new(
            self.config.board_width(),
            self.config.board_height(),
            player.id,
        );
        log::info!(
            "match {}: {} joined as player {}",
            self.code,
            player.username,
            self.players.len() + 1
        );
        self.players.push(player);
        self.boards.push(board);
        if self.players.len() == MAX_PLAYERS {
            self.status = MatchStatus::Running;
            log::info!("match {}: running", self.code);
        }

        let idx = self.players.len() - 1;
        Ok((self.players[idx].clone(), self.boards[idx].clone()))
    }

    /// Place a ship on `player`'s board during setup.
    ///
    /// Setup lasts until the first shot lands on that board. Negative start
    /// coordinates are reported as out of bounds.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        kind: ShipKind,
        x: i64,
        y: i64,
        orientation: Orientation,
    ) -> Result<Placement, EngineError> {
        if self.status == MatchStatus::Finished {
            return Err(EngineError::InvalidState("match finished"));
        }
        let board = self
            .boards
            .iter()
            .position(|b| b.owner() == player)
            .ok_or(EngineError::InvalidState("player not in match"))?;
        let board_id = self.boards[board].id();
        if self.shots.on_board(board_id).next().is_some() {
            return Err(EngineError::InvalidState("board under fire"));
        }
        if self.boards[board].count_of(kind) >= self.config.fleet().count_of(kind) {
            return Err(PlacementError::FleetExhausted(kind).into());
        }
        let start = Coordinate::from_signed(x, y).ok_or(PlacementError::OutOfBounds)?;

        let placement = self.boards[board].place(kind, start, orientation)?;
        log::debug!(
            "match {}: placed {} at {} {:?}",
            self.code,
            kind,
            start,
            orientation
        );
        Ok(placement)
    }

    /// Fire at `coord` on `target`. See [`Match::fire`].
    pub fn fire_at(
        &mut self,
        shooter: PlayerId,
        target: BoardId,
        coord: Coordinate,
    ) -> Result<Shot, EngineError> {
        self.fire(shooter, target, i64::from(coord.x), i64::from(coord.y))
    }

    /// Validate and resolve one shot, appending it to the log.
    ///
    /// Repeat shots at the same cell are recorded as `AlreadyShot` rather than
    /// rejected.
    pub fn fire(
        &mut self,
        shooter: PlayerId,
        target: BoardId,
        x: i64,
        y: i64,
    ) -> Result<Shot, EngineError> {
        if self.status != MatchStatus::Running {
            return Err(EngineError::InvalidState("not running"));
        }
        if self.player(shooter).is_none() {
            return Err(EngineError::InvalidState("shooter not in match"));
        }
        let board = self
            .board(target)
            .ok_or(EngineError::InvalidState("board not in match"))?;
        if board.owner() == shooter {
            return Err(EngineError::InvalidState("cannot target own board"));
        }
        if self.config.strict_turns() && self.next_shooter() != Some(shooter) {
            return Err(EngineError::InvalidState("not your turn"));
        }
        let coord = Coordinate::from_signed(x, y)
            .filter(|c| board.contains(*c))
            .ok_or(EngineError::InvalidArgument("out of bounds"))?;

        let result = self.resolve(board, coord);
        let shot = self.shots.record(coord, result, shooter, target);
        log::debug!(
            "match {}: shot #{} at {} -> {}",
            self.code,
            shot.seq(),
            coord,
            result
        );
        Ok(shot)
    }

    fn resolve(&self, board: &Board, coord: Coordinate) -> ShotResult {
        if self.shots.was_shot(board.id(), coord) {
            return ShotResult::AlreadyShot;
        }
        let Some(placement) = board.placement_at(coord) else {
            return ShotResult::Miss;
        };
        let sunk = placement
            .covered_cells()
            .all(|c| c == coord || self.shots.was_shot(board.id(), c));
        if sunk {
            ShotResult::Sunk
        } else {
            ShotResult::Hit
        }
    }

    /// Under strict turns, whose shot it is: the first player to join opens,
    /// then shooters alternate.
    pub fn next_shooter(&self) -> Option<PlayerId> {
        match self.shots.last() {
            None => self.players.first().map(Player::id),
            Some(last) => self
                .players
                .iter()
                .map(Player::id)
                .find(|id| *id != last.shooter()),
        }
    }

    /// Returns `true` if every cell of `placement` has been fired at on `board`.
    pub fn is_sunk(&self, board: BoardId, placement: &Placement) -> bool {
        placement
            .covered_cells()
            .all(|c| self.shots.was_shot(board, c))
    }

    /// Returns `true` if the board has ships and all of them are sunk.
    pub fn fleet_destroyed(&self, board: BoardId) -> bool {
        self.board(board).is_some_and(|b| {
            !b.placements().is_empty() && b.placements().iter().all(|p| self.is_sunk(board, p))
        })
    }

    /// The player whose opponent's fleet is destroyed, if exactly one is.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.players.len() < MAX_PLAYERS {
            return None;
        }
        let destroyed: Vec<&Board> = self
            .boards
            .iter()
            .filter(|b| self.fleet_destroyed(b.id()))
            .collect();
        match destroyed.as_slice() {
            [loser] => self
                .players
                .iter()
                .map(Player::id)
                .find(|id| *id != loser.owner()),
            _ => None,
        }
    }

    /// Close a running match.
    pub fn finish(&mut self) -> Result<(), EngineError> {
        if self.status != MatchStatus::Running {
            return Err(EngineError::InvalidState("not running"));
        }
        self.status = MatchStatus::Finished;
        log::info!("match {}: finished", self.code);
        Ok(())
    }
}
