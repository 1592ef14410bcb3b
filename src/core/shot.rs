//! Shots and the append-only shot log.

use crate::core::common::ShotResult;
use crate::core::coordinate::Coordinate;
use crate::core::ids::{BoardId, PlayerId};

/// One resolved fire attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    seq: usize,
    coordinate: Coordinate,
    result: ShotResult,
    shooter: PlayerId,
    target: BoardId,
}

impl Shot {
    /// Position in the match's shot log.
    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn result(&self) -> ShotResult {
        self.result
    }

    pub fn shooter(&self) -> PlayerId {
        self.shooter
    }

    pub fn target(&self) -> BoardId {
        self.target
    }
}

/// Every fire attempt of a match in order, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct ShotLog {
    shots: Vec<Shot>,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter()
    }

    pub fn last(&self) -> Option<&Shot> {
        self.shots.last()
    }

    /// Shots that targeted `board`, oldest first.
    pub fn on_board(&self, board: BoardId) -> impl Iterator<Item = &Shot> {
        self.shots.iter().filter(move |s| s.target == board)
    }

    /// Returns `true` if `coord` on `board` was fired at before.
    pub fn was_shot(&self, board: BoardId, coord: Coordinate) -> bool {
        self.on_board(board).any(|s| s.coordinate == coord)
    }

    /// Append a shot and return a copy of it.
    pub(crate) fn record(
        &mut self,
        coordinate: Coordinate,
        result: ShotResult,
        shooter: PlayerId,
        target: BoardId,
    ) -> Shot {
        let shot = Shot {
            seq: self.shots.len(),
            coordinate,
            result,
            shooter,
            target,
        };
        self.shots.push(shot);
        shot
    }
}
