//! A player's board: dimensions, owner and ship placements.

use core::fmt;
use std::collections::HashSet;

use crate::core::common::PlacementError;
use crate::core::config::Fleet;
use crate::core::coordinate::Coordinate;
use crate::core::ids::{BoardId, PlayerId};
use crate::core::ship::{candidate_cells, Orientation, Placement, ShipKind};

/// Board owned by one player. Ships never overlap and never leave the grid.
#[derive(Clone)]
pub struct Board {
    id: BoardId,
    width: u32,
    height: u32,
    owner: PlayerId,
    placements: Vec<Placement>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(width: u32, height: u32, owner: PlayerId) -> Self {
        Board {
            id: BoardId::new(),
            width,
            height,
            owner,
            placements: Vec::new(),
        }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Placements in the order they were accepted.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns `true` if `coord` lies on this board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.within(self.width, self.height)
    }

    /// Union of the cells covered by every placement.
    pub fn occupied_cells(&self) -> HashSet<Coordinate> {
        self.placements
            .iter()
            .flat_map(|p| p.covered_cells())
            .collect()
    }

    /// The placement covering `coord`, if any.
    pub fn placement_at(&self, coord: Coordinate) -> Option<&Placement> {
        self.placements.iter().find(|p| p.covers(coord))
    }

    /// Number of ships of `kind` already placed.
    pub fn count_of(&self, kind: ShipKind) -> u32 {
        self.placements.iter().filter(|p| p.kind() == kind).count() as u32
    }

    /// Returns `true` once every ship required by `fleet` is on the board.
    pub fn fleet_complete(&self, fleet: &Fleet) -> bool {
        fleet
            .entries()
            .all(|(kind, count)| self.count_of(kind) >= count)
    }

    /// Check whether a ship could be placed, without touching the board.
    pub fn can_place(&self, kind: ShipKind, start: Coordinate, orientation: Orientation) -> bool {
        self.check_placement(kind, start, orientation).is_ok()
    }

    /// Place a ship, or leave the board unchanged and report why not.
    pub fn place(
        &mut self,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Placement, PlacementError> {
        self.check_placement(kind, start, orientation)?;
        let placement = Placement::new(kind, start, orientation);
        self.placements.push(placement);
        Ok(placement)
    }

    fn check_placement(
        &self,
        kind: ShipKind,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let cells = candidate_cells(kind, start, orientation).ok_or(PlacementError::OutOfBounds)?;
        if !cells.iter().all(|c| self.contains(*c)) {
            return Err(PlacementError::OutOfBounds);
        }
        let candidate: HashSet<Coordinate> = cells.into_iter().collect();
        let overlaps = self
            .placements
            .iter()
            .flat_map(|p| p.covered_cells())
            .any(|c| candidate.contains(&c));
        if overlaps {
            return Err(PlacementError::Overlaps);
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  id: {},\n  size: {}x{},\n  owner: {},\n  placements: {:?}\n}}",
            self.id, self.width, self.height, self.owner, self.placements
        )
    }
}
