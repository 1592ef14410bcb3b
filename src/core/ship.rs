//! Ship kinds, orientation and placements.

use core::fmt;
use core::str::FromStr;

use crate::core::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// Cells extend along increasing x.
    Horizontal,
    /// Cells extend along increasing y.
    Vertical,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            other => Err(format!("Unknown orientation '{}' - use h or v", other)),
        }
    }
}

/// Kind of ship. Each kind has a fixed length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipKind {
    Destroyer,
    Cruiser,
    Battleship,
    Carrier,
}

impl ShipKind {
    /// Every kind, shortest first.
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Destroyer,
        ShipKind::Cruiser,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Ship's length in cells.
    pub fn length(&self) -> u32 {
        match self {
            ShipKind::Destroyer => 2,
            ShipKind::Cruiser => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
        }
    }

    /// The kind with the given length, if any.
    pub fn from_length(length: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.length() == length)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown ship kind '{}'", s))
    }
}

/// Cells a ship of `kind` would cover from `start`, or `None` if the
/// coordinates overflow.
pub(crate) fn candidate_cells(
    kind: ShipKind,
    start: Coordinate,
    orientation: Orientation,
) -> Option<Vec<Coordinate>> {
    (0..kind.length())
        .map(|i| match orientation {
            Orientation::Horizontal => start.step_x(i),
            Orientation::Vertical => start.step_y(i),
        })
        .collect()
}

/// A ship bound to a start cell and orientation on one board.
///
/// Only `Board::place` constructs placements, so the covered cells of any
/// `Placement` are known to lie on its board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    kind: ShipKind,
    start: Coordinate,
    orientation: Orientation,
}

impl Placement {
    pub(crate) fn new(kind: ShipKind, start: Coordinate, orientation: Orientation) -> Self {
        Self {
            kind,
            start,
            orientation,
        }
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Start cell (top-most / left-most).
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// All cells covered by this ship, starting at `start`.
    pub fn covered_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let Coordinate { x, y } = self.start;
        (0..self.kind.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// Returns `true` if this ship covers `coord`.
    pub fn covers(&self, coord: Coordinate) -> bool {
        let len = self.kind.length();
        match self.orientation {
            Orientation::Horizontal => {
                coord.y == self.start.y && coord.x >= self.start.x && coord.x - self.start.x < len
            }
            Orientation::Vertical => {
                coord.x == self.start.x && coord.y >= self.start.y && coord.y - self.start.y < len
            }
        }
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ kind: {}, start: {}, orientation: {:?} }}",
            self.kind.name(),
            self.start,
            self.orientation,
        )
    }
}
