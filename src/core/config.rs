//! Match configuration: board dimensions and fleet composition.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::core::ship::ShipKind;

pub const DEFAULT_BOARD_SIZE: u32 = 10;
pub const MAX_BOARD_DIMENSION: u32 = 26;
/// Two Destroyers, two Cruisers, one Battleship, one Carrier.
pub const DEFAULT_FLEET_COUNTS: [(ShipKind, u32); 4] = [
    (ShipKind::Destroyer, 2),
    (ShipKind::Cruiser, 2),
    (ShipKind::Battleship, 1),
    (ShipKind::Carrier, 1),
];
/// Compact definition of [`DEFAULT_FLEET_COUNTS`].
pub const DEFAULT_FLEET: &str = "2x2,2x3,1x4,1x5";
pub const MATCH_CODE_LENGTH: usize = 8;
pub const MAX_USERNAME_LEN: usize = 50;

/// Errors produced while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The fleet definition has no entries.
    EmptyFleet,
    /// An entry is not of the form `<count>x<ship>`.
    MalformedEntry(String),
    /// An entry asks for zero ships.
    ZeroCount(String),
    /// No ship has this length or name.
    UnknownShip(String),
    /// The count of one kind does not fit in a `u32`.
    CountOverflow(ShipKind),
    /// Width or height is outside `1..=MAX_BOARD_DIMENSION`.
    InvalidDimensions { width: u32, height: u32 },
    /// A ship is longer than both board sides.
    ShipTooLong(ShipKind),
    /// The fleet covers more cells than the board has.
    FleetTooLarge { cells: u64, area: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFleet => write!(f, "Fleet definition is empty"),
            ConfigError::MalformedEntry(e) => {
                write!(f, "Malformed fleet entry '{}' - expected <count>x<ship>", e)
            }
            ConfigError::ZeroCount(e) => write!(f, "Fleet entry '{}' has a zero count", e),
            ConfigError::UnknownShip(s) => write!(f, "Unknown ship '{}'", s),
            ConfigError::CountOverflow(kind) => {
                write!(f, "Too many ships of kind {}", kind.name())
            }
            ConfigError::InvalidDimensions { width, height } => write!(
                f,
                "Board {}x{} is invalid - each side must be 1..={}",
                width, height, MAX_BOARD_DIMENSION
            ),
            ConfigError::ShipTooLong(kind) => {
                write!(f, "{} does not fit on the board", kind.name())
            }
            ConfigError::FleetTooLarge { cells, area } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, area
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Multiset of ship kinds each player places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    counts: BTreeMap<ShipKind, u32>,
}

impl Fleet {
    /// Build a fleet from `(kind, count)` pairs; repeated kinds accumulate.
    pub fn from_counts<I>(counts: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (ShipKind, u32)>,
    {
        let mut map = BTreeMap::new();
        for (kind, count) in counts {
            if count == 0 {
                return Err(ConfigError::ZeroCount(format!("0x{}", kind.name())));
            }
            let total: &mut u32 = map.entry(kind).or_insert(0);
            *total = total
                .checked_add(count)
                .ok_or(ConfigError::CountOverflow(kind))?;
        }
        if map.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(Self { counts: map })
    }

    /// `(kind, count)` pairs, shortest kind first.
    pub fn entries(&self) -> impl Iterator<Item = (ShipKind, u32)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    /// How many ships of `kind` the fleet contains.
    pub fn count_of(&self, kind: ShipKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_ships(&self) -> u64 {
        self.counts.values().map(|c| u64::from(*c)).sum()
    }

    /// Total number of cells covered by a complete fleet. Widened to `u64`
    /// so no count can overflow it.
    pub fn total_cells(&self) -> u64 {
        self.entries()
            .map(|(k, c)| u64::from(k.length()) * u64::from(c))
            .sum()
    }

    /// Canonical compact definition, e.g. `2x2,2x3,1x4,1x5`.
    pub fn definition(&self) -> String {
        self.entries()
            .map(|(k, c)| format!("{}x{}", c, k.length()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            counts: BTreeMap::from(DEFAULT_FLEET_COUNTS),
        }
    }
}

impl FromStr for Fleet {
    type Err = ConfigError;

    /// Parse `<count>x<ship>` entries separated by commas, where `<ship>` is a
    /// length (`2`) or a name (`Destroyer`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut counts = Vec::new();
        for raw in s.split(',') {
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }
            let (count, ship) = entry
                .split_once(['x', 'X'])
                .ok_or_else(|| ConfigError::MalformedEntry(entry.to_string()))?;
            let count: u32 = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::MalformedEntry(entry.to_string()))?;
            if count == 0 {
                return Err(ConfigError::ZeroCount(entry.to_string()));
            }
            let ship = ship.trim();
            let kind = match ship.parse::<u32>() {
                Ok(len) => ShipKind::from_length(len),
                Err(_) => ship.parse::<ShipKind>().ok(),
            }
            .ok_or_else(|| ConfigError::UnknownShip(ship.to_string()))?;
            counts.push((kind, count));
        }
        Self::from_counts(counts)
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}

/// Parameters fixed when a match is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfiguration {
    board_width: u32,
    board_height: u32,
    fleet: Fleet,
    strict_turns: bool,
}

impl MatchConfiguration {
    /// Validate dimensions against the fleet.
    pub fn new(board_width: u32, board_height: u32, fleet: Fleet) -> Result<Self, ConfigError> {
        let dims = 1..=MAX_BOARD_DIMENSION;
        if !dims.contains(&board_width) || !dims.contains(&board_height) {
            return Err(ConfigError::InvalidDimensions {
                width: board_width,
                height: board_height,
            });
        }
        let longest = board_width.max(board_height);
        if let Some((kind, _)) = fleet.entries().find(|(k, _)| k.length() > longest) {
            return Err(ConfigError::ShipTooLong(kind));
        }
        let area = board_width * board_height;
        let cells = fleet.total_cells();
        if cells > u64::from(area) {
            return Err(ConfigError::FleetTooLarge { cells, area });
        }
        Ok(Self {
            board_width,
            board_height,
            fleet,
            strict_turns: false,
        })
    }

    /// Parse the fleet definition and validate in one step.
    pub fn from_parts(
        board_width: u32,
        board_height: u32,
        fleet_definition: &str,
    ) -> Result<Self, ConfigError> {
        Self::new(board_width, board_height, fleet_definition.parse()?)
    }

    /// Require shooters to alternate, starting with the first player to join.
    pub fn with_strict_turns(mut self, strict: bool) -> Self {
        self.strict_turns = strict;
        self
    }

    pub fn board_width(&self) -> u32 {
        self.board_width
    }

    pub fn board_height(&self) -> u32 {
        self.board_height
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn strict_turns(&self) -> bool {
        self.strict_turns
    }
}

impl Default for MatchConfiguration {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_SIZE,
            board_height: DEFAULT_BOARD_SIZE,
            fleet: Fleet::default(),
            strict_turns: false,
        }
    }
}
