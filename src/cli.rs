//! Text command front end.
//!
//! Turns REPL lines such as `fire ABCD1234 <shooter> <board> 3 4` into
//! protocol requests, and renders board snapshots as a grid.

use core::fmt::Write as _;

use crate::core::{BoardId, Orientation, PlayerId, ShipKind, ShotResult};
use crate::domain::BoardSnapshot;
use crate::protocol::Request;

pub const HELP: &str = "\
Commands:
  new [WIDTH HEIGHT [FLEET]]             create a match (default 10 10 2x2,2x3,1x4,1x5)
  show CODE                              show a match
  join CODE NAME                         join a match
  place CODE PLAYER KIND X Y h|v         place a ship (KIND: destroyer, cruiser, battleship, carrier)
  fire CODE SHOOTER BOARD X Y            fire at a board
  board CODE BOARD                       show a board with ships and shots
  finish CODE                            finish a running match
  help                                   show this text
  quit                                   exit";

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Request),
    Help,
    Quit,
}

/// Parse a REPL line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    let (verb, args) = match words.split_first() {
        Some((verb, args)) => (verb.to_ascii_lowercase(), args),
        None => return Ok(None),
    };

    let request = match (verb.as_str(), args) {
        ("help" | "?", []) => return Ok(Some(Command::Help)),
        ("quit" | "exit", []) => return Ok(Some(Command::Quit)),
        ("new", []) => Request::CreateMatch {
            width: None,
            height: None,
            fleet: None,
            strict_turns: false,
        },
        ("new", [w, h]) | ("new", [w, h, _]) => Request::CreateMatch {
            width: Some(parse_num(w, "width")?),
            height: Some(parse_num(h, "height")?),
            fleet: args.get(2).map(|f| f.to_string()),
            strict_turns: false,
        },
        ("show", [code]) => Request::GetMatch {
            code: code.to_string(),
        },
        ("join", [code, name @ ..]) if !name.is_empty() => Request::Join {
            code: code.to_string(),
            username: name.join(" "),
        },
        ("place", [code, player, kind, x, y, orientation]) => Request::PlaceShip {
            code: code.to_string(),
            player_id: parse_id::<PlayerId>(player, "player id")?,
            kind: kind.parse::<ShipKind>()?,
            x: parse_num(x, "x")?,
            y: parse_num(y, "y")?,
            orientation: orientation.parse::<Orientation>()?,
        },
        ("fire", [code, shooter, board, x, y]) => Request::Fire {
            code: code.to_string(),
            shooter_id: parse_id::<PlayerId>(shooter, "shooter id")?,
            board_id: parse_id::<BoardId>(board, "board id")?,
            x: parse_num(x, "x")?,
            y: parse_num(y, "y")?,
        },
        ("board", [code, board]) => Request::BoardState {
            code: code.to_string(),
            board_id: parse_id::<BoardId>(board, "board id")?,
        },
        ("finish", [code]) => Request::Finish {
            code: code.to_string(),
        },
        (verb, _) => {
            return Err(format!(
                "Unknown or malformed command '{}' - type 'help' for usage",
                verb
            ))
        }
    };
    Ok(Some(Command::Run(request)))
}

fn parse_num<T: core::str::FromStr>(s: &str, what: &str) -> Result<T, String> {
    s.parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number", what, s))
}

fn parse_id<T: core::str::FromStr>(s: &str, what: &str) -> Result<T, String> {
    s.parse().map_err(|_| format!("Invalid {} '{}'", what, s))
}

/// Draw a board: `S` ship, `X` hit, `#` sunk ship cell, `o` miss, `.` water.
pub fn render_board(board: &BoardSnapshot) -> String {
    let (w, h) = (board.width as usize, board.height as usize);
    let mut grid = vec![vec!['.'; w]; h];
    for ship in &board.ships {
        for i in 0..ship.size as usize {
            let (x, y) = match ship.orientation {
                Orientation::Horizontal => (ship.start_x as usize + i, ship.start_y as usize),
                Orientation::Vertical => (ship.start_x as usize, ship.start_y as usize + i),
            };
            if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = if ship.sunk { '#' } else { 'S' };
            }
        }
    }
    for shot in &board.shots {
        if let Some(cell) = grid
            .get_mut(shot.y as usize)
            .and_then(|row| row.get_mut(shot.x as usize))
        {
            match shot.result {
                ShotResult::Miss => *cell = 'o',
                ShotResult::Hit if *cell == 'S' => *cell = 'X',
                _ => {}
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} ({}x{})", board.owner_username, w, h);
    out.push_str("    ");
    for x in 0..w {
        let _ = write!(out, "{:>2}", x);
    }
    out.push('\n');
    for (y, row) in grid.iter().enumerate() {
        let _ = write!(out, "{:>3} ", y);
        for cell in row {
            let _ = write!(out, " {}", cell);
        }
        out.push('\n');
    }
    out
}
