//! Request/response messages for driving a [`MatchApi`] from outside Rust.
//!
//! One JSON object per request, one per response. Transport is up to the
//! caller; this module never does I/O.

use serde::{Deserialize, Serialize};

use crate::core::{
    BoardId, ConfigError, EngineError, Fleet, MatchConfiguration, Orientation, PlayerId,
    ShipKind, DEFAULT_BOARD_SIZE,
};
use crate::domain::*;
use crate::engine_api::MatchApi;

/// Operations accepted by [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Create a match; omitted fields fall back to the 10x10 default fleet.
    CreateMatch {
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        height: Option<u32>,
        #[serde(default)]
        fleet: Option<String>,
        #[serde(default)]
        strict_turns: bool,
    },
    GetMatch {
        code: String,
    },
    Join {
        code: String,
        username: String,
    },
    PlaceShip {
        code: String,
        player_id: PlayerId,
        kind: ShipKind,
        x: i64,
        y: i64,
        orientation: Orientation,
    },
    Fire {
        code: String,
        shooter_id: PlayerId,
        board_id: BoardId,
        x: i64,
        y: i64,
    },
    BoardState {
        code: String,
        board_id: BoardId,
    },
    Finish {
        code: String,
    },
}

/// Reply to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Match(MatchSnapshot),
    Joined(JoinReceipt),
    Placement(PlacementSnapshot),
    Shot(ShotSnapshot),
    Board(BoardSnapshot),
    Error { kind: String, message: String },
}

impl Response {
    pub fn error(kind: &str, message: impl Into<String>) -> Self {
        Response::Error {
            kind: kind.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<EngineError> for Response {
    fn from(err: EngineError) -> Self {
        Response::error(err.kind(), err.to_string())
    }
}

impl From<ConfigError> for Response {
    fn from(err: ConfigError) -> Self {
        Response::error("invalid_argument", err.to_string())
    }
}

/// Build a configuration from optional request fields.
pub fn configuration(
    width: Option<u32>,
    height: Option<u32>,
    fleet: Option<&str>,
    strict_turns: bool,
) -> Result<MatchConfiguration, ConfigError> {
    let fleet = match fleet {
        Some(definition) => definition.parse()?,
        None => Fleet::default(),
    };
    let config = MatchConfiguration::new(
        width.unwrap_or(DEFAULT_BOARD_SIZE),
        height.unwrap_or(DEFAULT_BOARD_SIZE),
        fleet,
    )?;
    Ok(config.with_strict_turns(strict_turns))
}

/// Execute one request against `api`.
pub fn dispatch<A: MatchApi + ?Sized>(api: &A, request: Request) -> Response {
    let result = match request {
        Request::CreateMatch {
            width,
            height,
            fleet,
            strict_turns,
        } => {
            return match configuration(width, height, fleet.as_deref(), strict_turns) {
                Ok(config) => Response::Match(api.create_match(config)),
                Err(e) => e.into(),
            }
        }
        Request::GetMatch { code } => api.get_match(&code).map(Response::Match),
        Request::Join { code, username } => api.join(&code, &username).map(Response::Joined),
        Request::PlaceShip {
            code,
            player_id,
            kind,
            x,
            y,
            orientation,
        } => api
            .place_ship(&code, player_id, kind, x, y, orientation)
            .map(Response::Placement),
        Request::Fire {
            code,
            shooter_id,
            board_id,
            x,
            y,
        } => api
            .fire(&code, shooter_id, board_id, x, y)
            .map(Response::Shot),
        Request::BoardState { code, board_id } => {
            api.board_state(&code, board_id).map(Response::Board)
        }
        Request::Finish { code } => api.finish(&code).map(Response::Match),
    };
    result.unwrap_or_else(Response::from)
}

/// Handle one JSON request line and return one JSON response line.
pub fn handle_json<A: MatchApi + ?Sized>(api: &A, line: &str) -> String {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(api, request),
        Err(e) => Response::error("invalid_argument", format!("Malformed request: {}", e)),
    };
    encode(&response)
}

/// Serialize a response to a single JSON line.
pub fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        serde_json::json!({ "type": "error", "kind": "internal", "message": e.to_string() })
            .to_string()
    })
}
