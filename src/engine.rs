//! In-memory match registry.
//!
//! Each match sits behind its own `RwLock`: mutations take the write lock for
//! the whole validate-then-commit step, reads take the read lock. The outer
//! map lock is only held to look up or insert a match, so different matches
//! never block each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{
    BoardId, EngineError, Match, MatchConfiguration, Orientation, PlayerId, ShipKind,
    MATCH_CODE_LENGTH,
};
use crate::domain::*;
use crate::engine_api::MatchApi;

type SharedMatch = Arc<RwLock<Match>>;

/// Owns every live match, keyed by join code.
pub struct MatchRegistry {
    matches: RwLock<HashMap<String, SharedMatch>>,
    rng: Mutex<SmallRng>,
}

impl MatchRegistry {
    /// Registry with codes drawn from an OS-seeded RNG.
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::from_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Registry with reproducible match codes.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            matches: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Codes of all matches held, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.read_map().keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    fn read_map(&self) -> RwLockReadGuard<'_, HashMap<String, SharedMatch>> {
        self.matches.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, HashMap<String, SharedMatch>> {
        self.matches.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, code: &str) -> Result<SharedMatch, EngineError> {
        self.read_map()
            .get(code)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(code.to_string()))
    }

    /// Run `f` against a match under its read lock.
    pub fn read<T>(&self, code: &str, f: impl FnOnce(&Match) -> T) -> Result<T, EngineError> {
        let shared = self.lookup(code)?;
        let game = shared.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&game))
    }

    /// Run `f` against a match under its write lock.
    pub fn write<T>(
        &self,
        code: &str,
        f: impl FnOnce(&mut Match) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let shared = self.lookup(code)?;
        let mut game = shared.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut game).inspect_err(|e| log::debug!("match {}: rejected: {}", code, e))
    }

    fn next_code(&self, taken: &HashMap<String, SharedMatch>) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let code = Alphanumeric
                .sample_string(&mut *rng, MATCH_CODE_LENGTH)
                .to_ascii_uppercase();
            if !taken.contains_key(&code) {
                return code;
            }
        }
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchApi for MatchRegistry {
    fn create_match(&self, config: MatchConfiguration) -> MatchSnapshot {
        let mut map = self.write_map();
        let code = self.next_code(&map);
        let game = Match::new(code.clone(), config);
        let snapshot = MatchSnapshot::from(&game);
        log::info!(
            "match {}: created ({}x{}, fleet {})",
            code,
            snapshot.board_width,
            snapshot.board_height,
            game.config().fleet()
        );
        map.insert(code, Arc::new(RwLock::new(game)));
        snapshot
    }

    fn get_match(&self, code: &str) -> Result<MatchSnapshot, EngineError> {
        self.read(code, |game| MatchSnapshot::from(game))
    }

    fn join(&self, code: &str, username: &str) -> Result<JoinReceipt, EngineError> {
        self.write(code, |game| {
            let (player, board) = game.join(username)?;
            let game = &*game;
            Ok(JoinReceipt {
                game: MatchSnapshot::from(game),
                player: PlayerSnapshot::from(&player),
                board: BoardSummary::of(game, &board),
            })
        })
    }

    fn place_ship(
        &self,
        code: &str,
        player: PlayerId,
        kind: ShipKind,
        x: i64,
        y: i64,
        orientation: Orientation,
    ) -> Result<PlacementSnapshot, EngineError> {
        self.write(code, |game| {
            let placement = game.place_ship(player, kind, x, y, orientation)?;
            Ok(PlacementSnapshot::new(&placement, false))
        })
    }

    fn fire(
        &self,
        code: &str,
        shooter: PlayerId,
        target: BoardId,
        x: i64,
        y: i64,
    ) -> Result<ShotSnapshot, EngineError> {
        self.write(code, |game| {
            let shot = game.fire(shooter, target, x, y)?;
            Ok(ShotSnapshot::from(&shot))
        })
    }

    fn board_state(&self, code: &str, board: BoardId) -> Result<BoardSnapshot, EngineError> {
        self.read(code, |game| {
            game.board(board)
                .map(|b| BoardSnapshot::of(game, b))
                .ok_or(EngineError::InvalidState("board not in match"))
        })?
    }

    fn finish(&self, code: &str) -> Result<MatchSnapshot, EngineError> {
        self.write(code, |game| {
            game.finish()?;
            Ok(MatchSnapshot::from(&*game))
        })
    }
}
