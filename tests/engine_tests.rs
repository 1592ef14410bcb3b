use std::collections::HashSet;

use broadside::{
    BoardId, EngineError, MatchApi, MatchConfiguration, MatchRegistry, MatchStatus, Orientation,
    PlayerId, ShipKind, ShotResult, MATCH_CODE_LENGTH,
};

#[test]
fn test_create_and_get_match() {
    let registry = MatchRegistry::with_seed(7);
    assert!(registry.is_empty());
    let created = registry.create_match(MatchConfiguration::default());

    assert_eq!(created.status, MatchStatus::Waiting);
    assert_eq!(created.code.len(), MATCH_CODE_LENGTH);
    assert!(created
        .code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(created.board_width, 10);
    assert_eq!(created.fleet.len(), 4);
    assert!(created.players.is_empty());

    let fetched = registry.get_match(&created.code).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.codes(), vec![created.code]);
}

#[test]
fn test_unknown_code_is_not_found() {
    let registry = MatchRegistry::with_seed(1);
    let err = registry.get_match("NOPE").unwrap_err();
    assert_eq!(err, EngineError::NotFound("NOPE".into()));
    assert_eq!(err.kind(), "not_found");
    assert!(registry.join("NOPE", "Alice").is_err());
    assert!(matches!(
        registry.fire("NOPE", PlayerId::new(), BoardId::new(), 0, 0),
        Err(EngineError::NotFound(_))
    ));
    assert!(matches!(registry.finish("NOPE"), Err(EngineError::NotFound(_))));
}

#[test]
fn test_seeded_codes_are_reproducible_and_unique() {
    let a = MatchRegistry::with_seed(42);
    let b = MatchRegistry::with_seed(42);
    let codes_a: Vec<String> = (0..20)
        .map(|_| a.create_match(MatchConfiguration::default()).code)
        .collect();
    let codes_b: Vec<String> = (0..20)
        .map(|_| b.create_match(MatchConfiguration::default()).code)
        .collect();
    assert_eq!(codes_a, codes_b);
    let unique: HashSet<_> = codes_a.iter().collect();
    assert_eq!(unique.len(), 20);
    assert_eq!(a.len(), 20);
}

#[test]
fn test_full_game_through_api() {
    let registry = MatchRegistry::with_seed(3);
    let code = registry.create_match(MatchConfiguration::default()).code;

    let alice = registry.join(&code, "Alice").unwrap();
    assert_eq!(alice.game.status, MatchStatus::Waiting);
    assert_eq!(alice.board.owner_id, alice.player.id);
    let bob = registry.join(&code, "Bob").unwrap();
    assert_eq!(bob.game.status, MatchStatus::Running);
    assert_eq!(bob.game.players.len(), 2);

    let placed = registry
        .place_ship(&code, bob.player.id, ShipKind::Destroyer, 3, 3, Orientation::Horizontal)
        .unwrap();
    assert_eq!(placed.size, 2);
    assert!(!placed.sunk);

    let fire = |x, y| {
        registry
            .fire(&code, alice.player.id, bob.board.id, x, y)
            .unwrap()
            .result
    };
    assert_eq!(fire(3, 3), ShotResult::Hit);
    assert_eq!(fire(4, 3), ShotResult::Sunk);
    assert_eq!(fire(3, 3), ShotResult::AlreadyShot);
    assert_eq!(fire(0, 0), ShotResult::Miss);

    let board = registry.board_state(&code, bob.board.id).unwrap();
    assert_eq!(board.shots.len(), 4);
    assert!(board.ships[0].sunk);
    assert!(board.fleet_destroyed);
    assert_eq!(board.owner_username, "Bob");

    let snapshot = registry.get_match(&code).unwrap();
    assert_eq!(snapshot.shots_fired, 4);
    assert_eq!(snapshot.winner, Some(alice.player.id));
    assert_eq!(snapshot.status, MatchStatus::Running);

    let finished = registry.finish(&code).unwrap();
    assert_eq!(finished.status, MatchStatus::Finished);
    assert!(registry.finish(&code).is_err());
}

#[test]
fn test_board_state_for_foreign_board() {
    let registry = MatchRegistry::with_seed(5);
    let code = registry.create_match(MatchConfiguration::default()).code;
    registry.join(&code, "Alice").unwrap();
    assert_eq!(
        registry.board_state(&code, BoardId::new()).unwrap_err(),
        EngineError::InvalidState("board not in match")
    );
}

#[test]
fn test_matches_are_isolated() {
    let registry = MatchRegistry::with_seed(9);
    let first = registry.create_match(MatchConfiguration::default()).code;
    let second = registry.create_match(MatchConfiguration::default()).code;
    let a = registry.join(&first, "A").unwrap();
    registry.join(&first, "B").unwrap();
    let other = registry.join(&second, "C").unwrap();

    // board from another match is unknown here
    assert_eq!(
        registry
            .fire(&first, a.player.id, other.board.id, 0, 0)
            .unwrap_err(),
        EngineError::InvalidState("board not in match")
    );
    assert_eq!(
        registry.get_match(&second).unwrap().status,
        MatchStatus::Waiting
    );
}

#[test]
fn test_concurrent_joins_admit_exactly_two() {
    let registry = MatchRegistry::with_seed(11);
    let code = registry.create_match(MatchConfiguration::default()).code;

    let results: Vec<Result<_, EngineError>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = &registry;
                let code = &code;
                s.spawn(move || registry.join(code, &format!("player{}", i)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 2);
    let snapshot = registry.get_match(&code).unwrap();
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.boards.len(), 2);
    assert_eq!(snapshot.status, MatchStatus::Running);
}

#[test]
fn test_concurrent_fire_keeps_log_consistent() {
    let registry = MatchRegistry::with_seed(13);
    let code = registry.create_match(MatchConfiguration::default()).code;
    let alice = registry.join(&code, "Alice").unwrap();
    let bob = registry.join(&code, "Bob").unwrap();

    std::thread::scope(|s| {
        for (shooter, target) in [
            (alice.player.id, bob.board.id),
            (bob.player.id, alice.board.id),
        ] {
            let registry = &registry;
            let code = &code;
            s.spawn(move || {
                for x in 0..10 {
                    for y in 0..5 {
                        registry.fire(code, shooter, target, x, y).unwrap();
                    }
                }
            });
        }
    });

    let snapshot = registry.get_match(&code).unwrap();
    assert_eq!(snapshot.shots_fired, 100);
    let board = registry.board_state(&code, bob.board.id).unwrap();
    let seqs: HashSet<usize> = board.shots.iter().map(|s| s.seq).collect();
    assert_eq!(seqs.len(), 50);
    assert!(seqs.iter().all(|seq| *seq < 100));
}

#[test]
fn test_api_usable_as_trait_object() {
    use broadside::prelude::*;

    let registry: Box<dyn MatchApi> = Box::new(MatchRegistry::with_seed(17));
    let code = registry.create_match(MatchConfiguration::default()).code;
    assert!(registry.get_match(&code).is_ok());
}
