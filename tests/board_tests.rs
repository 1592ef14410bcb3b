use broadside::{Board, Coordinate, Fleet, Orientation, PlacementError, PlayerId, ShipKind};

fn board() -> Board {
    Board::new(10, 10, PlayerId::new())
}

#[test]
fn test_covered_cells_follow_orientation() {
    let mut board = board();
    let h = board
        .place(ShipKind::Cruiser, Coordinate::new(2, 5), Orientation::Horizontal)
        .unwrap();
    let cells: Vec<_> = h.covered_cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 5), Coordinate::new(3, 5), Coordinate::new(4, 5)]
    );

    let v = board
        .place(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Vertical)
        .unwrap();
    let cells: Vec<_> = v.covered_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
}

#[test]
fn test_destroyer_at_three_three() {
    let mut board = board();
    let p = board
        .place(ShipKind::Destroyer, Coordinate::new(3, 3), Orientation::Horizontal)
        .unwrap();
    assert!(p.covers(Coordinate::new(3, 3)));
    assert!(p.covers(Coordinate::new(4, 3)));
    assert!(!p.covers(Coordinate::new(5, 3)));
    assert!(!p.covers(Coordinate::new(3, 4)));
    assert_eq!(board.placements().len(), 1);
}

#[test]
fn test_place_touching_edge_is_allowed() {
    let mut board = board();
    // Carrier from x=5 covers 5..=9, the last column
    assert!(board
        .place(ShipKind::Carrier, Coordinate::new(5, 0), Orientation::Horizontal)
        .is_ok());
    assert!(board
        .place(ShipKind::Battleship, Coordinate::new(0, 6), Orientation::Vertical)
        .is_ok());
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = board();
    assert_eq!(
        board
            .place(ShipKind::Carrier, Coordinate::new(6, 0), Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        board
            .place(ShipKind::Cruiser, Coordinate::new(0, 8), Orientation::Vertical)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        board
            .place(ShipKind::Destroyer, Coordinate::new(10, 10), Orientation::Vertical)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert!(board.placements().is_empty());
}

#[test]
fn test_place_with_overflowing_start() {
    let mut board = board();
    let start = Coordinate::new(u32::MAX, 0);
    assert!(!board.can_place(ShipKind::Destroyer, start, Orientation::Horizontal));
    assert_eq!(
        board
            .place(ShipKind::Destroyer, start, Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
}

#[test]
fn test_overlap_rejected_and_board_unchanged() {
    let mut board = board();
    board
        .place(ShipKind::Battleship, Coordinate::new(2, 4), Orientation::Horizontal)
        .unwrap();
    let before = board.occupied_cells();

    // crosses the battleship at (3, 4)
    assert_eq!(
        board
            .place(ShipKind::Cruiser, Coordinate::new(3, 2), Orientation::Vertical)
            .unwrap_err(),
        PlacementError::Overlaps
    );
    assert_eq!(board.placements().len(), 1);
    assert_eq!(board.occupied_cells(), before);
}

#[test]
fn test_adjacent_ships_are_allowed() {
    let mut board = board();
    board
        .place(ShipKind::Cruiser, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .place(ShipKind::Cruiser, Coordinate::new(0, 1), Orientation::Horizontal)
        .unwrap();
    board
        .place(ShipKind::Destroyer, Coordinate::new(3, 0), Orientation::Vertical)
        .unwrap();
    assert_eq!(board.occupied_cells().len(), 8);
}

#[test]
fn test_can_place_does_not_mutate() {
    let mut board = board();
    board
        .place(ShipKind::Destroyer, Coordinate::new(1, 1), Orientation::Horizontal)
        .unwrap();
    for x in 0..10 {
        for y in 0..10 {
            let _ = board.can_place(ShipKind::Carrier, Coordinate::new(x, y), Orientation::Vertical);
        }
    }
    assert_eq!(board.placements().len(), 1);
    assert!(board.can_place(ShipKind::Carrier, Coordinate::new(5, 5), Orientation::Vertical));
    assert!(!board.can_place(ShipKind::Carrier, Coordinate::new(0, 1), Orientation::Horizontal));
}

#[test]
fn test_placement_queries() {
    let mut board = board();
    board
        .place(ShipKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
        .place(ShipKind::Destroyer, Coordinate::new(0, 2), Orientation::Horizontal)
        .unwrap();
    board
        .place(ShipKind::Carrier, Coordinate::new(9, 0), Orientation::Vertical)
        .unwrap();

    assert_eq!(board.count_of(ShipKind::Destroyer), 2);
    assert_eq!(board.count_of(ShipKind::Cruiser), 0);
    assert_eq!(
        board.placement_at(Coordinate::new(9, 4)).map(|p| p.kind()),
        Some(ShipKind::Carrier)
    );
    assert!(board.placement_at(Coordinate::new(5, 5)).is_none());

    let fleet: Fleet = "2x2,1x5".parse().unwrap();
    assert!(board.fleet_complete(&fleet));
    assert!(!board.fleet_complete(&Fleet::default()));
}
