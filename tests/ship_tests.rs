use broadside::{Board, Coordinate, Orientation, PlacementError, PlayerId, ShipKind};

#[test]
fn test_kind_lengths_and_names() {
    let lengths: Vec<u32> = ShipKind::ALL.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![2, 3, 4, 5]);
    assert_eq!(ShipKind::Battleship.name(), "Battleship");
    assert_eq!(ShipKind::from_length(3), Some(ShipKind::Cruiser));
    assert_eq!(ShipKind::from_length(1), None);
    assert_eq!(ShipKind::from_length(6), None);
}

#[test]
fn test_kind_from_str() {
    assert_eq!("carrier".parse::<ShipKind>(), Ok(ShipKind::Carrier));
    assert_eq!("DESTROYER".parse::<ShipKind>(), Ok(ShipKind::Destroyer));
    assert!("submarine".parse::<ShipKind>().is_err());
}

#[test]
fn test_orientation_from_str() {
    assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("Vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert!("diagonal".parse::<Orientation>().is_err());
}

#[test]
fn test_serde_names() {
    assert_eq!(
        serde_json::to_string(&ShipKind::Battleship).unwrap(),
        "\"BATTLESHIP\""
    );
    assert_eq!(
        serde_json::to_string(&Orientation::Vertical).unwrap(),
        "\"VERTICAL\""
    );
    let kind: ShipKind = serde_json::from_str("\"CRUISER\"").unwrap();
    assert_eq!(kind, ShipKind::Cruiser);
}

#[test]
fn test_placement_contains_and_iter() -> Result<(), PlacementError> {
    let mut board = Board::new(6, 6, PlayerId::new());
    let ship = board.place(ShipKind::Battleship, Coordinate::new(0, 0), Orientation::Vertical)?;
    let cells: Vec<_> = ship.covered_cells().collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[3], Coordinate::new(0, 3));
    for c in cells {
        assert!(ship.covers(c));
    }
    assert!(!ship.covers(Coordinate::new(0, 4)));
    assert_eq!(ship.start(), Coordinate::new(0, 0));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    Ok(())
}

#[test]
fn test_coordinate_from_signed() {
    assert_eq!(Coordinate::from_signed(3, 4), Some(Coordinate::new(3, 4)));
    assert_eq!(Coordinate::from_signed(-1, 0), None);
    assert_eq!(Coordinate::from_signed(0, i64::from(u32::MAX) + 1), None);
    assert!(Coordinate::new(9, 9).within(10, 10));
    assert!(!Coordinate::new(10, 0).within(10, 10));
    assert_eq!(Coordinate::new(3, 4).to_string(), "(3, 4)");
}
