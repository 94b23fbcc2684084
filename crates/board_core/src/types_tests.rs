use super::*;

#[test]
fn test_opponents_differ_by_side() {
    let light_rook = Piece::new(PieceKind::Rook, Side::Light);
    let light_pawn = Piece::new(PieceKind::Pawn, Side::Light);
    let dark_pawn = Piece::new(PieceKind::Pawn, Side::Dark);

    assert!(light_rook.is_opponent(dark_pawn));
    assert!(dark_pawn.is_opponent(light_rook));
    assert!(!light_rook.is_opponent(light_pawn));
    assert!(!light_rook.is_opponent(light_rook));

    assert!(light_rook.is_opponent_of(Side::Dark));
    assert!(!light_rook.is_opponent_of(Side::Light));
}

#[test]
fn test_side_helpers() {
    assert_eq!(Side::Light.opposite(), Side::Dark);
    assert_eq!(Side::Dark.opposite(), Side::Light);
    assert_eq!(Side::Light.forward(), 1);
    assert_eq!(Side::Dark.forward(), -1);
    assert_eq!(Side::Light.pawn_start_rank(), 2);
    assert_eq!(Side::Dark.pawn_start_rank(), 7);
}

#[test]
fn test_sliding_kinds() {
    let sliding: Vec<PieceKind> = PieceKind::ALL.into_iter().filter(|k| k.is_sliding()).collect();
    assert_eq!(sliding, vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]);
}

#[test]
fn test_symbols_and_names() {
    assert_eq!(Piece::new(PieceKind::Knight, Side::Light).symbol(), 'N');
    assert_eq!(Piece::new(PieceKind::Knight, Side::Dark).symbol(), 'n');
    assert_eq!(Piece::new(PieceKind::Queen, Side::Dark).to_string(), "dark queen");

    let mv = Move::new("e2".parse().unwrap(), "e4".parse().unwrap());
    assert_eq!(mv.to_string(), "e2-e4");
}
