//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Move, Piece, Position, Square};

fn has_move(moves: &[Move], from: Square, to: Square) -> bool {
    moves.iter().any(|m| m.from == from && m.to == to)
}

#[test]
fn test_castling_position_occupancy() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let occupied: Vec<Square> = pos.pieces.iter().collect();
    assert_eq!(occupied, vec![Square(7, 0), Square(7, 4), Square(7, 7)]);

    let moves = pos.legal_moves();
    assert!(has_move(&moves, Square(7, 4), Square(7, 6)));
    assert!(has_move(&moves, Square(7, 4), Square(7, 2)));
}

#[test]
fn test_black_castling() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1");
    let moves = pos.legal_moves();
    assert!(has_move(&moves, Square(0, 4), Square(0, 6)));
    assert!(has_move(&moves, Square(0, 4), Square(0, 2)));
}

#[test]
fn test_kingside_castle_emitted_before_queenside() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let castles: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.from == Square(7, 4) && m.file_distance() == 2)
        .collect();
    assert_eq!(castles.len(), 2);
    assert_eq!(castles[0].to, Square(7, 6));
    assert_eq!(castles[1].to, Square(7, 2));
}

#[test]
fn test_no_castling_without_rights() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R3K2R w - - 0 1");
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.file_distance() == 2));
}

#[test]
fn test_queenside_castle_without_corner_rook() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
    let moves = pos.legal_moves();
    assert!(has_move(&moves, Square(7, 4), Square(7, 6)));
    assert!(has_move(&moves, Square(7, 4), Square(7, 2)));

    // The rook relocation writes a rook on d1 even though a1 was empty
    let castled = pos.play(Move::new(Square(7, 4), Square(7, 2)));
    assert_eq!(castled.piece_at(Square(7, 2)), Some((Color::White, Piece::King)));
    assert_eq!(castled.piece_at(Square(7, 3)), Some((Color::White, Piece::Rook)));
    assert!(castled.piece_at(Square(7, 0)).is_none());
}

#[test]
fn test_no_castling_through_pieces() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.from == Square(7, 4) && m.file_distance() == 2));
}

#[test]
fn test_queenside_b_file_must_be_empty_but_may_be_attacked() {
    // Rook on b8 attacks b1, which the king never crosses
    let pos = Position::from_fen("1r6/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(has_move(&pos.legal_moves(), Square(7, 4), Square(7, 2)));

    let blocked = Position::from_fen("8/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert!(!has_move(&blocked.legal_moves(), Square(7, 4), Square(7, 2)));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Rook on f8 covers f1
    let pos = Position::from_fen("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.legal_moves();
    assert!(!has_move(&moves, Square(7, 4), Square(7, 6)));
    assert!(has_move(&moves, Square(7, 4), Square(7, 2)));
}

#[test]
fn test_no_castling_out_of_check() {
    let pos = Position::from_fen("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(pos.is_king_in_check(Color::White));
    let moves = pos.legal_moves();
    assert!(!moves.iter().any(|m| m.file_distance() == 2 && m.from == Square(7, 4)));
}

#[test]
fn test_castling_moves_rook() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/R3K2R w KQ - 0 1");

    let kingside = pos.play(Move::new(Square(7, 4), Square(7, 6)));
    assert_eq!(kingside.piece_at(Square(7, 6)), Some((Color::White, Piece::King)));
    assert_eq!(kingside.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
    assert!(kingside.piece_at(Square(7, 7)).is_none());

    let queenside = pos.play(Move::new(Square(7, 4), Square(7, 2)));
    assert_eq!(queenside.piece_at(Square(7, 2)), Some((Color::White, Piece::King)));
    assert_eq!(queenside.piece_at(Square(7, 3)), Some((Color::White, Piece::Rook)));
    assert!(queenside.piece_at(Square(7, 0)).is_none());
}

#[test]
fn test_castling_rights_survive_king_move() {
    // Rights are only ever read from the FEN, never revoked
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moved = pos.play(Move::new(Square(7, 4), Square(7, 3)));
    assert!(moved.castling_rights.has(Color::White, true));
    assert!(moved.castling_rights.has(Color::White, false));
}

#[test]
fn test_underpromotion_to_knight() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = pos.legal_moves();

    let knight_promo = moves.iter().find(|m| m.promotion == Some(Piece::Knight));
    assert!(knight_promo.is_some(), "Knight promotion should be available");

    let next = pos.play(*knight_promo.unwrap());
    assert_eq!(next.piece_at(Square(0, 0)), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_promotion_yields_four_moves_in_order() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Option<Piece>> = pos
        .legal_moves()
        .iter()
        .filter(|m| m.from == Square(1, 0))
        .map(|m| m.promotion)
        .collect();
    assert_eq!(
        promotions,
        vec![
            Some(Piece::Knight),
            Some(Piece::Bishop),
            Some(Piece::Rook),
            Some(Piece::Queen)
        ]
    );
}

#[test]
fn test_promotion_capture_yields_four_moves() {
    // Push blocked, capture onto b8 only
    let pos = Position::from_fen("nr6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.from == Square(1, 0))
        .collect();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.to == Square(0, 1) && m.is_promotion()));
}

#[test]
fn test_black_promotion() {
    let pos = Position::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1");
    let moves: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.from == Square(6, 6))
        .collect();
    assert_eq!(moves.len(), 4);

    let queened = pos.play(moves[3]);
    assert_eq!(queened.piece_at(Square(7, 6)), Some((Color::Black, Piece::Queen)));
}

#[test]
fn test_rook_on_open_file_attacks_king() {
    let pos = Position::from_fen("4r3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(pos.is_square_attacked(Square(7, 4), Color::Black));
    assert!(pos.is_king_in_check(Color::White));

    let blocked = Position::from_fen("4r3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(!blocked.is_square_attacked(Square(7, 4), Color::Black));
    assert!(!blocked.is_king_in_check(Color::White));
}

#[test]
fn test_pinned_piece_filtered() {
    // Knight on e2 is pinned by the rook on e8
    let pos = Position::from_fen("4r3/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let pseudo = pos.pseudo_moves_for_color(Color::White);
    assert!(pseudo.iter().any(|m| m.from == Square(6, 4)));

    let legal = pos.legal_moves();
    assert!(!legal.iter().any(|m| m.from == Square(6, 4)));
}

#[test]
fn test_pinned_slider_moves_along_pin() {
    let pos = Position::from_fen("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1");
    let rook_moves: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.from == Square(6, 4))
        .collect();
    assert_eq!(rook_moves.len(), 6);
    assert!(rook_moves.iter().all(|m| m.to.1 == 4));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let pos = Position::from_fen("8/8/8/8/8/3r4/3q4/3K4 w - - 0 1");
    let moves = pos.legal_moves();
    assert!(!has_move(&moves, Square(7, 3), Square(6, 3)));
}

#[test]
fn test_double_check_only_king_moves() {
    // Rook on e8 and bishop on b4 both hit the king on e1
    let pos = Position::from_fen("4r3/8/8/8/1b6/8/8/R3K3 w - - 0 1");
    let moves = pos.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from == Square(7, 4)));
}

#[test]
fn test_fools_mate_is_checkmate() {
    let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(pos.is_king_in_check(Color::White));
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_stalemate_position() {
    let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!pos.is_checkmate());
    assert!(pos.is_stalemate());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_en_passant_flag_does_not_generate_capture() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert!(pos.en_passant_possible);
    let moves = pos.legal_moves();
    assert!(!has_move(&moves, Square(3, 4), Square(2, 3)));
    assert!(has_move(&moves, Square(3, 4), Square(2, 4)));
}

#[test]
fn test_missing_king_is_not_in_check() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/r6R w - - 0 1");
    assert!(!pos.is_king_in_check(Color::White));
    assert!(!pos.is_king_in_check(Color::Black));
    assert!(!pos.legal_moves().is_empty());
}

#[test]
fn test_legal_moves_keep_rank_major_order() {
    let pos = Position::new();
    let moves = pos.legal_moves();
    let sources: Vec<usize> = moves.iter().map(|m| m.from.as_index()).collect();
    let mut sorted = sources.clone();
    sorted.sort_unstable();
    assert_eq!(sources, sorted);
    assert_eq!(moves[0], Move::new(Square(6, 0), Square(5, 0)));
    assert_eq!(moves[1], Move::new(Square(6, 0), Square(4, 0)));
}

#[test]
fn test_parse_and_play_sequence() {
    let mut pos = Position::new();
    for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        let mv = pos.parse_move(notation).unwrap();
        pos = pos.play(mv);
    }
    assert_eq!(
        pos.fen(),
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"
    );
    assert!(pos.parse_move("e1g1").is_ok());
}
