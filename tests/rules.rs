//! ルールエンジン全体を通した性質のテスト。
//!
//! 個々の駒の動きの詳細は各モジュールのユニットテストで見ているので、
//! ここでは複数モジュールにまたがる性質を sfen 局面で検査する。

#[allow(unused_imports)]
use pretty_assertions::{assert_eq, assert_ne};

use itertools::iproduct;

use shogi_rules::*;

fn sq(row: i32, col: i32) -> Square {
    Square::from_row_col(Row::from_inner(row), Col::from_inner(col))
}

fn decode(s: &str) -> (Side, Board, Hands) {
    sfen_decode_position(s).unwrap()
}

/// 合法手は常に疑似合法手の部分集合で、差分は全て自殺手になっている。
#[test]
fn test_legal_moves_subset_of_pseudo_legal() {
    const SFENS: [&str; 3] = [
        "startpos",
        // ピンされた銀のある局面。
        "sfen 4r4/9/9/9/9/4S4/9/9/4K4 b - 1",
        // 中盤風の局面。飛角と成駒が利き合う。
        "sfen ln1gk2nl/1rs3gs1/p1pppp1pp/6R2/1p5b1/2P6/PP1PPPP1P/1SG3+p2/LN2KGSNL b Pp 1",
    ];

    for sfen in SFENS {
        let (_, board, _) = decode(sfen);

        for (row, col) in iproduct!(0..9, 0..9) {
            let from = sq(row, col);
            let pc = board[from];
            if !pc.is_piece() {
                assert!(pseudo_legal_moves(&board, from).is_empty());
                assert!(legal_moves(&board, from).is_empty());
                continue;
            }

            let us = pc.side();
            let pseudo = pseudo_legal_moves(&board, from);
            let legal = legal_moves(&board, from);

            for to in &legal {
                assert!(pseudo.contains(to), "{:?} -> {:?} は疑似合法手にない", from, to);
            }

            // 差分の手を実際に指してみると、必ず自玉に利きが残っている。
            for &to in pseudo.iter().filter(|&&to| !legal.contains(&to)) {
                let mut sim = board.clone();
                sim[to] = pc;
                sim[from] = NO_PIECE;

                assert!(
                    is_in_check(&sim, us),
                    "{:?} -> {:?} が捨てられたのに王手が残らない",
                    from,
                    to
                );
            }
        }
    }
}

/// 平手初期局面の駒の内訳。
#[test]
fn test_startpos_inventory() {
    let board = Board::startpos();

    assert_eq!(king_square(&board, SENTE), Some(sq(8, 4)));
    assert_eq!(king_square(&board, GOTE), Some(sq(0, 4)));

    let count = |pc: Piece| Square::iter().filter(|&sq| board[sq] == pc).count();

    assert_eq!(count(S_PAWN), 9);
    assert_eq!(count(G_PAWN), 9);
    assert_eq!(count(S_KING), 1);
    assert_eq!(count(G_KING), 1);

    for (row, col) in iproduct!(3..6, 0..9) {
        assert_eq!(board[sq(row, col)], NO_PIECE);
    }

    // 初期局面ではどちらも王手されていない。
    assert!(!is_in_check(&board, SENTE));
    assert!(!is_in_check(&board, GOTE));
}

/// 二歩: 生歩のいる列には打てず、と金の列には打てる。
#[test]
fn test_pawn_drop_two_pawns_rule() {
    // 列 4 に先手の生歩、列 6 に先手のと金。
    let (_, board, _) = decode("sfen 9/9/9/9/4P1+P2/9/9/9/4K4 b - 1");

    let dsts = legal_drop_squares(&board, PAWN, SENTE);

    assert!(dsts.iter().all(|&to| to.col() != Col::from_inner(4)));
    assert!(dsts.iter().any(|&to| to.col() == Col::from_inner(6)));
}

/// 行きどころのない駒の打ち込み禁止。
#[test]
fn test_drop_rank_restrictions() {
    let (_, board, _) = decode("sfen 9/9/9/9/9/9/9/9/4K4 b - 1");

    for col in 0..9 {
        // 歩・香は row 0 に打てない。
        assert!(!legal_drop_squares(&board, PAWN, SENTE).contains(&sq(0, col)));
        assert!(!legal_drop_squares(&board, LANCE, SENTE).contains(&sq(0, col)));
        // 桂は row 0, 1 に打てない。
        assert!(!legal_drop_squares(&board, KNIGHT, SENTE).contains(&sq(0, col)));
        assert!(!legal_drop_squares(&board, KNIGHT, SENTE).contains(&sq(1, col)));
    }

    // 金銀飛角に行の制限はない。
    for pk in [SILVER, GOLD, BISHOP, ROOK] {
        assert!(legal_drop_squares(&board, pk, SENTE).contains(&sq(0, 0)));
    }
}

/// 飛車 1 枚の王手と、それに対する合駒・詰みの判定が一貫している。
#[test]
fn test_rook_check_and_interpose() {
    // 先手玉 (8,4)、後手飛車 (0,4)。周囲は開いている。
    let (_, board, hands) = decode("sfen 4r4/9/9/9/9/9/9/9/4K4 b G 1");

    assert!(is_in_check(&board, SENTE));
    assert!(!is_in_check(&board, GOTE));

    // 玉は横に逃げられるので、持ち駒がなくても詰みではない。
    assert!(!is_checkmated(&board, SENTE, &Hand::empty()));

    // 金の合駒は列 4 にしか打てない。
    let dsts = legal_drop_squares(&board, GOLD, SENTE);
    assert!(!dsts.is_empty());
    assert!(dsts.iter().all(|&to| to.col() == Col::from_inner(4)));
    assert_eq!(hands[SENTE][GOLD], 1);
}

/// 金 3 枚による詰みの局面 (合駒も逃げ場もない)。
#[test]
fn test_gold_sandwich_checkmate() {
    let (_, board, _) = decode("sfen 4K4/3ggg3/9/9/9/9/9/9/9 b - 1");

    assert!(is_in_check(&board, SENTE));
    assert!(is_checkmated(&board, SENTE, &Hand::empty()));

    // 持ち駒があっても王手している金を消せないので詰みのまま。
    // (どこに打っても (1,4) の金の利きは (0,4) に残る)
    let mut hand = Hand::empty();
    hand[GOLD] = 1;
    assert!(is_checkmated(&board, SENTE, &hand));
}

/// 合駒で詰みを免れる局面。
#[test]
fn test_pawn_in_hand_averts_checkmate() {
    // 先手玉 (8,4) の周囲を自分の香が塞ぎ、(0,4) の飛車が王手。
    let (_, board, _) = decode("sfen 4r4/9/9/9/9/9/9/3L1L3/3LKL3 b P 1");

    assert!(is_in_check(&board, SENTE));
    assert!(is_checkmated(&board, SENTE, &Hand::empty()));

    let mut hand = Hand::empty();
    hand[PAWN] = 1;
    assert!(!is_checkmated(&board, SENTE, &hand));

    // 実際の合駒の場所は列 4 の row 1-7。
    let dsts = legal_drop_squares(&board, PAWN, SENTE);
    assert_eq!(dsts.len(), 7);
    assert!(dsts.iter().all(|&to| to.col() == Col::from_inner(4)));
}

/// ピン: 玉と飛車の間の銀は列を塞ぐ動きしかできない。
#[test]
fn test_pinned_piece_restricted_to_file() {
    let (_, board, _) = decode("sfen 4r4/9/9/9/9/4S4/9/9/4K4 b - 1");

    let legal = legal_moves(&board, sq(5, 4));

    // 銀は前進 (4,4) のみ。斜めに動くと王手がかかる。
    assert_eq!(legal.as_slice(), [sq(4, 4)]);
}

/// 玉のいない陣営の駒には自殺手検査がかからない。
#[test]
fn test_kingless_side_is_unfiltered() {
    let (_, board, _) = decode("sfen 4r4/9/9/9/9/4S4/9/9/9 b - 1");

    assert_eq!(
        legal_moves(&board, sq(5, 4)),
        pseudo_legal_moves(&board, sq(5, 4))
    );
    assert!(!is_in_check(&board, SENTE));
    assert!(!is_checkmated(&board, SENTE, &Hand::empty()));
    assert!(is_king_captured(&board, SENTE));
}
