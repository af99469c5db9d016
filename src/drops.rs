//! 持ち駒を打てるマスの判定。
//!
//! ここでは配置制約 (空きマス、二歩、行きどころのない駒) のみを扱う。
//! 打った結果自玉に王手がかかったままになるかどうかは legal モジュールが
//! 改めて検査する。
//!
//! 打ち歩詰めの禁止はこのエンジンでは実装していない。必要なら歩の場合のみ
//! `can_drop` の上に、打った後の局面の詰み判定を重ねればよい。

use crate::movegen::SquareArray;
use crate::shogi::*;

/// `side` が駒種 `pk` を `to` に打てるかどうかを返す (配置制約のみ)。
///
/// `pk` は持ち駒となりうる駒種でなければならない。
pub fn can_drop(board: &Board, pk: PieceKind, side: Side, to: Square) -> bool {
    debug_assert!(pk.is_hand());

    // 空きマスにしか打てない。
    if board[to] != NO_PIECE {
        return false;
    }

    // 二歩: 同じ列に自分の生歩がいると歩は打てない。と金は数えない。
    if pk == PAWN && col_has_raw_pawn(board, side, to.col()) {
        return false;
    }

    // 行きどころのない駒の禁止。打った駒が最低 1 回は前進できる行でないといけない。
    // 歩・香は前進余地 1 行、桂は跳び先のために 2 行必要。
    let room_needed = match pk {
        PAWN | LANCE => 1,
        KNIGHT => 2,
        _ => 0,
    };

    to.row().forward_room(side) >= room_needed
}

/// `side` が駒種 `pk` を打てるマスを全て返す (配置制約のみ)。
pub fn drop_squares(board: &Board, pk: PieceKind, side: Side) -> SquareArray {
    Square::iter()
        .filter(|&to| can_drop(board, pk, side, to))
        .collect()
}

/// 指定した列に `side` の生歩がいるかどうかを返す。
fn col_has_raw_pawn(board: &Board, side: Side, col: Col) -> bool {
    Row::iter().any(|row| board[Square::from_row_col(row, col)] == Piece::new(side, PAWN))
}
