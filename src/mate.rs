//! 王手・詰み・玉の有無の判定。
//!
//! エンジンは局面の分類だけを行い、対局の進行 (手番切り替えや終局宣言) は
//! 外部の進行役に任せる。
//!
//! 詰み判定は総当たり: 盤上の自駒全てについて合法手が残っていないか、
//! 持ち駒全てについて合法な打ち場所が残っていないかを調べ、
//! どちらも空のときに限り詰みとする。

use crate::effect::is_square_attacked_by;
use crate::legal::{king_square, legal_drop_squares, legal_moves};
use crate::shogi::*;

/// `side` の玉に王手がかかっているかどうかを返す。
///
/// 玉が盤上にいない場合は false (このモデルでは「王手」は玉があって初めて
/// 成立する。玉取りルールで玉が既に取られた局面もこの扱いで総崩れしない)。
pub fn is_in_check(board: &Board, side: Side) -> bool {
    match king_square(board, side) {
        Some(sq) => is_square_attacked_by(board, sq, side.inv()),
        None => false,
    }
}

/// `side` が詰まされているかどうかを返す。`hand` は `side` の持ち駒。
///
/// 王手がかかっていなければ常に false (ステイルメイトは詰みではない)。
/// 王手がかかっていて、どの駒のどの合法手でも、どの持ち駒のどの合法な
/// 打ち込みでも王手を解除できないとき true。
pub fn is_checkmated(board: &Board, side: Side, hand: &Hand) -> bool {
    if !is_in_check(board, side) {
        return false;
    }

    // 盤上の駒を動かして逃れられるか。
    for from in Square::iter() {
        let pc = board[from];
        if !pc.is_piece() || pc.side() != side {
            continue;
        }

        if !legal_moves(board, from).is_empty() {
            return false;
        }
    }

    // 持ち駒を打って逃れられるか。
    for pk in PieceKind::iter_hand() {
        if hand[pk] == 0 {
            continue;
        }

        if !legal_drop_squares(board, pk, side).is_empty() {
            return false;
        }
    }

    true
}

/// `side` の玉が盤上から消えている (取られた) かどうかを返す。
///
/// 詰みではなく玉取りを終局条件とする流儀の進行役のための問い合わせ。
pub fn is_king_captured(board: &Board, side: Side) -> bool {
    king_square(board, side).is_none()
}
