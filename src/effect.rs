//! 利き判定。
//!
//! 「マス S に陣営 P の利きがあるか」を、P の盤上の全駒について
//! 疑似合法手を生成し S が含まれるか見るだけで判定する。
//! 盤面は 81 マス固定で、ここはホットパスでもないので、
//! 差分更新などはせず毎回全走査する。

use crate::movegen::pseudo_legal_moves;
use crate::shogi::*;

/// `target` に `attacker` 側の利きがあるかどうかを返す。
///
/// 利きの定義は疑似合法手と同一。つまり味方の駒がいるマスには利きがない
/// (そこへは移動できないため)。王手判定にはこれで十分。
pub fn is_square_attacked_by(board: &Board, target: Square, attacker: Side) -> bool {
    Square::iter().any(|from| {
        let pc = board[from];

        pc.is_piece()
            && pc.side() == attacker
            && pseudo_legal_moves(board, from).contains(&target)
    })
}
