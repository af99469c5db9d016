//! 自殺手の除去。
//!
//! 疑似合法手 (movegen) と駒打ち候補 (drops) のそれぞれについて、
//! 実際に盤面のコピー上で着手してみて、自玉に敵の利きが残るものを捨てる。
//!
//! ピン (動かすと王手がかかる駒) を明示的には追跡しない。
//! 仮想局面で王手判定をやり直すだけで自然に正しい結果になる。
//! 単純だが監査しやすく、移動と駒打ちで同じ検査を使い回せる。

use crate::drops::drop_squares;
use crate::effect::is_square_attacked_by;
use crate::movegen::{pseudo_legal_moves, SquareArray};
use crate::shogi::*;

/// `side` の玉のマスを返す。玉がいなければ `None`。
///
/// 盤面を走査して最初に見つかった玉を返す。
pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    let king = Piece::new(side, KING);

    Square::iter().find(|&sq| board[sq] == king)
}

/// `board` 上で `side` の玉に敵の利きがあるかどうかを返す。
///
/// 玉がいない場合は false。この場合自殺手という概念自体が成立しないので、
/// 検査は何も弾かない。
fn king_is_attacked(board: &Board, side: Side) -> bool {
    match king_square(board, side) {
        Some(sq) => is_square_attacked_by(board, sq, side.inv()),
        None => false,
    }
}

/// `from` にある駒の合法な移動先を全て返す。
///
/// 疑似合法手のうち、指した後に自玉へ敵の利きが残るものを除いたもの。
/// `from` が空白マスなら空を返す。
pub fn legal_moves(board: &Board, from: Square) -> SquareArray {
    let pc = board[from];
    if !pc.is_piece() {
        return SquareArray::new();
    }

    let us = pc.side();
    let mut dsts = SquareArray::new();

    for to in pseudo_legal_moves(board, from) {
        // 移動先の駒は上書きで消える (捕獲)。
        let mut sim = board.clone();
        sim[to] = pc;
        sim[from] = NO_PIECE;

        if !king_is_attacked(&sim, us) {
            dsts.push(to);
        }
    }

    dsts
}

/// `side` が駒種 `pk` を合法に打てるマスを全て返す。
///
/// 配置制約 (drops) を満たすマスのうち、打った後に自玉へ敵の利きが
/// 残るものを除いたもの。
pub fn legal_drop_squares(board: &Board, pk: PieceKind, side: Side) -> SquareArray {
    debug_assert!(pk.is_hand());

    let mut dsts = SquareArray::new();

    for to in drop_squares(board, pk, side) {
        let mut sim = board.clone();
        sim[to] = Piece::new(side, pk);

        if !king_is_attacked(&sim, side) {
            dsts.push(to);
        }
    }

    dsts
}
