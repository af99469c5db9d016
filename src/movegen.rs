//! 疑似合法手の移動先生成。
//!
//! ここでいう疑似合法手とは、駒の動きと自駒の有無だけを見た移動先のこと。
//! 自玉に王手がかかったままになる手 (自殺手) も含まれる。
//! 自殺手の除去は legal モジュールが行う。
//!
//! 駒の動きは駒種ごとの定数テーブルで表す。オフセットは全て
//! (前進量, 列差分) の形で先手視点に固定し、適用時に
//! `Side::forward_delta()` を掛けて陣営の向きへ変換する。

use arrayvec::ArrayVec;

use crate::shogi::*;

/// 移動先マスの配列。
///
/// 盤面は 81 マスしかないので、1 回の生成で返る移動先は高々 81 個。
/// 駒打ち候補の列挙 (drops) でも同じ型を使うため上限は 81 とする。
pub type SquareArray = ArrayVec<Square, 81>;

/// 駒種 1 つ分の動きの定義。
///
/// * `steps`: 1 マスだけ動けるオフセットたち。
/// * `slides`: 他の駒に当たるまで何マスでも動ける方向たち。
struct PieceMovement {
    steps: &'static [(i32, i32)],
    slides: &'static [(i32, i32)],
}

// 各オフセット列。(前進量, 列差分)。前進量 1 が「前へ 1 マス」。

const STEPS_PAWN: [(i32, i32); 1] = [(1, 0)];

const STEPS_KNIGHT: [(i32, i32); 2] = [(2, -1), (2, 1)];

/// 銀: 前 3 方向と斜め後ろ 2 方向。横と真後ろには動けない。
const STEPS_SILVER: [(i32, i32); 5] = [(1, -1), (1, 0), (1, 1), (-1, -1), (-1, 1)];

/// 金: 前 3 方向、横 2 方向、真後ろ。斜め後ろ 2 方向は除く。
/// 成歩、成香、成桂、成銀も同じ動き。
const STEPS_GOLD: [(i32, i32); 6] = [(1, -1), (1, 0), (1, 1), (0, -1), (0, 1), (-1, 0)];

const STEPS_KING: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// 縦横 1 マス。馬の追加の動き。
const STEPS_ORTHO: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// 斜め 1 マス。龍の追加の動き。
const STEPS_DIAG: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

const SLIDES_LANCE: [(i32, i32); 1] = [(1, 0)];

const SLIDES_BISHOP: [(i32, i32); 4] = STEPS_DIAG;

const SLIDES_ROOK: [(i32, i32); 4] = STEPS_ORTHO;

/// 駒種 → 動きの定義。`PieceKind` の内部値でインデックスアクセスする。
/// 成駒もここで引けるので、呼び出し側での分岐は不要。
#[rustfmt::skip]
const MOVEMENTS: [PieceMovement; 15] = [
    PieceMovement { steps: &[], slides: &[] },                          // NO_PIECE_KIND
    PieceMovement { steps: &STEPS_PAWN, slides: &[] },                  // PAWN
    PieceMovement { steps: &[], slides: &SLIDES_LANCE },                // LANCE
    PieceMovement { steps: &STEPS_KNIGHT, slides: &[] },                // KNIGHT
    PieceMovement { steps: &STEPS_SILVER, slides: &[] },                // SILVER
    PieceMovement { steps: &[], slides: &SLIDES_BISHOP },               // BISHOP
    PieceMovement { steps: &[], slides: &SLIDES_ROOK },                 // ROOK
    PieceMovement { steps: &STEPS_GOLD, slides: &[] },                  // GOLD
    PieceMovement { steps: &STEPS_KING, slides: &[] },                  // KING
    PieceMovement { steps: &STEPS_GOLD, slides: &[] },                  // PRO_PAWN
    PieceMovement { steps: &STEPS_GOLD, slides: &[] },                  // PRO_LANCE
    PieceMovement { steps: &STEPS_GOLD, slides: &[] },                  // PRO_KNIGHT
    PieceMovement { steps: &STEPS_GOLD, slides: &[] },                  // PRO_SILVER
    PieceMovement { steps: &STEPS_ORTHO, slides: &SLIDES_BISHOP },      // HORSE
    PieceMovement { steps: &STEPS_DIAG, slides: &SLIDES_ROOK },         // DRAGON
];

/// `from` にある駒の疑似合法な移動先を全て返す。
///
/// `from` が空白マスなら空を返す。盤面は一切変更しない。
pub fn pseudo_legal_moves(board: &Board, from: Square) -> SquareArray {
    let mut dsts = SquareArray::new();

    let pc = board[from];
    if !pc.is_piece() {
        return dsts;
    }

    let us = pc.side();
    let fwd = us.forward_delta();
    let movement = &MOVEMENTS[usize::from(pc.kind())];

    // 1 マスだけの動き。移動先が自駒でなければよい (敵駒なら捕獲)。
    // 桂の (2, ±1) も単なるオフセットとして扱える。途中マスは参照しないので
    // 跳び越しが自然に表現される。
    for &(df, dc) in movement.steps {
        if let Some(to) = from.offset(df * fwd, dc) {
            let pc_to = board[to];
            if pc_to == NO_PIECE || pc_to.side() != us {
                dsts.push(to);
            }
        }
    }

    // 滑り駒の動き。空白マスは移動先として採用しつつ先へ進み、
    // 敵駒のマスは採用して打ち切り、自駒のマスは採用せず打ち切る。
    // 盤面外へ出た時点でも打ち切る。
    for &(df, dc) in movement.slides {
        let dr = df * fwd;
        let mut cur = from.offset(dr, dc);

        while let Some(to) = cur {
            let pc_to = board[to];
            if pc_to == NO_PIECE {
                dsts.push(to);
            } else {
                if pc_to.side() != us {
                    dsts.push(to);
                }
                break;
            }
            cur = to.offset(dr, dc);
        }
    }

    dsts
}
