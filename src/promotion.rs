//! 成りの可否判定。
//!
//! 成り処理そのもの (実際に駒を成らせるか尋ねる、盤面を書き換える) は
//! 外部の進行役の仕事で、ここは判定テーブルだけを提供する。

use crate::shogi::*;

/// 指定した陣営の敵陣 3 行を返す。先手は row 0-2、後手は row 6-8。
pub fn promotion_zone(side: Side) -> [Row; 3] {
    if side == SENTE {
        [Row::from_inner(0), Row::from_inner(1), Row::from_inner(2)]
    } else {
        [Row::from_inner(6), Row::from_inner(7), Row::from_inner(8)]
    }
}

/// `from_row` から `to_row` への移動で駒種 `pk` が成れるかどうかを返す。
///
/// 金、玉、成駒は常に false。それ以外は移動元か移動先が敵陣にあれば成れる。
/// 敵陣から出る移動でも成れることに注意。
pub fn can_promote(pk: PieceKind, side: Side, from_row: Row, to_row: Row) -> bool {
    if !pk.is_promotable() {
        return false;
    }

    from_row.is_promotion_zone(side) || to_row.is_promotion_zone(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    fn row(inner: i32) -> Row {
        Row::from_inner(inner)
    }

    #[test]
    fn test_promotion_zone() {
        assert_eq!(promotion_zone(SENTE), [row(0), row(1), row(2)]);
        assert_eq!(promotion_zone(GOTE), [row(6), row(7), row(8)]);
    }

    #[test]
    fn test_can_promote_entering_zone() {
        assert!(can_promote(PAWN, SENTE, row(3), row(2)));
        assert!(can_promote(SILVER, GOTE, row(5), row(6)));
    }

    #[test]
    fn test_can_promote_inside_zone() {
        assert!(can_promote(ROOK, SENTE, row(1), row(1)));
        assert!(can_promote(KNIGHT, GOTE, row(6), row(8)));
    }

    #[test]
    fn test_can_promote_leaving_zone() {
        // 敵陣から出る移動でも成れる。
        assert!(can_promote(BISHOP, SENTE, row(2), row(5)));
        assert!(can_promote(LANCE, GOTE, row(6), row(5)));
    }

    #[test]
    fn test_cannot_promote_outside_zone() {
        assert!(!can_promote(PAWN, SENTE, row(4), row(3)));
        assert!(!can_promote(ROOK, GOTE, row(3), row(5)));
    }

    #[test]
    fn test_gold_and_king_never_promote() {
        assert!(!can_promote(GOLD, SENTE, row(2), row(1)));
        assert!(!can_promote(KING, SENTE, row(2), row(1)));
    }

    #[test]
    fn test_promoted_kinds_never_promote_again() {
        assert!(!can_promote(PRO_PAWN, SENTE, row(2), row(1)));
        assert!(!can_promote(HORSE, GOTE, row(7), row(8)));
        assert!(!can_promote(DRAGON, SENTE, row(0), row(0)));
    }

    #[test]
    fn test_zone_is_side_relative() {
        // 先手にとっての row 6-8 は自陣なので成れない。
        assert!(!can_promote(PAWN, SENTE, row(7), row(6)));
        // 後手にとっての row 0-2 も同様。
        assert!(!can_promote(PAWN, GOTE, row(1), row(2)));
    }
}
