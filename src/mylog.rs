//! 対局ログ出力。
//!
//! シェル (進行役) が節目ごとに呼ぶ薄いヘルパたち。
//! 出力先やフォーマットは log クレートの設定に従う。

use log::info;

use crate::shogi::*;

/// 対局開始ログを出力する。
pub fn log_game_start(board: &Board, hands: &Hands) {
    info!("# ------------------------------ 対局開始 ------------------------------");
    log_position(SENTE, board, hands);
}

/// 与えられた局面をログ出力する。
pub fn log_position(side_to_move: Side, board: &Board, hands: &Hands) {
    info!("後手持ち駒: {}", hands[GOTE]);
    info!("");
    for line in board.to_string().lines() {
        info!("{}", line);
    }
    info!("");
    info!("先手持ち駒: {}", hands[SENTE]);
    info!("手番: {}", side_to_move);
    info!("");
}

/// 盤上の駒を動かす手のログを出力する。
pub fn log_move(side: Side, from: Square, to: Square, pk: PieceKind, promoted: bool) {
    if promoted {
        info!("{}: {} → {} {}成", side, from, to, pk);
    } else {
        info!("{}: {} → {} {}", side, from, to, pk);
    }
}

/// 駒取りのログを出力する。
pub fn log_capture(side: Side, captured: Piece) {
    info!("{} が {} を取った", side, captured.kind());
}

/// 駒打ちのログを出力する。
pub fn log_drop(side: Side, pk: PieceKind, to: Square) {
    info!("{}: {} に {} 打", side, to, pk);
}

/// 王手のログを出力する。
pub fn log_check(side: Side) {
    info!("{} に王手", side);
}

/// 詰みのログを出力する。
pub fn log_checkmate(side: Side) {
    info!("{} は詰み", side);
}

/// 終局ログを出力する。
pub fn log_game_end(winner: Side) {
    info!("# ------------------------------ 終局: {} の勝ち ------------------------------", winner);
}
