//! sfen 風の局面文字列のエンコード/デコード。
//!
//! テストで任意局面を簡潔に書くため、およびシェルの局面入出力のためのもの。
//! 指し手の表記は扱わない (このエンジンに指し手型はなく、移動先は単なるマス)。
//!
//! 盤面文字列は row 0 から row 8 へ '/' 区切り、各行は col 0 から col 8 の順。
//! 大文字が先手、小文字が後手、成駒は '+' を前置する。
//! 本家 sfen と異なり座標は配列添字ベース (shogi モジュール参照) だが、
//! 読み書きの要領は同じ。
//!
//! 構文はチェックするが、局面の合法性チェックは一切行わない。

use anyhow::{bail, ensure, Context as _};

use crate::shogi::*;

/// sfen 局面文字列をデコードし、(手番, 盤面, 両陣営の持ち駒) を返す。
///
/// 文字列の先頭と末尾の空白は無視される。
/// また、最初のトークンが "position" の場合、それは単に無視される。
pub fn sfen_decode_position(s: impl AsRef<str>) -> anyhow::Result<(Side, Board, Hands)> {
    let s = s.as_ref().trim();

    let mut it = s.split_ascii_whitespace().peekable();

    // 最初のトークンが "position" なら単に無視する。
    if it.peek().context("position string is empty")? == &"position" {
        it.next();
    }

    let magic = it.next().context("position string is empty")?;

    let res = if magic == "startpos" {
        (SENTE, Board::startpos(), Hands::empty())
    } else {
        ensure!(magic == "sfen", "invalid position string magic: {}", magic);

        let board = sfen_decode_board(it.next().context("board string not found")?)?;
        let side_to_move = sfen_decode_side(it.next().context("side string not found")?)?;
        let hands = sfen_decode_hands(it.next().context("hands string not found")?)?;
        let _ = sfen_decode_ply(it.next().context("ply string not found")?)?;

        (side_to_move, board, hands)
    };

    if let Some(token) = it.next() {
        bail!("position string has redundant token: {}", token);
    }

    Ok(res)
}

/// (手番, 盤面, 両陣営の持ち駒) を sfen 局面文字列にエンコードする。
///
/// 局面が平手初期局面 (先手番、持ち駒なし) の場合、"startpos" を返す。
pub fn sfen_encode_position(side_to_move: Side, board: &Board, hands: &Hands) -> String {
    if side_to_move == SENTE && *board == Board::startpos() && *hands == Hands::empty() {
        return "startpos".to_owned();
    }

    let mut s = String::new();

    s.push_str("sfen ");

    sfen_encode_board(board, &mut s);
    s.push(' ');

    s.push(if side_to_move == SENTE { 'b' } else { 'w' });
    s.push(' ');

    sfen_encode_hands(hands, &mut s);

    // 手数は 1 固定とする。
    s.push_str(" 1");

    s
}

/// 生駒の駒種 1 文字 (大文字) を駒種に変換する。
fn piece_kind_from_ascii(c: char) -> Option<PieceKind> {
    let pk = match c {
        'P' => PAWN,
        'L' => LANCE,
        'N' => KNIGHT,
        'S' => SILVER,
        'B' => BISHOP,
        'R' => ROOK,
        'G' => GOLD,
        'K' => KING,
        _ => return None,
    };

    Some(pk)
}

/// 生駒の駒種を 1 文字 (大文字) に変換する。`pk` は生駒でなければならない。
fn piece_kind_to_ascii(pk: PieceKind) -> char {
    debug_assert!(pk.is_piece() && !pk.is_promoted());

    match pk {
        PAWN => 'P',
        LANCE => 'L',
        KNIGHT => 'N',
        SILVER => 'S',
        BISHOP => 'B',
        ROOK => 'R',
        GOLD => 'G',
        _ => 'K',
    }
}

fn sfen_decode_board(s: &str) -> anyhow::Result<Board> {
    let mut board = Board::empty();

    let mut it = s.split('/');

    for row in Row::iter() {
        let row_s = it.next().context("board string must have exactly 9 rows")?;
        sfen_decode_board_row(row_s, row, &mut board)?;
    }

    if let Some(s) = it.next() {
        bail!("board string has redundant row: {}", s);
    }

    Ok(board)
}

fn sfen_decode_board_row(s: &str, row: Row, board: &mut Board) -> anyhow::Result<()> {
    let mut col = 0_i32;
    let mut promo = false;

    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            ensure!(!promo, "'+' must be followed by a piece letter");
            ensure!(1 <= d && d <= 9, "invalid empty run: {}", c);
            col += d as i32;
            ensure!(col <= 9, "board row {} is too long", row);
            continue;
        }

        if c == '+' {
            ensure!(!promo, "duplicated '+'");
            promo = true;
            continue;
        }

        let pk = piece_kind_from_ascii(c.to_ascii_uppercase())
            .with_context(|| format!("invalid piece char: {}", c))?;
        let side = if c.is_ascii_uppercase() { SENTE } else { GOTE };

        let pk = if promo {
            ensure!(pk.is_promotable(), "piece cannot promote: {}", c);
            pk.to_promoted()
        } else {
            pk
        };
        promo = false;

        ensure!(col <= 8, "board row {} is too long", row);
        board[Square::from_row_col(row, Col::from_inner(col))] = Piece::new(side, pk);
        col += 1;
    }

    ensure!(!promo, "'+' must be followed by a piece letter");
    ensure!(col == 9, "board row {} must have exactly 9 cols", row);

    Ok(())
}

fn sfen_decode_side(s: &str) -> anyhow::Result<Side> {
    match s {
        "b" => Ok(SENTE),
        "w" => Ok(GOTE),
        _ => bail!("invalid side string: {}", s),
    }
}

fn sfen_decode_hands(s: &str) -> anyhow::Result<Hands> {
    let mut hands = Hands::empty();

    if s == "-" {
        return Ok(hands);
    }

    let mut count = 0_u32;

    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            count = 10 * count + d;
            ensure!(count <= 18, "hand count is too large");
            continue;
        }

        let pk = piece_kind_from_ascii(c.to_ascii_uppercase())
            .with_context(|| format!("invalid piece char: {}", c))?;
        ensure!(pk.is_hand(), "piece cannot be a hand piece: {}", c);

        let side = if c.is_ascii_uppercase() { SENTE } else { GOTE };
        let n = if count == 0 { 1 } else { count };

        hands[side][pk] += n;
        count = 0;
    }

    ensure!(count == 0, "hand string ends with a dangling count");

    Ok(hands)
}

fn sfen_decode_ply(s: &str) -> anyhow::Result<u32> {
    let ply: u32 = s
        .parse()
        .with_context(|| format!("invalid ply string: {}", s))?;
    ensure!(ply >= 1, "ply must be positive");

    Ok(ply)
}

fn sfen_encode_board(board: &Board, s: &mut String) {
    for row in Row::iter() {
        if row != Row::from_inner(0) {
            s.push('/');
        }

        let mut blanks = 0;
        for col in Col::iter() {
            let pc = board[Square::from_row_col(row, col)];

            if pc == NO_PIECE {
                blanks += 1;
                continue;
            }

            if blanks > 0 {
                s.push((b'0' + blanks) as char);
                blanks = 0;
            }

            if pc.is_promoted() {
                s.push('+');
            }

            let c = piece_kind_to_ascii(if pc.kind() == KING {
                KING
            } else {
                pc.to_raw_kind()
            });
            s.push(if pc.side() == SENTE {
                c
            } else {
                c.to_ascii_lowercase()
            });
        }

        if blanks > 0 {
            s.push((b'0' + blanks) as char);
        }
    }
}

fn sfen_encode_hands(hands: &Hands, s: &mut String) {
    const PKS: [PieceKind; 7] = [ROOK, BISHOP, GOLD, SILVER, KNIGHT, LANCE, PAWN];

    if hands[SENTE] == Hand::empty() && hands[GOTE] == Hand::empty() {
        s.push('-');
        return;
    }

    for side in Side::iter() {
        for pk in PKS {
            let n = hands[side][pk];
            if n == 0 {
                continue;
            }

            if n >= 2 {
                s.push_str(&n.to_string());
            }

            let c = piece_kind_to_ascii(pk);
            s.push(if side == SENTE {
                c
            } else {
                c.to_ascii_lowercase()
            });
        }
    }
}
