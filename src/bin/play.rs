//! 2 人対局用のシェル。
//!
//! エンジン (ライブラリ側) は盤面への純粋な問い合わせだけを担当し、
//! 局面の遷移・持ち駒の増減・成りの確認・終局判定の適用は全てこのシェルが行う。
//!
//! 終局は詰みを基準とする。ただし load で玉のない局面を読み込んだ場合に備え、
//! 玉取りでも終局するようにしてある。

use std::ops::ControlFlow;

use anyhow::{bail, ensure, Context as _};
use structopt::StructOpt;

use shogi_rules::*;

#[derive(Debug, StructOpt)]
struct Opt {
    /// 開始局面 (sfen 局面文字列)。省略時は平手初期局面。
    #[structopt(long)]
    sfen: Option<String>,

    /// 対局ログを出力しない。
    #[structopt(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = if opt.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    let mut shell = match &opt.sfen {
        Some(s) => Shell::from_sfen(s)?,
        None => Shell::new(),
    };

    shell.interact()
}

/// 対局の全状態。エンジンは状態を持たないので、ここが唯一の持ち主。
#[derive(Debug)]
struct Shell {
    board: Board,
    hands: Hands,
    side_to_move: Side,
    winner: Option<Side>,
    history: Vec<(Board, Hands, Side)>,
}

impl Shell {
    fn new() -> Self {
        Self {
            board: Board::startpos(),
            hands: Hands::empty(),
            side_to_move: SENTE,
            winner: None,
            history: Vec::new(),
        }
    }

    fn from_sfen(s: &str) -> anyhow::Result<Self> {
        let (side_to_move, board, hands) = sfen_decode_position(s)?;

        Ok(Self {
            board,
            hands,
            side_to_move,
            winner: None,
            history: Vec::new(),
        })
    }

    fn interact(&mut self) -> anyhow::Result<()> {
        use std::io::Write as _;

        mylog::log_game_start(&self.board, &self.hands);
        self.print_position();

        loop {
            println!();
            print!("play > ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }

            let line = line.trim();
            let tokens: Vec<_> = line.split_ascii_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            let cmd = tokens[0];
            let args = &tokens[1..];

            match self.do_command(cmd, args) {
                Ok(ControlFlow::Break(_)) => break,
                Err(e) => println!("error: {}", e),
                _ => {}
            }
        }

        Ok(())
    }

    fn do_command(&mut self, cmd: &str, args: &[&str]) -> anyhow::Result<ControlFlow<()>> {
        match cmd {
            "quit" => return Ok(ControlFlow::Break(())),
            "move" => self.do_command_move(args)?,
            "drop" => self.do_command_drop(args)?,
            "legal" => self.do_command_legal(args)?,
            "drops" => self.do_command_drops(args)?,
            "undo" => self.do_command_undo(args)?,
            "print" => self.print_position(),
            "sfen" => println!(
                "{}",
                sfen_encode_position(self.side_to_move, &self.board, &self.hands)
            ),
            "load" => self.do_command_load(args)?,
            _ => bail!("unknown command: {}", cmd),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// 盤上の駒を動かす。`move r1 c1 r2 c2`
    fn do_command_move(&mut self, args: &[&str]) -> anyhow::Result<()> {
        self.ensure_playing()?;

        ensure!(args.len() == 4, "usage: move <row> <col> <row> <col>");
        let from = parse_square(args[0], args[1])?;
        let to = parse_square(args[2], args[3])?;

        let us = self.side_to_move;
        let pc = self.board[from];
        ensure!(pc.is_piece() && pc.side() == us, "{} に自駒がない", from);
        ensure!(
            legal_moves(&self.board, from).contains(&to),
            "{} へは動かせない",
            to
        );

        self.push_history();

        // 捕獲。成駒は成りを解いて持ち駒に加える。玉だけは持ち駒にならない。
        let captured = self.board[to];
        if captured.is_piece() {
            mylog::log_capture(us, captured);
            if captured.kind() != KING {
                self.hands[us][captured.to_raw_kind()] += 1;
            }
        }

        // 成りの確認。強制成りは課さない (行きどころのない駒を作るのも自由)。
        let mut pc_to = pc;
        if !pc.is_promoted() && can_promote(pc.kind(), us, from.row(), to.row()) {
            if ask_promotion()? {
                pc_to = pc.to_promoted();
            }
        }

        self.board[to] = pc_to;
        self.board[from] = NO_PIECE;
        mylog::log_move(us, from, to, pc.kind(), pc_to != pc);

        self.finish_turn();
        self.print_position();

        Ok(())
    }

    /// 持ち駒を打つ。`drop <PLNSGBR> r c`
    fn do_command_drop(&mut self, args: &[&str]) -> anyhow::Result<()> {
        self.ensure_playing()?;

        ensure!(args.len() == 3, "usage: drop <piece> <row> <col>");
        let pk = parse_hand_piece(args[0])?;
        let to = parse_square(args[1], args[2])?;

        let us = self.side_to_move;
        ensure!(self.hands[us][pk] > 0, "{} は持っていない", pk);
        ensure!(
            legal_drop_squares(&self.board, pk, us).contains(&to),
            "{} へは打てない",
            to
        );

        self.push_history();

        self.hands[us][pk] -= 1;
        self.board[to] = Piece::new(us, pk);
        mylog::log_drop(us, pk, to);

        self.finish_turn();
        self.print_position();

        Ok(())
    }

    /// 指定した駒の合法な移動先を表示する。`legal r c`
    fn do_command_legal(&self, args: &[&str]) -> anyhow::Result<()> {
        ensure!(args.len() == 2, "usage: legal <row> <col>");
        let from = parse_square(args[0], args[1])?;

        let dsts = legal_moves(&self.board, from);
        print_squares(&dsts);

        Ok(())
    }

    /// 指定した持ち駒の合法な打ち場所を表示する。`drops <PLNSGBR>`
    fn do_command_drops(&self, args: &[&str]) -> anyhow::Result<()> {
        ensure!(args.len() == 1, "usage: drops <piece>");
        let pk = parse_hand_piece(args[0])?;

        let dsts = legal_drop_squares(&self.board, pk, self.side_to_move);
        print_squares(&dsts);

        Ok(())
    }

    fn do_command_undo(&mut self, _args: &[&str]) -> anyhow::Result<()> {
        let (board, hands, side) = self.history.pop().context("history is empty")?;

        self.board = board;
        self.hands = hands;
        self.side_to_move = side;
        self.winner = None;

        self.print_position();

        Ok(())
    }

    fn do_command_load(&mut self, args: &[&str]) -> anyhow::Result<()> {
        let s = args.join(" ");
        let (side_to_move, board, hands) = sfen_decode_position(s)?;

        self.board = board;
        self.hands = hands;
        self.side_to_move = side_to_move;
        self.winner = None;
        self.history.clear();

        self.print_position();

        Ok(())
    }

    fn ensure_playing(&self) -> anyhow::Result<()> {
        if let Some(winner) = self.winner {
            bail!("対局は終了している ({} の勝ち)", winner);
        }

        Ok(())
    }

    fn push_history(&mut self) {
        self.history
            .push((self.board.clone(), self.hands, self.side_to_move));
    }

    /// 着手後の終局・王手判定と手番の切り替え。
    fn finish_turn(&mut self) {
        let us = self.side_to_move;
        let them = us.inv();

        // load された変則局面では玉が取られうる。その場合は玉取りで即終局。
        if is_king_captured(&self.board, them) {
            self.winner = Some(us);
            mylog::log_game_end(us);
            println!("終局: {} の勝ち (玉取り)", us);
            return;
        }

        if is_checkmated(&self.board, them, &self.hands[them]) {
            self.winner = Some(us);
            mylog::log_checkmate(them);
            mylog::log_game_end(us);
            println!("詰み。終局: {} の勝ち", us);
            return;
        }

        if is_in_check(&self.board, them) {
            mylog::log_check(them);
            println!("{} に王手", them);
        }

        self.side_to_move = them;
    }

    fn print_position(&self) {
        println!("後手持ち駒: {}", self.hands[GOTE]);
        print!("{}", self.board);
        println!("先手持ち駒: {}", self.hands[SENTE]);
        println!("手番: {}", self.side_to_move);
    }
}

/// 行・列の文字列からマスを作る。
fn parse_square(row_s: &str, col_s: &str) -> anyhow::Result<Square> {
    let row: i32 = row_s
        .parse()
        .with_context(|| format!("invalid row: {}", row_s))?;
    let col: i32 = col_s
        .parse()
        .with_context(|| format!("invalid col: {}", col_s))?;

    ensure!((0..=8).contains(&row), "row out of range: {}", row);
    ensure!((0..=8).contains(&col), "col out of range: {}", col);

    Ok(Square::from_row_col(
        Row::from_inner(row),
        Col::from_inner(col),
    ))
}

/// 持ち駒の駒種 1 文字をパースする。大文字小文字は区別しない。
fn parse_hand_piece(s: &str) -> anyhow::Result<PieceKind> {
    let pk = match s.to_ascii_uppercase().as_str() {
        "P" => PAWN,
        "L" => LANCE,
        "N" => KNIGHT,
        "S" => SILVER,
        "G" => GOLD,
        "B" => BISHOP,
        "R" => ROOK,
        _ => bail!("invalid piece: {}", s),
    };

    Ok(pk)
}

/// 成りの確認。y/n を標準入力から読む。
fn ask_promotion() -> anyhow::Result<bool> {
    use std::io::Write as _;

    print!("成りますか? [y/N]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(matches!(line.trim(), "y" | "Y"))
}

fn print_squares(sqs: &SquareArray) {
    if sqs.is_empty() {
        println!("(なし)");
        return;
    }

    let strs: Vec<_> = sqs.iter().map(|sq| sq.to_string()).collect();
    println!("{}", strs.join(" "));
}
