//! 端末向けの表示と入力解析
//! ゲームロジックは持たず、BoardObserverとしてエンジンの状態を描画する。

use std::io::Write;

use crate::config::DisplayConfig;
use crate::game::{Board, BoardObserver, Cell, GameEngine, Player, Position, BOARD_SIZE};

/// 盤面をテキストで書き出すBoardObserver
pub struct TextRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn symbol_for(&self, cell: Cell, hinted: bool) -> &str {
        match cell {
            Cell::Black => &self.display.black_symbol,
            Cell::White => &self.display.white_symbol,
            Cell::Empty if hinted => &self.display.valid_move_symbol,
            Cell::Empty => &self.display.empty_symbol,
        }
    }

    fn player_symbol(&self, player: Player) -> &str {
        self.symbol_for(player.to_cell(), false)
    }

    // 端末への書き込み失敗は表示が欠けるだけなので無視する
    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }
}

impl<W: Write> BoardObserver for TextRenderer<W> {
    fn render_board(&mut self, board: &Board, valid_moves: &[Position]) {
        let header: String = ('a'..='h').map(|c| format!(" {}", c)).collect();
        self.emit(&format!(" {}", header));

        for (row_idx, row) in board.rows().enumerate() {
            let mut line = format!("{}", row_idx + 1);
            for (col_idx, &cell) in row.iter().enumerate() {
                let hinted = self.display.show_valid_moves
                    && valid_moves.contains(&Position {
                        row: row_idx,
                        col: col_idx,
                    });
                line.push(' ');
                line.push_str(self.symbol_for(cell, hinted));
            }
            self.emit(&line);
        }
    }

    fn render_current_player(&mut self, player: Player) {
        let line = format!("Turn: {} ({})", player, self.player_symbol(player));
        self.emit(&line);
    }

    fn render_piece_counts(&mut self, black: u8, white: u8) {
        let line = format!(
            "{} Black: {}  {} White: {}",
            self.display.black_symbol, black, self.display.white_symbol, white
        );
        self.emit(&line);
    }

    fn render_winner(&mut self, winner: Option<Player>) {
        let line = match winner {
            Some(player) => format!("Game over. {} wins!", player),
            None => "Game over. It's a tie!".to_string(),
        };
        self.emit(&line);
    }

    fn render_pass(&mut self, player: Player) {
        self.emit(&format!("{} has no valid moves and passes.", player));
    }
}

/// 着手が受け付けられない場合に表示する文言
pub fn move_rejection(engine: &GameEngine, row: usize, col: usize) -> Option<String> {
    if engine.is_game_over() {
        Some("The game is over. Type \"new\" to play again or \"quit\" to exit.".to_string())
    } else if !engine.is_valid_move(row, col) {
        Some(format!("Invalid move: row {}, column {}", row + 1, col + 1))
    } else {
        None
    }
}

/// 入力文字列を(row, col)に変換する
///
/// "3 4" や "3,4" の1始まり数値（盤面の行・列ラベルと同じ）、
/// または "d3" 形式（列a-h、行1-8）を受け付ける。
/// 数値形式で9以上の値はそのまま変換し、判定はエンジンに任せる。0はNone。
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();

    let mut chars = input.chars();
    if let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) {
        if file.is_ascii_alphabetic() {
            let col = (file.to_ascii_lowercase() as usize).checked_sub('a' as usize)?;
            let row = rank.to_digit(10)?.checked_sub(1)? as usize;
            return (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col));
        }
    }

    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}
