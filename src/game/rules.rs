//! オセロのルール実装モジュール
//! 合法手の判定、石の反転処理、勝者判定などを担当する。

use super::board::Board;
use super::types::{Direction, Player, Position, NEIGHBOR_OFFSETS};

/// オセロのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct ReversiRules;

impl ReversiRules {
    /// 探索に使う8方向の移動ベクトルを返す
    pub fn neighbor_offsets() -> &'static [Direction; 8] {
        &NEIGHBOR_OFFSETS
    }

    /// `from`から`direction`方向に挟める相手の石の数を返す
    /// 相手の石が1個以上連続し、その直後に自分の石がある場合のみ非0。
    /// 合法手判定と反転処理はどちらもこの探索だけを使う。
    fn capture_run(board: &Board, from: Position, direction: Direction, player: Player) -> usize {
        let player_cell = player.to_cell();
        let opponent_cell = player.opposite().to_cell();
        let mut run = 0;
        let mut current = from;

        while let Some(next) = current.offset(direction) {
            match board.get_cell(next) {
                Some(cell) if cell == opponent_cell => run += 1,
                Some(cell) if cell == player_cell => return run,
                _ => return 0,
            }
            current = next;
        }

        // 盤面の端に到達
        0
    }

    /// 指定した位置にプレイヤーが置けるかチェックする
    /// 空のマスで、かつ相手の石を少なくとも1個挟める必要がある
    pub fn is_valid_move(board: &Board, position: Position, player: Player) -> bool {
        if !board.is_empty(position) {
            return false;
        }

        NEIGHBOR_OFFSETS
            .iter()
            .any(|&direction| Self::capture_run(board, position, direction, player) > 0)
    }

    /// 指定した位置に石を置いた場合に反転する石の位置を返す
    /// 方向の列挙順、各方向内では置いた位置から近い順
    pub fn flipped_positions(board: &Board, position: Position, player: Player) -> Vec<Position> {
        let mut flipped = Vec::new();
        if !board.is_empty(position) {
            return flipped;
        }

        for &direction in &NEIGHBOR_OFFSETS {
            let run = Self::capture_run(board, position, direction, player);
            let mut current = position;
            for _ in 0..run {
                // runは盤面内で数えた長さなのでoffsetは必ずSome
                if let Some(next) = current.offset(direction) {
                    flipped.push(next);
                    current = next;
                }
            }
        }

        flipped
    }

    /// 指定したプレイヤーの合法手を全て取得する
    /// 盤面全体を行優先順にスキャンする
    pub fn valid_moves(board: &Board, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|&position| Self::is_valid_move(board, position, player))
            .collect()
    }

    /// 指定したプレイヤーに合法手があるかチェックする
    /// パス判定に使用される
    pub fn has_valid_moves(board: &Board, player: Player) -> bool {
        Position::all().any(|position| Self::is_valid_move(board, position, player))
    }

    /// 石を置き、挟んだ石を全て自分の色に変える
    /// 戻り値は反転した石の位置リスト（非合法手なら空で盤面は変更しない）
    pub fn apply_flip(board: &mut Board, position: Position, player: Player) -> Vec<Position> {
        let flipped = Self::flipped_positions(board, position, player);
        if flipped.is_empty() {
            return flipped;
        }

        let player_cell = player.to_cell();
        board.set_cell(position, player_cell);
        for &flip_pos in &flipped {
            board.set_cell(flip_pos, player_cell);
        }

        flipped
    }

    /// 現在の石数から勝者を決定する
    /// 同数の場合はNone（引き分け）を返す
    pub fn determine_winner(board: &Board) -> Option<Player> {
        let (black_count, white_count) = board.count_pieces();

        if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        }
    }
}
