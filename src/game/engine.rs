//! ゲーム進行管理モジュール
//! 盤面と手番を所有し、着手・パス・終局判定・スコア計算を担当する。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::Board;
use super::rules::ReversiRules;
use super::types::{Direction, Player, Position};
use crate::error::{GameError, Result};

/// 終局の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// 64マス全てが埋まった
    BoardFull,
    /// 両プレイヤーとも合法手がない
    NoMovesForEither,
}

/// ゲームの進行状態を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲーム進行中
    InProgress,
    /// ゲーム終了（勝者と最終スコアを記録）
    Finished {
        winner: Option<Player>,
        score: (u8, u8),
        reason: FinishReason,
    },
}

/// 1手の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: Player,
    pub position: Position,
    pub flipped: Vec<Position>,
    /// 合法手がなくパスになったプレイヤー
    pub passed: Option<Player>,
    pub status: GameStatus,
}

/// 表示層に渡すための盤面スナップショット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub valid_moves: Vec<Position>,
    pub score: (u8, u8),
    pub status: GameStatus,
}

/// オセロのゲームエンジン
///
/// 盤面・手番・進行状態を所有する。状態の変更は`make_move`/`try_make_move`と
/// `initialize`のみで行われる。`board_mut`は盤面を直接書き換えられるが、
/// テストの局面準備用であり、通常の呼び出し側は読み取り専用として扱うこと。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_pass: Option<Player>,
}

impl GameEngine {
    /// 初期局面のエンジンを作成する
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            status: GameStatus::InProgress,
            last_pass: None,
        }
    }

    /// 盤面を初期配置に戻し、黒番から再開する
    /// 何度呼んでも同じ状態になる
    pub fn initialize(&mut self) {
        *self = Self::new();
        debug!("game initialized");
    }

    /// 探索に使う8方向の移動ベクトル
    pub fn neighbor_offsets(&self) -> &'static [Direction; 8] {
        ReversiRules::neighbor_offsets()
    }

    /// 現在のプレイヤーが(row, col)に置けるか
    /// 盤面外の座標はfalse
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Position::new(row, col)
            .map(|position| ReversiRules::is_valid_move(&self.board, position, self.current_player))
            .unwrap_or(false)
    }

    /// 現在のプレイヤーの合法手（行優先順）
    pub fn valid_moves(&self) -> Vec<Position> {
        ReversiRules::valid_moves(&self.board, self.current_player)
    }

    /// (row, col)に着手する
    ///
    /// 非合法手・占有済み・盤面外・終局後の要求は何もせずに無視する。
    /// 拒否理由が必要な場合は`try_make_move`を使う。
    pub fn make_move(&mut self, row: usize, col: usize) {
        let result = match Position::new(row, col) {
            Some(position) => self.try_make_move(position),
            None => Err(GameError::OutOfBounds { row, col }),
        };

        if let Err(e) = result {
            debug!(row, col, player = %self.current_player, error = %e, "move ignored");
        }
    }

    /// 着手を実行し、結果を返す
    ///
    /// 成功時は石を反転し手番を交代する。交代後のプレイヤーに合法手がなければ
    /// 手番は着手したプレイヤーに戻り、双方とも合法手がなければ終局する。
    /// 失敗時は盤面も手番も変更しない。
    pub fn try_make_move(&mut self, position: Position) -> Result<MoveReport> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if !position.is_valid() {
            return Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }
        if !self.board.is_empty(position) {
            return Err(GameError::Occupied { position });
        }

        let player = self.current_player;
        let flipped = ReversiRules::apply_flip(&mut self.board, position, player);
        if flipped.is_empty() {
            return Err(GameError::NoCapture { position, player });
        }
        debug!(%position, %player, flipped = flipped.len(), "move applied");

        self.current_player = player.opposite();
        self.last_pass = None;
        self.advance_turn();

        Ok(MoveReport {
            player,
            position,
            flipped,
            passed: self.last_pass,
            status: self.status,
        })
    }

    /// 着手後のパス処理と終局判定
    fn advance_turn(&mut self) {
        if self.board.is_full() {
            self.finish(FinishReason::BoardFull);
            return;
        }

        if ReversiRules::has_valid_moves(&self.board, self.current_player) {
            return;
        }

        let skipped = self.current_player;
        if ReversiRules::has_valid_moves(&self.board, skipped.opposite()) {
            info!(player = %skipped, "no valid moves, passing");
            self.current_player = skipped.opposite();
            self.last_pass = Some(skipped);
        } else {
            self.finish(FinishReason::NoMovesForEither);
        }
    }

    fn finish(&mut self, reason: FinishReason) {
        let winner = self.winner();
        let score = self.board.count_pieces();
        self.status = GameStatus::Finished {
            winner,
            score,
            reason,
        };
        info!(?winner, black = score.0, white = score.1, ?reason, "game over");
    }

    /// 終局しているか
    /// 盤面が全て埋まっている、または着手の結果双方パスで終局した場合にtrue
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || self.is_finished()
    }

    fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    /// 石数の多い方を返す（同数ならNone）
    ///
    /// 毎回盤面から再計算する。終局前に呼んだ場合は現時点で優勢な側を返すだけで、
    /// 確定した勝者として扱えるのは`is_game_over()`がtrueになってから。
    pub fn winner(&self) -> Option<Player> {
        ReversiRules::determine_winner(&self.board)
    }

    /// 戻り値: (黒石数, 白石数)
    pub fn count_pieces(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 盤面への可変参照
    /// 局面を直接セットするためのもので、ルール上の不変条件は保証されない。
    ///
    /// パス処理は着手の直後にしか行われないため、手番側に合法手のない局面を
    /// 直接作ると、`is_game_over()`はfalseのまま全ての着手が無視され続ける。
    /// その場合は`valid_moves()`が空であることで検出し、`initialize`で戻すこと。
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 直前の着手でパスになったプレイヤー
    pub fn last_pass(&self) -> Option<Player> {
        self.last_pass
    }

    /// 表示層向けの現在状態
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            valid_moves: self.valid_moves(),
            score: self.count_pieces(),
            status: self.status,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
