//! ゲームの基本型定義モジュール
//! オセロで使用されるセル、プレイヤー、座標、方向ベクトルを定義する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面の一辺のマス数
pub const BOARD_SIZE: usize = 8;

/// 盤面の各マスの状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// ゲームのプレイヤーを表すenum
/// 先手は黒、後手は白
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// 相手プレイヤーを返す
    pub fn opposite(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// プレイヤーを対応するセル状態に変換する
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// 8方向探索で使う1マス分の移動量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub row: i8,
    pub col: i8,
}

/// 隣接8方向の移動ベクトル
/// 合法手判定と石の反転の両方がこの順序で走査する
pub const NEIGHBOR_OFFSETS: [Direction; 8] = [
    Direction { row: -1, col: 0 },  // 上
    Direction { row: 1, col: 0 },   // 下
    Direction { row: 0, col: -1 },  // 左
    Direction { row: 0, col: 1 },   // 右
    Direction { row: -1, col: -1 }, // 左上
    Direction { row: -1, col: 1 },  // 右上
    Direction { row: 1, col: -1 },  // 左下
    Direction { row: 1, col: 1 },   // 右下
];

/// 8x8盤面上の座標を表す構造体
/// row, colともに0-7の範囲で有効
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// 範囲チェック付きのコンストラクタ
    /// 8x8盤面の範囲外の座標の場合はNoneを返す
    pub fn new(row: usize, col: usize) -> Option<Position> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// 座標が有効範囲内かチェックする
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// 指定方向に1マス進んだ座標を返す
    /// 盤面の外に出る場合はNone
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let row = self.row.checked_add_signed(direction.row as isize)?;
        let col = self.col.checked_add_signed(direction.col as isize)?;
        Position::new(row, col)
    }

    /// 盤面の全座標を行優先順（0行目の0列目から）で列挙する
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
