//! オセロ盤面の状態を管理するモジュール
//! 8x8グリッドの盤面と石の配置、集計を担当する。

use super::types::{Cell, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// 8x8オセロ盤面を表現する構造体
/// 各マスのCell状態を保持し、盤面操作を提供する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 全マスが空の盤面を作成する
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 新しいオセロ盤面を作成する
    /// 中央の4マスに初期配置（白黒交互）を設定する
    pub fn new() -> Self {
        let mut board = Board::empty();

        // 標準の初期配置
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;

        board
    }

    /// 指定した位置のセル状態を取得する
    /// 範囲外の場合はNoneを返す
    pub fn get_cell(&self, position: Position) -> Option<Cell> {
        if position.is_valid() {
            Some(self.cells[position.row][position.col])
        } else {
            None
        }
    }

    /// 指定した位置にセル状態を設定する
    /// 範囲外の場合はfalseを返す
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> bool {
        if position.is_valid() {
            self.cells[position.row][position.col] = cell;
            true
        } else {
            false
        }
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get_cell(position), Some(Cell::Empty))
    }

    /// 行ごとの読み取り専用ビュー
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// 盤面上の黒石と白石の数を数える
    /// 戻り値: (黒石数, 白石数)
    pub fn count_pieces(&self) -> (u8, u8) {
        let mut black_count = 0;
        let mut white_count = 0;

        for row in &self.cells {
            for &cell in row {
                match cell {
                    Cell::Black => black_count += 1,
                    Cell::White => white_count += 1,
                    Cell::Empty => {}
                }
            }
        }

        (black_count, white_count)
    }

    /// 空マスの数
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    /// 全64マスが埋まっているか
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_initial_state() {
        let board = Board::new();

        assert_eq!(board.get_cell(Position::new(3, 3).unwrap()), Some(Cell::White));
        assert_eq!(board.get_cell(Position::new(3, 4).unwrap()), Some(Cell::Black));
        assert_eq!(board.get_cell(Position::new(4, 3).unwrap()), Some(Cell::Black));
        assert_eq!(board.get_cell(Position::new(4, 4).unwrap()), Some(Cell::White));

        assert_eq!(board.get_cell(Position::new(0, 0).unwrap()), Some(Cell::Empty));
        assert_eq!(board.get_cell(Position::new(7, 7).unwrap()), Some(Cell::Empty));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_board_get_cell_invalid_position() {
        let board = Board::new();
        assert_eq!(board.get_cell(Position { row: 8, col: 0 }), None);
        assert_eq!(board.get_cell(Position { row: 0, col: 8 }), None);
    }

    #[test]
    fn test_board_set_cell() {
        let mut board = Board::new();
        let pos = Position::new(0, 0).unwrap();

        assert!(board.set_cell(pos, Cell::Black));
        assert_eq!(board.get_cell(pos), Some(Cell::Black));
        assert!(!board.set_cell(Position { row: 8, col: 0 }, Cell::Black));
    }

    #[test]
    fn test_board_is_empty() {
        let board = Board::new();

        assert!(board.is_empty(Position::new(0, 0).unwrap()));
        assert!(!board.is_empty(Position::new(3, 3).unwrap()));
        assert!(!board.is_empty(Position { row: 9, col: 9 }));
    }

    #[test]
    fn test_board_count_pieces_initial() {
        let (black_count, white_count) = Board::new().count_pieces();

        assert_eq!(black_count, 2);
        assert_eq!(white_count, 2);
        assert_eq!(Board::empty().count_pieces(), (0, 0));
    }

    #[test]
    fn test_board_is_full() {
        let mut board = Board::empty();
        assert!(!board.is_full());

        for position in Position::all() {
            board.set_cell(position, Cell::White);
        }
        assert!(board.is_full());
        assert_eq!(board.count_pieces(), (0, 64));

        board.set_cell(Position::new(5, 5).unwrap(), Cell::Empty);
        assert!(!board.is_full());
    }
}
