//! アプリケーション全体のエラー定義モジュール
//! 着手の拒否理由をゲームロジック側で統一管理する。

use thiserror::Error;

use crate::game::{Player, Position};

/// ゲームロジックに関連するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Position {position} is already occupied")]
    Occupied { position: Position },

    #[error("Position {position} does not capture any disc for {player}")]
    NoCapture { position: Position, player: Player },

    #[error("Game already finished")]
    GameFinished,
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfBounds { row: 8, col: 2 };
        assert_eq!(err.to_string(), "Position (8, 2) is outside the 8x8 board");

        let err = GameError::NoCapture {
            position: Position { row: 0, col: 0 },
            player: Player::Black,
        };
        assert_eq!(err.to_string(), "Position (0, 0) does not capture any disc for Black");

        assert_eq!(GameError::GameFinished.to_string(), "Game already finished");
    }
}
