//! 表示層への通知インターフェース
//! エンジンは描画を行わず、このtraitを通じて状態を外に渡すだけにする。

use super::board::Board;
use super::engine::GameEngine;
use super::types::{Player, Position};

/// 盤面の表示を担当する側が実装するtrait
pub trait BoardObserver {
    /// 盤面と現在のプレイヤーの合法手を描画する
    fn render_board(&mut self, board: &Board, valid_moves: &[Position]);

    fn render_current_player(&mut self, player: Player);

    /// 石数を描画する
    fn render_piece_counts(&mut self, black: u8, white: u8);

    /// 終局時のみ呼ばれる。Noneは引き分け
    fn render_winner(&mut self, winner: Option<Player>);

    /// 直前の着手で相手がパスになった場合に呼ばれる
    fn render_pass(&mut self, _player: Player) {}
}

impl GameEngine {
    /// 現在の状態をobserverに通知する
    pub fn notify(&self, observer: &mut dyn BoardObserver) {
        observer.render_board(self.board(), &self.valid_moves());
        if let Some(skipped) = self.last_pass() {
            observer.render_pass(skipped);
        }
        observer.render_current_player(self.current_player());

        let (black, white) = self.count_pieces();
        observer.render_piece_counts(black, white);

        if self.is_game_over() {
            observer.render_winner(self.winner());
        }
    }
}
