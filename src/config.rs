//! アプリケーション設定管理モジュール
//! 盤面の表示とログ出力の設定を
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, io, path::Path, str::FromStr};

/// 設定ファイルの探索順
const CONFIG_PATHS: [&str; 2] = ["othello.json", "config/othello.json"];

/// 盤面表示の設定を管理する構造体
/// 省略したフィールドはデフォルト値になる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub black_symbol: String,
    pub white_symbol: String,
    pub empty_symbol: String,
    /// 合法手のマスを強調表示するか
    pub show_valid_moves: bool,
    pub valid_move_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            black_symbol: "●".to_string(),
            white_symbol: "○".to_string(),
            empty_symbol: ".".to_string(),
            show_valid_moves: true,
            valid_move_symbol: "*".to_string(),
        }
    }
}

/// ログ出力の設定を管理する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enable_logging: bool,
    /// tracingのレベル名（error, warn, info, debug, trace）
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            level: "info".to_string(),
        }
    }
}

/// アプリケーションの全設定を統合するメイン設定構造体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 設定関連のエラーを表すenum
/// ファイル読み込み、パース、検証エラーなどを含む
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },

    #[error("設定値が無効です: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// 変数の参照元を差し替えて環境変数の上書きを適用する
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("OTHELLO_LOG_LEVEL") {
            if tracing::Level::from_str(&level).is_err() {
                return Err(ConfigError::EnvVarError {
                    name: "OTHELLO_LOG_LEVEL".to_string(),
                    value: level,
                });
            }
            self.logging.level = level;
        }

        if let Some(enable) = lookup("OTHELLO_ENABLE_LOGGING") {
            self.logging.enable_logging = enable.parse().map_err(|_| ConfigError::EnvVarError {
                name: "OTHELLO_ENABLE_LOGGING".to_string(),
                value: enable,
            })?;
        }

        if let Some(show) = lookup("OTHELLO_SHOW_VALID_MOVES") {
            self.display.show_valid_moves = show.parse().map_err(|_| ConfigError::EnvVarError {
                name: "OTHELLO_SHOW_VALID_MOVES".to_string(),
                value: show,
            })?;
        }

        Ok(())
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_first(&CONFIG_PATHS)?;
        config.apply_env(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// 候補パスを順に調べ、最初に見つかった設定ファイルを読み込む
    ///
    /// 存在しないファイルは読み飛ばす。見つかったファイルが読めない・
    /// 解析できない場合はエラーを返す。どれもなければデフォルト値。
    pub fn load_first<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        for path in paths {
            match Self::from_file(path) {
                Ok(config) => return Ok(config),
                Err(ConfigError::FileReadError(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(Config::default())
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 設定値の妥当性をチェックする
    /// 不正な値がある場合はConfigErrorを返す
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [
            ("display.black_symbol", &self.display.black_symbol),
            ("display.white_symbol", &self.display.white_symbol),
            ("display.empty_symbol", &self.display.empty_symbol),
            ("display.valid_move_symbol", &self.display.valid_move_symbol),
        ];

        for (i, (field, symbol)) in symbols.iter().enumerate() {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: symbol.to_string(),
                });
            }
            // 同じ記号だと盤面が読めなくなる
            if symbols[..i].iter().any(|(_, other)| other == symbol) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: symbol.to_string(),
                });
            }
        }

        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }

    /// ログレベルを取得する
    /// validate済みでない場合はINFOにフォールバックする
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.logging.level).unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_validate_rejects_duplicate_symbols() {
        let mut config = Config::default();
        config.display.white_symbol = config.display.black_symbol.clone();

        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "display.white_symbol"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(|name| match name {
                "OTHELLO_LOG_LEVEL" => Some("debug".to_string()),
                "OTHELLO_SHOW_VALID_MOVES" => Some("false".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enable_logging);
        assert!(!config.display.show_valid_moves);
    }

    #[test]
    fn test_apply_env_rejects_bad_bool() {
        let mut config = Config::default();
        let result = config.apply_env(|name| {
            (name == "OTHELLO_ENABLE_LOGGING").then(|| "maybe".to_string())
        });

        assert!(matches!(result, Err(ConfigError::EnvVarError { .. })));
        assert!(config.logging.enable_logging);
    }
}
