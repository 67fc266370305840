//! オセロのコンソール版エントリポイント
//! 設定読み込み、ログ初期化、標準入力からの対局ループを行う。

use std::io::{self, BufRead, Write};

use othello::{
    config::Config,
    console::{move_rejection, parse_move, TextRenderer},
    game::GameEngine,
};

const DEFAULT_CONFIG_PATH: &str = "othello.json";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        if let Err(e) = Config::default().save_to_file(DEFAULT_CONFIG_PATH) {
            eprintln!("設定ファイル生成失敗: {}", e);
            std::process::exit(1);
        }
        println!("デフォルト設定を書き出しました: {}", DEFAULT_CONFIG_PATH);
        return;
    }
    let json_output = args.iter().any(|arg| arg == "--json");

    // 設定ファイルと環境変数から統合設定を読み込み
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("設定エラー: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("設定エラー: {}", e);
        eprintln!("デフォルト設定を生成: cargo run -- --generate-config");
        std::process::exit(1);
    }

    if config.logging.enable_logging {
        tracing_subscriber::fmt()
            .with_max_level(config.log_level())
            .with_writer(io::stderr)
            .init();
    }

    let mut engine = GameEngine::new();
    let mut renderer = TextRenderer::new(io::stdout(), config.display.clone());

    let show = |engine: &GameEngine, renderer: &mut TextRenderer<io::Stdout>| {
        if json_output {
            match serde_json::to_string(&engine.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("スナップショット出力失敗: {}", e),
            }
        } else {
            engine.notify(renderer);
        }
    };

    show(&engine, &mut renderer);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("入力エラー: {}", e);
                break;
            }
        };

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "new" => {
                engine.initialize();
                show(&engine, &mut renderer);
            }
            input => match parse_move(input) {
                Some((row, col)) => match move_rejection(&engine, row, col) {
                    Some(message) => println!("{}", message),
                    None => {
                        engine.make_move(row, col);
                        show(&engine, &mut renderer);
                    }
                },
                None => println!("Enter a move as \"row col\" (1-8) or like \"d3\", \"new\" or \"quit\"."),
            },
        }

        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
