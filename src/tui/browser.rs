//! レビューブラウザ TUI
//!
//! ## モジュール構成
//!
//! - `model`: アプリケーション状態（セレクタ・レビューパネル・Msg）
//! - `update`: 状態遷移ロジック（純粋、副作用は `Cmd` として返す）
//! - `view`: 画面描画
//!
//! 取得は tokio タスクとして起動し、完了を mpsc チャネル経由の
//! メッセージとしてイベントループに戻す。

mod model;
mod update;
mod view;

use crate::api::ApiClient;
use crate::config::ServerConfig;
use crate::directory;
use crate::error::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use model::{key_to_msg, Model, Msg};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use update::{update, Cmd};

/// 1tickあたりのキー入力待ち時間
const TICK_RATE: Duration = Duration::from_millis(50);

/// TUI を実行
pub async fn run(config: &ServerConfig) -> Result<()> {
    let client = ApiClient::new(config);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new();
    dispatch(Cmd::FetchDirectory, &client, &tx);

    let result = tokio::task::block_in_place(|| {
        event_loop(&mut terminal, &mut model, &client, &tx, &mut rx)
    });

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
///
/// キー入力はブロッキングでポーリングし、非同期の取得完了は
/// 毎tickチャネルからドレインする。
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    model: &mut Model,
    client: &ApiClient,
    tx: &mpsc::UnboundedSender<Msg>,
    rx: &mut mpsc::UnboundedReceiver<Msg>,
) -> Result<()>
where
    crate::error::RevuError: From<B::Error>,
{
    while !model.should_quit {
        terminal.draw(|f| view::draw(f, model))?;

        while let Ok(msg) = rx.try_recv() {
            apply(model, msg, client, tx);
        }

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = key_to_msg(key.code) {
                        apply(model, msg, client, tx);
                    }
                }
            }
        }
    }
    Ok(())
}

/// メッセージを適用し、発生した副作用コマンドを起動する
fn apply(model: &mut Model, msg: Msg, client: &ApiClient, tx: &mpsc::UnboundedSender<Msg>) {
    if let Some(cmd) = update(model, msg) {
        dispatch(cmd, client, tx);
    }
}

/// 取得コマンドを tokio タスクとして起動
fn dispatch(cmd: Cmd, client: &ApiClient, tx: &mpsc::UnboundedSender<Msg>) {
    let client = client.clone();
    let tx = tx.clone();
    match cmd {
        Cmd::FetchDirectory => {
            tokio::spawn(async move {
                let result = directory::load(&client).await;
                let _ = tx.send(Msg::DirectoryLoaded(result));
            });
        }
        Cmd::FetchReviews { app_id, generation } => {
            tokio::spawn(async move {
                let result = client.fetch_reviews(&app_id).await.map(|r| r.reviews);
                let _ = tx.send(Msg::ReviewsLoaded { generation, result });
            });
        }
    }
}
