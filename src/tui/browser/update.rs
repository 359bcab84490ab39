//! レビューブラウザの update（状態遷移ロジック）

use super::model::{Focus, Model, Msg, ReviewsPanel, SelectorModel};

/// update() が返す副作用コマンド
///
/// 実際の取得はイベントループ側で tokio タスクとして実行される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    FetchDirectory,
    FetchReviews { app_id: String, generation: u64 },
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
            None
        }
        Msg::FocusNext => {
            model.focus = model.focus.next();
            None
        }
        Msg::Up => match model.focus {
            Focus::Apps => move_selection(model, -1),
            Focus::Reviews => {
                model.scroll = model.scroll.saturating_sub(1);
                None
            }
        },
        Msg::Down => match model.focus {
            Focus::Apps => move_selection(model, 1),
            Focus::Reviews => {
                model.scroll = model.scroll.saturating_add(1);
                None
            }
        },
        Msg::Reselect => match model.focus {
            Focus::Apps => start_review_fetch(model),
            Focus::Reviews => None,
        },
        Msg::DirectoryLoaded(Ok(apps)) => {
            let mut state = ratatui::widgets::ListState::default();
            if !apps.is_empty() {
                state.select(Some(0));
            }
            model.selector = SelectorModel::Ready { apps, state };
            // デフォルト選択（先頭 = シード）を即座に報告し、取得を開始する
            start_review_fetch(model)
        }
        Msg::DirectoryLoaded(Err(err)) => {
            model.selector = SelectorModel::Failed;
            model.last_error = Some(format!("Failed to load apps: {err}"));
            None
        }
        Msg::ReviewsLoaded { generation, result } => {
            // 古い世代の完了は破棄（後勝ちレースの防止）
            if generation != model.generation {
                return None;
            }
            match result {
                Ok(reviews) => {
                    model.panel = ReviewsPanel::Ready(reviews);
                    model.scroll = 0;
                }
                Err(err) => {
                    model.panel =
                        ReviewsPanel::Failed(format!("Failed to load reviews: {err}"));
                }
            }
            None
        }
    }
}

/// セレクタの選択を移動し、変化した場合は取得を開始する
fn move_selection(model: &mut Model, delta: i64) -> Option<Cmd> {
    let SelectorModel::Ready { apps, state } = &mut model.selector else {
        return None;
    };
    if apps.is_empty() {
        return None;
    }

    let current = state.selected().unwrap_or(0);
    let next = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (current + delta as usize).min(apps.len() - 1)
    };

    if next == current {
        return None;
    }
    state.select(Some(next));
    start_review_fetch(model)
}

/// 選択中アプリのレビュー取得を開始する
///
/// 世代カウンタを進めてからコマンドを発行する。選択がなければ
/// 何もしない（ネットワーク呼び出しは発生しない）。
fn start_review_fetch(model: &mut Model) -> Option<Cmd> {
    let app_id = model.selected_app()?.id.clone();
    model.generation += 1;
    model.panel = ReviewsPanel::Loading;
    model.scroll = 0;
    Some(Cmd::FetchReviews {
        app_id,
        generation: model.generation,
    })
}

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;
