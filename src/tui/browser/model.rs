//! レビューブラウザの Model/Msg 定義

use crate::api::{AppItem, Review};
use crate::error::RevuError;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// SelectorModel（アプリセレクタの状態）
// ============================================================================

/// アプリセレクタの状態
///
/// ディレクトリ取得は起動時に一度だけ行う。失敗した場合は
/// 空のリストのまま `Failed` に留まる（再試行はしない）。
pub enum SelectorModel {
    Loading,
    Ready { apps: Vec<AppItem>, state: ListState },
    Failed,
}

// ============================================================================
// ReviewsPanel（レビューパネルの状態）
// ============================================================================

/// レビューパネルの状態
///
/// `Idle`（選択なし）と `Ready(vec![])` は同一の描画になる。
pub enum ReviewsPanel {
    Idle,
    Loading,
    Ready(Vec<Review>),
    Failed(String),
}

// ============================================================================
// Focus（フォーカス対象ペイン）
// ============================================================================

/// フォーカス対象ペイン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Apps,
    Reviews,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Apps => Focus::Reviews,
            Focus::Reviews => Focus::Apps,
        }
    }
}

// ============================================================================
// Model（アプリケーション状態）
// ============================================================================

/// アプリケーション状態
///
/// 選択中アプリはセレクタのリストへのインデックスとして一元管理し、
/// レビューパネルはそこから導出される。
pub struct Model {
    pub selector: SelectorModel,
    pub panel: ReviewsPanel,
    pub focus: Focus,
    /// レビューパネルのスクロール位置
    pub scroll: u16,
    /// レビュー取得の世代カウンタ。選択が変わるたびに増え、
    /// 古い世代の取得完了は破棄される。
    pub generation: u64,
    /// 直近の非致命的エラー（ステータス行に表示）
    pub last_error: Option<String>,
    pub should_quit: bool,
}

impl Model {
    /// 初期状態を作成（ディレクトリ取得中）
    pub fn new() -> Self {
        Self {
            selector: SelectorModel::Loading,
            panel: ReviewsPanel::Idle,
            focus: Focus::Apps,
            scroll: 0,
            generation: 0,
            last_error: None,
            should_quit: false,
        }
    }

    /// 現在選択中のアプリを取得
    pub fn selected_app(&self) -> Option<&AppItem> {
        match &self.selector {
            SelectorModel::Ready { apps, state } => {
                state.selected().and_then(|i| apps.get(i))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// レビューブラウザへのメッセージ
pub enum Msg {
    Up,
    Down,
    /// 現在の選択を再選択する（同一アプリでも再取得する）
    Reselect,
    FocusNext,
    Quit,
    /// ディレクトリ取得の完了（シード連結済み）
    DirectoryLoaded(Result<Vec<AppItem>, RevuError>),
    /// レビュー取得の完了
    ReviewsLoaded {
        generation: u64,
        result: Result<Vec<Review>, RevuError>,
    },
}

/// キーコードをメッセージに変換
pub fn key_to_msg(key: KeyCode) -> Option<Msg> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
        KeyCode::Enter => Some(Msg::Reselect),
        KeyCode::Tab => Some(Msg::FocusNext),
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        _ => None,
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
