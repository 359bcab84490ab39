//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したレビューブラウザを提供する。

mod browser;

pub use browser::run;
