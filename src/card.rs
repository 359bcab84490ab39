//! レビューカードの整形
//!
//! 1件のレビューを表示用テキストに変換する純粋関数群。
//! TUIのビューとCLIの出力の両方から使う。

use chrono::{DateTime, Local, Utc};

/// レビューが0件のときのメッセージ
///
/// 選択なし（Idle）と取得結果0件（Ready([])）は同じ文言で描画する。
pub const NO_REVIEWS_MESSAGE: &str = "No reviews in the last 48 hours";

/// 評価を星グリフの並びとして整形する
///
/// 塗り星の個数は常に score に等しい。5を超える値もそのまま
/// 繰り返す（範囲外は表示上の異常であり、ここでは拒否しない）。
pub fn star_rating(score: u8) -> String {
    let filled = "★".repeat(score as usize);
    let empty = "☆".repeat(5usize.saturating_sub(score as usize));
    format!("{filled}{empty}")
}

/// レビュー日時を `6/21/2024, 3:05 PM` 形式に整形する
///
/// 元UIのロケール表示（月/日/年 + 12時間制）に合わせ、
/// 端末のローカルタイムゾーンで表示する。
pub fn format_review_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M %p")
        .to_string()
}

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;
