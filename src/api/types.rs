//! APIレスポンスの型定義
//!
//! フィールド名はサーバー（Goサービス）のJSONキーに合わせてPascalCase。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// アプリディレクトリの1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IconUrl")]
    pub icon_url: String,
}

/// GET /api/top-apps のレスポンスボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppsResponse {
    #[serde(rename = "Apps", default, deserialize_with = "nullable_vec")]
    pub apps: Vec<AppItem>,
}

/// 1件のユーザーレビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Content")]
    pub content: String,
    /// 評価（1〜5想定。範囲外は表示上の異常として扱い、拒否しない）
    #[serde(rename = "Score", deserialize_with = "score_from_any")]
    pub score: u8,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}

/// GET /api/reviews のレスポンスボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    #[serde(rename = "Reviews", default, deserialize_with = "nullable_vec")]
    pub reviews: Vec<Review>,
}

/// Goサービスは空スライスを null としてエンコードするため、
/// null を空のVecとして受け付ける。
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Score をデシリアライズする
///
/// GoサービスはiTunesフィードの評価を文字列のまま返すため、
/// JSON文字列と数値の両方を受け付ける。
fn score_from_any<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreRepr {
        Num(u8),
        Text(String),
    }

    match ScoreRepr::deserialize(deserializer)? {
        ScoreRepr::Num(n) => Ok(n),
        ScoreRepr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
