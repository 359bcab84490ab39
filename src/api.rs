//! レビューAPIクライアント
//!
//! 2つの読み取り専用エンドポイントを呼び出す薄い取得層。
//! リトライもキャッシュも行わない。

mod client;
mod types;

pub use client::ApiClient;
pub use types::{AppItem, AppsResponse, Review, ReviewsResponse};
