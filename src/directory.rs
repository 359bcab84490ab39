//! アプリディレクトリ
//!
//! サーバーから取得したアプリ一覧の先頭に、開発用の固定エントリを
//! 常に連結する。固定エントリは取得処理の中に隠さず、この境界で
//! 名前付きのシードとしてマージする。

use crate::api::{ApiClient, AppItem};
use crate::error::Result;

/// 開発用の固定エントリのストアID
pub const TEST_APP_ID: &str = "595068606";

/// 開発用の固定エントリ
pub fn test_app_entry() -> AppItem {
    AppItem {
        id: TEST_APP_ID.to_string(),
        name: "Test App".to_string(),
        icon_url: String::new(),
    }
}

/// 取得済みエントリの先頭にシードを連結する
pub fn merge_with_seed(fetched: Vec<AppItem>) -> Vec<AppItem> {
    let mut apps = Vec::with_capacity(fetched.len() + 1);
    apps.push(test_app_entry());
    apps.extend(fetched);
    apps
}

/// アプリディレクトリをロードする（シード連結済み）
pub async fn load(client: &ApiClient) -> Result<Vec<AppItem>> {
    let response = client.fetch_top_apps().await?;
    Ok(merge_with_seed(response.apps))
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;
