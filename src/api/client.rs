//! HTTP取得クライアント

use crate::api::types::{AppsResponse, ReviewsResponse};
use crate::config::ServerConfig;
use crate::error::{Result, RevuError};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// レビューAPIクライアント
///
/// 安価にクローン可能（reqwest::Client は内部でArcを共有する）。
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// 設定からクライアントを構築
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: config.build_client(),
            base_url: config.base_url.clone(),
        }
    }

    /// アプリディレクトリを取得する
    ///
    /// GET {base}/api/top-apps
    pub async fn fetch_top_apps(&self) -> Result<AppsResponse> {
        let url = format!("{}/api/top-apps", self.base_url);
        self.fetch_json(self.client.get(&url)).await
    }

    /// 指定アプリの直近レビューを取得する
    ///
    /// GET {base}/api/reviews?id={app_id}
    pub async fn fetch_reviews(&self, app_id: &str) -> Result<ReviewsResponse> {
        let url = format!("{}/api/reviews", self.base_url);
        self.fetch_json(self.client.get(&url).query(&[("id", app_id)]))
            .await
    }

    /// リクエストを送信し、JSONボディをデコードする
    ///
    /// 非2xxは `Api`、ボディの形不一致は `Decode` として区別する。
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RevuError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
