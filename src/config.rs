//! サーバー接続設定

use crate::env::EnvVar;
use reqwest::Client;
use std::time::Duration;

/// デフォルトのサーバーURL（ローカル開発サーバー）
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// REVU_SERVER 環境変数
const SERVER_ENV_VAR: &str = "REVU_SERVER";

/// サーバー接続設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// APIサーバーのベースURL（末尾スラッシュなし）
    pub base_url: String,
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER.to_string(),
            timeout: Some(Duration::from_secs(30)),
            user_agent: "revu-cli".to_string(),
        }
    }
}

impl ServerConfig {
    /// ベースURLを解決する
    ///
    /// 優先順位: CLIフラグ > REVU_SERVER 環境変数 > デフォルト
    pub fn resolve(flag: Option<String>) -> Self {
        let base_url = flag
            .or_else(|| EnvVar::get(SERVER_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
