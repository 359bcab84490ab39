use thiserror::Error;

/// revu 統一エラー型
///
/// 取得系の失敗は3種類に分類される:
/// トランスポート層 (`Network`)、非2xxレスポンス (`Api`)、
/// ボディの形不一致 (`Decode`)。
#[derive(Debug, Error)]
pub enum RevuError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch data: {status} ({reason})")]
    Api { status: u16, reason: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RevuError>;

impl RevuError {
    /// HTTPステータスコード（`Api` のみ）
    pub fn status(&self) -> Option<u16> {
        match self {
            RevuError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
