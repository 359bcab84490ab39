//! revu browse コマンド
//!
//! レビューブラウザ TUI を起動する。

use crate::config::ServerConfig;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser, Default)]
pub struct Args {
    /// API server base URL (default: $REVU_SERVER or http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = ServerConfig::resolve(args.server);
    tui::run(&config).await.map_err(|e| e.to_string())
}
