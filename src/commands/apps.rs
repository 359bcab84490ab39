//! revu apps コマンド
//!
//! アプリディレクトリ（シード連結済み）を一覧表示する。

use crate::api::{ApiClient, AppItem};
use crate::config::ServerConfig;
use crate::directory;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// API server base URL (default: $REVU_SERVER or http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only app names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = ServerConfig::resolve(args.server);
    let client = ApiClient::new(&config);
    let apps = directory::load(&client).await.map_err(|e| e.to_string())?;

    if args.json {
        print_json(&apps)?;
    } else if args.simple {
        print_simple(&apps);
    } else {
        print_table(&apps);
    }

    Ok(())
}

fn print_json(apps: &[AppItem]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(apps).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_simple(apps: &[AppItem]) {
    for app in apps {
        println!("{}", app.name);
    }
}

fn print_table(apps: &[AppItem]) {
    println!("{}", build_table(apps));
    println!("{} app(s)", apps.len());
}

fn build_table(apps: &[AppItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Icon URL"]);
    for app in apps {
        table.add_row(vec![
            app.id.as_str(),
            app.name.as_str(),
            app.icon_url.as_str(),
        ]);
    }
    table
}

#[cfg(test)]
#[path = "apps_test.rs"]
mod apps_test;
