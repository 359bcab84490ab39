//! revu reviews コマンド
//!
//! 指定アプリの直近レビューをカード形式で表示する。

use crate::api::{ApiClient, Review};
use crate::card::{format_review_date, star_rating, NO_REVIEWS_MESSAGE};
use crate::config::ServerConfig;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// App store identifier (e.g. 595068606)
    pub app_id: String,

    /// API server base URL (default: $REVU_SERVER or http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = ServerConfig::resolve(args.server);
    let client = ApiClient::new(&config);
    let reviews = client
        .fetch_reviews(&args.app_id)
        .await
        .map(|r| r.reviews)
        .map_err(|e| format!("Failed to load reviews: {e}"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&reviews).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if reviews.is_empty() {
        println!("{NO_REVIEWS_MESSAGE}");
        return Ok(());
    }

    for review in &reviews {
        print!("{}", format_card(review));
    }
    println!("{} review(s)", reviews.len());
    Ok(())
}

/// 1件のレビューカードを整形する
fn format_card(review: &Review) -> String {
    format!(
        "{}\n{}  {}\n{}\n\n",
        review.author.bold(),
        star_rating(review.score).yellow(),
        format_review_date(&review.date).dimmed(),
        review.content,
    )
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;
