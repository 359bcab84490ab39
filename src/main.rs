mod api;
mod card;
mod cli;
mod commands;
mod config;
mod directory;
mod env;
mod error;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
