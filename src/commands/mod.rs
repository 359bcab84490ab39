use crate::cli::{Cli, Command};

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    // サブコマンド省略時はTUIブラウザを起動
    match cli.command.unwrap_or(Command::Browse(browse::Args::default())) {
        Command::Browse(args) => browse::run(args).await,
        Command::Apps(args) => apps::run(args).await,
        Command::Reviews(args) => reviews::run(args).await,
    }
}

pub mod apps;
pub mod browse;
pub mod reviews;
