use clap::{Parser, Subcommand};

use crate::commands::{apps, browse, reviews};

#[derive(Debug, Parser)]
#[command(name = "revu")]
#[command(about = "App review browser CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse apps and their recent reviews interactively
    Browse(browse::Args),

    /// List the app directory
    Apps(apps::Args),

    /// Show recent reviews for one app
    Reviews(reviews::Args),
}
