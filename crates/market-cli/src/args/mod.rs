mod enums;

pub use enums::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "market")]
#[command(about = "Search and browse marketplace listings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Marketplace API base URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Search for apps on the marketplace",
        long_about = "Search for apps on the marketplace.

View all the apps in the marketplace:
  $ market search

Search for specific keywords or terms:
  $ market search \"games social\"

Search for all the apps from a particular user:
  $ market search \"snakamoto\"

Results are paginated. Use 'n' to move to the next page, 'p' to move to the
previous page and 'q' to quit. Enter the id shown in the first column to view
detailed information about an app."
    )]
    Search {
        #[arg(help = "Keywords, terms or a creator's username")]
        query: Option<String>,
    },
}
