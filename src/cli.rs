use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use forumdb_boundary as json;
use forumdb_core::usecases::{self, ReplyFetch};
use forumdb_db_memory::MemoryDb;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a thread with all of its comments and replies as JSON
    ThreadDetail {
        thread_id: String,
        /// Load the replies of all comments concurrently
        #[arg(long)]
        concurrent: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    match args.command {
        Command::ThreadDetail {
            thread_id,
            concurrent,
        } => {
            let db = MemoryDb::try_load_from_file(&cfg.db.fixtures)?;
            let fetch = if concurrent {
                ReplyFetch::Concurrent
            } else {
                cfg.thread_detail.reply_fetch
            };
            let detail = usecases::get_thread_detail(&db, &thread_id, fetch)
                .await
                .with_context(|| format!("Failed to load thread '{thread_id}'"))?;
            let output = serde_json::to_string_pretty(&json::ThreadDetail::from(detail))?;
            println!("{output}");
        }
    }
    Ok(())
}
