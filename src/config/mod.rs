use anyhow::{Context as _, Result};
use forumdb_core::usecases::ReplyFetch;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "forumdb.toml";

const ENV_NAME_DB_FIXTURES: &str = "DATABASE_FIXTURES";

pub struct Config {
    pub db: Db,
    pub thread_detail: ThreadDetail,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found => load default configuration.",
                    file_path.display()
                );
                raw::Config::try_default()?
            }
            Err(err) => return Err(err.into()),
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(fixtures) = env::var(ENV_NAME_DB_FIXTURES) {
            cfg.db.fixtures = fixtures.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// JSON file with users, threads, comments and replies.
    pub fixtures: PathBuf,
}

pub struct ThreadDetail {
    pub reply_fetch: ReplyFetch,
}

// Missing sections are taken from the embedded defaults.
impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, thread_detail } = from;
        let defaults = raw::Config::try_default().context("Invalid default configuration")?;

        let raw::Db { fixtures } = db
            .or(defaults.db)
            .context("Missing DB configuration")?;
        let db = Db { fixtures };

        let raw::ThreadDetail { reply_fetch } = thread_detail
            .or(defaults.thread_detail)
            .context("Missing thread detail configuration")?;
        let reply_fetch = match reply_fetch {
            Some(raw::ReplyFetch::Concurrent) => ReplyFetch::Concurrent,
            Some(raw::ReplyFetch::Sequential) | None => ReplyFetch::Sequential,
        };
        let thread_detail = ThreadDetail { reply_fetch };

        Ok(Self { db, thread_detail })
    }
}
