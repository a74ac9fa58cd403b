use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("forumdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub thread_detail: Option<ThreadDetail>,
}

impl Config {
    /// The embedded default configuration.
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub fixtures: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThreadDetail {
    pub reply_fetch: Option<ReplyFetch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyFetch {
    Sequential,
    Concurrent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg = Config::try_default().unwrap();
        assert_eq!(cfg.db.unwrap().fixtures, PathBuf::from("forumdb.json"));
        assert_eq!(
            cfg.thread_detail.unwrap().reply_fetch,
            Some(ReplyFetch::Sequential)
        );
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [thread-detail]
            reply-fetch = "concurrent"
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        assert_eq!(
            cfg.thread_detail.unwrap().reply_fetch,
            Some(ReplyFetch::Concurrent)
        );
    }

    #[test]
    fn reject_unknown_reply_fetch() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            [thread-detail]
            reply-fetch = "parallel"
            "#,
        );
        assert!(res.is_err());
    }
}
