use async_trait::async_trait;
use forumdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::MemoryDb;

mod comment;
mod reply;
mod thread;

type Result<T> = std::result::Result<T, repo::Error>;
