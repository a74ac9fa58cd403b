//! # forumdb-core
//!
//! Repository ports and use cases of ForumDB.

pub mod entities;
pub mod repositories;
pub mod usecases;
