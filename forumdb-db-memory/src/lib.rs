//! In-memory storage for ForumDB, loaded from a JSON fixture file.

use anyhow::{anyhow, Context as _, Result as Fallible};
use forumdb_core::entities::*;
use std::{collections::HashMap, fs, path::Path};

pub mod models;
mod repo_impl;

#[derive(Debug, Default)]
pub struct MemoryDb {
    threads: HashMap<Id, Thread>,
    // Ordered by date, oldest first
    comments_by_thread: HashMap<Id, Vec<Comment>>,
    // Ordered by date, oldest first
    replies_by_comment: HashMap<Id, Vec<Reply>>,
}

impl MemoryDb {
    pub fn try_load_from_file<P: AsRef<Path>>(file_path: P) -> Fallible<Self> {
        let file_path = file_path.as_ref();
        log::info!("Loading fixtures from {}", file_path.display());
        let json = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read fixtures from {}", file_path.display()))?;
        Self::try_from_json(&json)
    }

    pub fn try_from_json(json: &str) -> Fallible<Self> {
        let fixture: models::Fixture =
            serde_json::from_str(json).context("Failed to parse fixtures")?;
        Self::try_from_fixture(fixture)
    }

    pub fn try_from_fixture(fixture: models::Fixture) -> Fallible<Self> {
        let models::Fixture {
            users,
            threads,
            comments,
            replies,
        } = fixture;
        let usernames: HashMap<_, _> = users.into_iter().map(|u| (u.id, u.username)).collect();
        let username_of = |owner: &str| {
            usernames
                .get(owner)
                .cloned()
                .ok_or_else(|| anyhow!("Unknown owner '{owner}'"))
        };

        let mut db = Self::default();
        for t in threads {
            let thread = Thread {
                id: t.id.into(),
                title: t.title,
                body: t.body,
                date: parse_date(&t.date)?,
                username: username_of(&t.owner)?,
            };
            db.threads.insert(thread.id.clone(), thread);
        }
        for c in comments {
            let comment = Comment {
                id: c.id.into(),
                thread_id: c.thread.into(),
                username: username_of(&c.owner)?,
                date: parse_date(&c.date)?,
                content: c.content,
                deleted_at: c.deleted_at.as_deref().map(parse_date).transpose()?,
            };
            db.comments_by_thread
                .entry(comment.thread_id.clone())
                .or_default()
                .push(comment);
        }
        for r in replies {
            let reply = Reply {
                id: r.id.into(),
                comment_id: r.comment.into(),
                username: username_of(&r.owner)?,
                date: parse_date(&r.date)?,
                content: r.content,
                deleted_at: r.deleted_at.as_deref().map(parse_date).transpose()?,
            };
            db.replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(reply);
        }
        // Stable sorting keeps the fixture order of entries with equal dates
        for comments in db.comments_by_thread.values_mut() {
            comments.sort_by_key(|c| c.date);
        }
        for replies in db.replies_by_comment.values_mut() {
            replies.sort_by_key(|r| r.date);
        }
        log::debug!(
            "Loaded {} thread(s), {} comment(s) and {} reply(ies)",
            db.threads.len(),
            db.comments_by_thread.values().map(Vec::len).sum::<usize>(),
            db.replies_by_comment.values().map(Vec::len).sum::<usize>(),
        );
        Ok(db)
    }
}

fn parse_date(s: &str) -> Fallible<Timestamp> {
    s.parse()
        .with_context(|| format!("Invalid date '{s}'"))
}
