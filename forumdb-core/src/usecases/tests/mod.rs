use super::prelude::*;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::HashMap, time::Duration};

use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repositories that keep the insertion order
/// and record every request.
#[derive(Default)]
pub struct MockDb {
    pub threads: Vec<Thread>,
    pub comments: Vec<Comment>,
    pub replies: Vec<Reply>,
    /// Simulated latency of loading the replies of a comment.
    pub reply_delays: HashMap<String, Duration>,
    /// Loading the replies of this comment fails.
    pub failing_comment_id: Option<String>,
    /// Requested thread ids, in request order.
    pub thread_requests: Mutex<Vec<String>>,
    /// Thread ids for which comments were requested, in request order.
    pub comment_requests: Mutex<Vec<String>>,
    /// Comment ids for which replies were requested, in request order.
    pub reply_requests: Mutex<Vec<String>>,
}

impl MockDb {
    pub fn requested_thread_ids(&self) -> Vec<String> {
        self.thread_requests.lock().clone()
    }

    pub fn requested_comment_thread_ids(&self) -> Vec<String> {
        self.comment_requests.lock().clone()
    }

    pub fn requested_comment_ids(&self) -> Vec<String> {
        self.reply_requests.lock().clone()
    }
}

#[async_trait]
impl ThreadRepository for MockDb {
    async fn get_thread_by_id(&self, id: &str) -> RepoResult<Thread> {
        self.thread_requests.lock().push(id.to_owned());
        self.threads
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl CommentRepository for MockDb {
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<Comment>> {
        self.comment_requests.lock().push(thread_id.to_owned());
        Ok(self
            .comments
            .iter()
            .filter(|c| c.thread_id.as_str() == thread_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReplyRepository for MockDb {
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> RepoResult<Vec<Reply>> {
        self.reply_requests.lock().push(comment_id.to_owned());
        if let Some(delay) = self.reply_delays.get(comment_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_comment_id.as_deref() == Some(comment_id) {
            return Err(anyhow!("Failed to load replies of comment {comment_id}").into());
        }
        Ok(self
            .replies
            .iter()
            .filter(|r| r.comment_id.as_str() == comment_id)
            .cloned()
            .collect())
    }
}
