// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never loaded by another repository.

use crate::entities::*;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn get_thread_by_id(&self, id: &str) -> Result<Thread>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    // Ordered by date, oldest first.
    // Soft-deleted comments are included.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<Comment>>;
}

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    // Ordered by date, oldest first.
    // Soft-deleted replies are included.
    async fn get_replies_by_comment_id(&self, comment_id: &str) -> Result<Vec<Reply>>;

    // Replies are loaded one comment after another,
    // including the replies of deleted comments.
    async fn zip_comments_with_replies(
        &self,
        comments: Vec<Comment>,
    ) -> Result<Vec<(Comment, Vec<Reply>)>> {
        let mut results = Vec::with_capacity(comments.len());
        for comment in comments {
            let replies = self.get_replies_by_comment_id(comment.id.as_str()).await?;
            results.push((comment, replies));
        }
        Ok(results)
    }
}
