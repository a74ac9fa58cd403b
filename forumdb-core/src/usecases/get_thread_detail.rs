use super::prelude::*;
use futures::future::try_join_all;

/// How the replies of the comments are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyFetch {
    /// One comment after another.
    #[default]
    Sequential,
    /// All comments at once. The results are reassembled
    /// in the original order of the comments.
    Concurrent,
}

/// Assemble a thread with all of its comments and their replies.
///
/// Replies are loaded for every comment, even for soft-deleted ones.
/// The first failure aborts the whole operation, partial results
/// are never returned.
pub async fn get_thread_detail<R>(
    repo: &R,
    thread_id: &str,
    fetch: ReplyFetch,
) -> Result<ThreadDetail>
where
    R: ThreadRepository + CommentRepository + ReplyRepository,
{
    log::debug!("Loading details of thread {thread_id}");
    let thread = repo.get_thread_by_id(thread_id).await?;
    let comments = repo.get_comments_by_thread_id(thread_id).await?;
    log::debug!("Thread {thread_id} has {} comment(s)", comments.len());
    let comments_with_replies = match fetch {
        ReplyFetch::Sequential => repo.zip_comments_with_replies(comments).await?,
        ReplyFetch::Concurrent => join_comments_with_replies(repo, comments).await?,
    };
    let comments = comments_with_replies
        .into_iter()
        .map(|(comment, replies)| comment_detail(comment, replies))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ThreadDetail::try_new(thread, comments)?)
}

async fn join_comments_with_replies<R>(
    repo: &R,
    comments: Vec<Comment>,
) -> Result<Vec<(Comment, Vec<Reply>)>>
where
    R: ReplyRepository,
{
    let fetches = comments.iter().map(|comment| async move {
        let replies = repo.get_replies_by_comment_id(comment.id.as_str()).await?;
        Ok::<_, Error>((comment.id.clone(), replies))
    });
    // `try_join_all` yields the results in the order of
    // the given futures, not in the order of completion.
    let replies = try_join_all(fetches).await?;
    let results = comments
        .into_iter()
        .zip(replies)
        .map(|(comment, (comment_id, replies))| {
            debug_assert_eq!(comment.id, comment_id);
            (comment, replies)
        })
        .collect();
    Ok(results)
}

fn comment_detail(
    comment: Comment,
    replies: Vec<Reply>,
) -> std::result::Result<CommentDetail, DetailInvalidation> {
    let replies = replies
        .into_iter()
        .map(ReplyDetail::try_new)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    CommentDetail::try_new(comment, replies)
}
