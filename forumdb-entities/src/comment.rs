use crate::{id::*, invalidation::*, reply::ReplyDetail, time::*};

/// Placeholder that replaces the content of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub thread_id  : Id,
    pub username   : String,
    pub date       : Timestamp,
    pub content    : String,
    pub deleted_at : Option<Timestamp>,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A comment together with all of its replies.
///
/// The replies are kept in the given order and are never filtered,
/// regardless of whether the comment itself has been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetail {
    id: Id,
    username: String,
    date: Timestamp,
    content: String,
    deleted_at: Option<Timestamp>,
    replies: Vec<ReplyDetail>,
}

impl CommentDetail {
    pub fn try_new(
        comment: Comment,
        replies: Vec<ReplyDetail>,
    ) -> Result<Self, DetailInvalidation> {
        let Comment {
            id,
            thread_id: _,
            username,
            date,
            content,
            deleted_at,
        } = comment;
        check_author(&id, &username)?;
        let content = mask_content(content, deleted_at.is_some(), DELETED_COMMENT_CONTENT);
        Ok(Self {
            id,
            username,
            date,
            content,
            deleted_at,
            replies,
        })
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn replies(&self) -> &[ReplyDetail] {
        &self.replies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builders::*,
        reply::{Reply, DELETED_REPLY_CONTENT},
    };

    fn reply(id: &str, deleted: bool) -> ReplyDetail {
        let mut build = Reply::build().id(id).content("a reply");
        if deleted {
            build = build.deleted_at(Timestamp::now());
        }
        ReplyDetail::try_new(build.finish()).unwrap()
    }

    #[test]
    fn mask_content_of_deleted_comment() {
        let comment = Comment::build()
            .id("comment-123")
            .content("a comment")
            .deleted_at(Timestamp::now())
            .finish();
        let detail = CommentDetail::try_new(comment, vec![]).unwrap();
        assert_eq!(detail.content(), DELETED_COMMENT_CONTENT);
        assert!(detail.is_deleted());
    }

    #[test]
    fn keep_replies_of_deleted_comment() {
        let comment = Comment::build()
            .content("a comment")
            .deleted_at(Timestamp::now())
            .finish();
        let replies = vec![reply("reply-1", false), reply("reply-2", true)];
        let detail = CommentDetail::try_new(comment, replies.clone()).unwrap();
        assert_eq!(detail.replies(), replies.as_slice());
        assert_eq!(detail.replies()[0].content(), "a reply");
        assert_eq!(detail.replies()[1].content(), DELETED_REPLY_CONTENT);
    }

    #[test]
    fn keep_order_of_replies() {
        let comment = Comment::build().content("a comment").finish();
        let replies = vec![reply("reply-b", false), reply("reply-a", false)];
        let detail = CommentDetail::try_new(comment, replies).unwrap();
        let ids: Vec<_> = detail.replies().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["reply-b", "reply-a"]);
    }

    #[test]
    fn reject_comment_without_id() {
        let comment = Comment::build().id("").finish();
        assert_eq!(
            CommentDetail::try_new(comment, vec![]),
            Err(DetailInvalidation::Id)
        );
    }

    #[test]
    fn keep_empty_content_of_live_comment() {
        let comment = Comment::build().content("").finish();
        let detail = CommentDetail::try_new(comment, vec![]).unwrap();
        assert_eq!(detail.content(), "");
        assert!(!detail.is_deleted());
    }

    #[test]
    fn deleted_comment_without_content_is_valid() {
        let comment = Comment::build()
            .content("")
            .deleted_at(Timestamp::now())
            .finish();
        assert!(CommentDetail::try_new(comment, vec![]).is_ok());
    }
}
