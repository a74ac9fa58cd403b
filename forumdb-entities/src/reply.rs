use crate::{id::*, invalidation::*, time::*};

/// Placeholder that replaces the content of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id         : Id,
    pub comment_id : Id,
    pub username   : String,
    pub date       : Timestamp,
    pub content    : String,
    pub deleted_at : Option<Timestamp>,
}

impl Reply {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A reply as presented within the detail view of a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDetail {
    id: Id,
    username: String,
    date: Timestamp,
    content: String,
    deleted_at: Option<Timestamp>,
}

impl ReplyDetail {
    pub fn try_new(reply: Reply) -> Result<Self, DetailInvalidation> {
        let Reply {
            id,
            comment_id: _,
            username,
            date,
            content,
            deleted_at,
        } = reply;
        check_author(&id, &username)?;
        let content = mask_content(content, deleted_at.is_some(), DELETED_REPLY_CONTENT);
        Ok(Self {
            id,
            username,
            date,
            content,
            deleted_at,
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
}
