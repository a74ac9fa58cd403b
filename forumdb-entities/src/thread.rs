use crate::{comment::CommentDetail, id::*, invalidation::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id       : Id,
    pub title    : String,
    pub body     : String,
    pub date     : Timestamp,
    pub username : String,
}

/// A thread with all of its comments and their replies.
///
/// Threads cannot be deleted, so there is nothing to mask here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDetail {
    id: Id,
    title: String,
    body: String,
    date: Timestamp,
    username: String,
    comments: Vec<CommentDetail>,
}

impl ThreadDetail {
    pub fn try_new(
        thread: Thread,
        comments: Vec<CommentDetail>,
    ) -> Result<Self, DetailInvalidation> {
        let Thread {
            id,
            title,
            body,
            date,
            username,
        } = thread;
        check_author(&id, &username)?;
        Ok(Self {
            id,
            title,
            body,
            date,
            username,
            comments,
        })
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[CommentDetail] {
        &self.comments
    }
}
