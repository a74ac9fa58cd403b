use super::*;
use forumdb_entities as e;

impl From<&e::reply::ReplyDetail> for ReplyDetail {
    fn from(from: &e::reply::ReplyDetail) -> Self {
        Self {
            id: from.id().to_string(),
            content: from.content().to_owned(),
            date: from.date().to_string(),
            username: from.username().to_owned(),
        }
    }
}

impl From<&e::comment::CommentDetail> for CommentDetail {
    fn from(from: &e::comment::CommentDetail) -> Self {
        Self {
            id: from.id().to_string(),
            username: from.username().to_owned(),
            date: from.date().to_string(),
            content: from.content().to_owned(),
            replies: from.replies().iter().map(Into::into).collect(),
        }
    }
}

impl From<&e::thread::ThreadDetail> for ThreadDetail {
    fn from(from: &e::thread::ThreadDetail) -> Self {
        Self {
            id: from.id().to_string(),
            title: from.title().to_owned(),
            body: from.body().to_owned(),
            date: from.date().to_string(),
            username: from.username().to_owned(),
            comments: from.comments().iter().map(Into::into).collect(),
        }
    }
}

impl From<e::thread::ThreadDetail> for ThreadDetail {
    fn from(from: e::thread::ThreadDetail) -> Self {
        Self::from(&from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forumdb_entities::{
        builders::*,
        comment::{Comment, DELETED_COMMENT_CONTENT},
        reply::Reply,
        thread::Thread,
    };
    use serde_json::json;

    fn ts(s: &str) -> e::time::Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn serialize_thread_detail() {
        let reply = Reply::build()
            .id("reply-456")
            .username("janedoe")
            .date(ts("2023-09-08T08:00:00Z"))
            .content("a reply to the comment")
            .finish();
        let comment = Comment::build()
            .id("comment-123")
            .username("johndoe")
            .date(ts("2023-09-08T07:22:33Z"))
            .content("a comment")
            .deleted_at(ts("2023-09-08T08:00:00Z"))
            .finish();
        let thread = Thread::build()
            .id("thread-123")
            .title("A thread")
            .body("A long thread")
            .date(ts("2023-09-22T00:00:00Z"))
            .username("foobar")
            .finish();
        let replies = vec![e::reply::ReplyDetail::try_new(reply).unwrap()];
        let comments = vec![e::comment::CommentDetail::try_new(comment, replies).unwrap()];
        let detail = e::thread::ThreadDetail::try_new(thread, comments).unwrap();

        let json = serde_json::to_value(ThreadDetail::from(detail)).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "thread-123",
                "title": "A thread",
                "body": "A long thread",
                "date": "2023-09-22T00:00:00Z",
                "username": "foobar",
                "comments": [{
                    "id": "comment-123",
                    "username": "johndoe",
                    "date": "2023-09-08T07:22:33Z",
                    "content": DELETED_COMMENT_CONTENT,
                    "replies": [{
                        "id": "reply-456",
                        "content": "a reply to the comment",
                        "date": "2023-09-08T08:00:00Z",
                        "username": "janedoe",
                    }],
                }],
            })
        );
    }
}
