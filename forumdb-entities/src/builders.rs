pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, reply_builder::*, thread_builder::*};

pub mod thread_builder {

    use super::*;
    use crate::{id::*, thread::*, time::*};

    #[derive(Debug)]
    pub struct ThreadBuild {
        thread: Thread,
    }

    impl ThreadBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.thread.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.thread.title = title.into();
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.thread.body = body.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.thread.date = date;
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.thread.username = username.into();
            self
        }
        pub fn finish(self) -> Thread {
            self.thread
        }
    }

    impl Builder for Thread {
        type Build = ThreadBuild;
        fn build() -> ThreadBuild {
            ThreadBuild {
                thread: Thread {
                    id: Id::random(),
                    title: "A thread".into(),
                    body: "A long thread".into(),
                    date: Timestamp::now(),
                    username: "foobar".into(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn thread_id(mut self, thread_id: &str) -> Self {
            self.comment.thread_id = thread_id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.comment.username = username.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.comment.date = date;
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn deleted_at(mut self, deleted_at: Timestamp) -> Self {
            self.comment.deleted_at = Some(deleted_at);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::random(),
                    thread_id: Id::random(),
                    username: "johndoe".into(),
                    date: Timestamp::now(),
                    content: "a comment".into(),
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod reply_builder {

    use super::*;
    use crate::{id::*, reply::*, time::*};

    #[derive(Debug)]
    pub struct ReplyBuild {
        reply: Reply,
    }

    impl ReplyBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.reply.id = id.into();
            self
        }
        pub fn comment_id(mut self, comment_id: &str) -> Self {
            self.reply.comment_id = comment_id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.reply.username = username.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.reply.date = date;
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.reply.content = content.into();
            self
        }
        pub fn deleted_at(mut self, deleted_at: Timestamp) -> Self {
            self.reply.deleted_at = Some(deleted_at);
            self
        }
        pub fn finish(self) -> Reply {
            self.reply
        }
    }

    impl Builder for Reply {
        type Build = ReplyBuild;
        fn build() -> ReplyBuild {
            ReplyBuild {
                reply: Reply {
                    id: Id::random(),
                    comment_id: Id::random(),
                    username: "janedoe".into(),
                    date: Timestamp::now(),
                    content: "a reply to the comment".into(),
                    deleted_at: None,
                },
            }
        }
    }
}
