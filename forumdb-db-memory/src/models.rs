// NOTE:
// All dates are RFC 3339 strings, e.g. `2023-09-08T07:22:33.555Z`.
// The authors of threads, comments and replies are referenced
// by the id of their owner, like the foreign keys of the tables.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub id: String,
    pub thread: String,
    pub owner: String,
    pub date: String,
    pub content: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Reply {
    pub id: String,
    pub comment: String,
    pub owner: String,
    pub date: String,
    pub content: String,
    pub deleted_at: Option<String>,
}
