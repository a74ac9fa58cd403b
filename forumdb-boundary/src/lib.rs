use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ThreadDetail {
    pub id       : String,
    pub title    : String,
    pub body     : String,
    pub date     : String,
    pub username : String,
    pub comments : Vec<CommentDetail>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CommentDetail {
    pub id       : String,
    pub username : String,
    pub date     : String,
    pub content  : String,
    pub replies  : Vec<ReplyDetail>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReplyDetail {
    pub id       : String,
    pub content  : String,
    pub date     : String,
    pub username : String,
}
