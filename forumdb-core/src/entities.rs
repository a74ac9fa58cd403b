pub use forumdb_entities::{
    comment::*, id::*, invalidation::*, reply::*, thread::*, time::*,
};

#[cfg(test)]
pub use forumdb_entities::builders::*;
