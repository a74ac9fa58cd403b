#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # forumdb-entities
//!
//! Reusable, agnostic domain entities for ForumDB.
//!
//! Besides the stored records of threads, comments and replies this crate
//! contains the detail views that are assembled from them. Soft-deleted
//! comments and replies are masked when their detail view is constructed.

pub mod comment;
pub mod id;
pub mod invalidation;
pub mod reply;
pub mod thread;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
