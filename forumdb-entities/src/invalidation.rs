use thiserror::Error;

use crate::id::Id;

/// Reasons why a detail view could not be constructed from a stored record.
///
/// Titles and contents may be empty, only the identity of an
/// entry and the name of its author are required.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DetailInvalidation {
    #[error("Missing id")]
    Id,
    #[error("Missing username")]
    Username,
}

pub(crate) fn check_author(id: &Id, username: &str) -> Result<(), DetailInvalidation> {
    if !id.is_valid() {
        return Err(DetailInvalidation::Id);
    }
    if username.is_empty() {
        return Err(DetailInvalidation::Username);
    }
    Ok(())
}

pub(crate) fn mask_content(content: String, deleted: bool, placeholder: &str) -> String {
    if deleted {
        placeholder.to_owned()
    } else {
        content
    }
}
