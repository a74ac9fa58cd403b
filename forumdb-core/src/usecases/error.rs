use crate::{entities::DetailInvalidation, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid detail: {0}")]
    Invalid(#[from] DetailInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
