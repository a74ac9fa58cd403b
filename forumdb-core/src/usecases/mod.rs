mod error;
mod get_thread_detail;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, get_thread_detail::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
