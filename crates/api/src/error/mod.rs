//! Error handling for the gfcheck ecosystem

pub mod types;
pub mod validate;

pub use types::{Error, Result};

/// Extension trait for attaching context to fallible results
pub trait ResultExt<T>: Sized {
    /// Replace a parameter error's context, leaving other errors untouched
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
