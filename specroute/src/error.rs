//! Top-level error type.

use specroute_core::{BoxError, SpecError};
use specroute_std::DispatchError;
use thiserror::Error;

/// Top-level error type for all specroute operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A spec string could not be parsed.
    #[error("spec error: {0}")]
    Spec(#[from] SpecError),

    /// The dispatcher refused an item.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A sink failed.
    #[error(transparent)]
    Sink(BoxError),
}

// Sink errors arrive boxed; unwrap the dispatcher's own errors on the way.
impl From<BoxError> for Error {
    fn from(err: BoxError) -> Self {
        match err.downcast::<DispatchError>() {
            Ok(dispatch) => Error::Dispatch(*dispatch),
            Err(err) => Error::Sink(err),
        }
    }
}
