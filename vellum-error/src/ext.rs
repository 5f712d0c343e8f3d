use crate::{ErrString, VellumResult};

/// Extension trait for [`VellumResult`].
pub trait ResultExt<T>: private::Sealed {
    /// Attach a context message to the error, if any. The message is only built on error.
    fn with_context<M: Into<ErrString>, F: FnOnce() -> M>(self, f: F) -> VellumResult<T>;
}

mod private {
    use crate::VellumResult;

    pub trait Sealed {}

    impl<T> Sealed for VellumResult<T> {}
}

impl<T> ResultExt<T> for VellumResult<T> {
    fn with_context<M: Into<ErrString>, F: FnOnce() -> M>(self, f: F) -> VellumResult<T> {
        self.map_err(|err| err.with_context(f()))
    }
}
