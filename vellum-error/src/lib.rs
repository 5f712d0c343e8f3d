#![deny(missing_docs)]

//! Error handling for Vellum.
//!
//! Every fallible operation in the workspace returns a [`VellumResult`]. The `vellum_err!`,
//! `vellum_bail!` and `vellum_panic!` macros are the preferred way to construct errors so that a
//! backtrace is captured at the point of failure.

mod ext;

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

pub use ext::*;

/// A string that can be used as an error message.
#[derive(Debug)]
pub struct ErrString(Cow<'static, str>);

#[allow(clippy::fallible_impl_from, clippy::panic)]
impl<T> From<T> for ErrString
where
    T: Into<Cow<'static, str>>,
{
    fn from(msg: T) -> Self {
        if std::env::var("VELLUM_PANIC_ON_ERR").as_deref().unwrap_or("") == "1" {
            panic!("{}\nBacktrace:\n{}", msg.into(), Backtrace::capture());
        } else {
            Self(msg.into())
        }
    }
}

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The top-level error type for Vellum.
#[derive(thiserror::Error)]
#[non_exhaustive]
pub enum VellumError {
    /// A row or key index fell outside the half-open range `[start, stop)`.
    #[error("index {0} out of bounds from {1} to {2}\nBacktrace:\n{3}")]
    OutOfBounds(usize, usize, usize, Box<Backtrace>),
    /// An argument did not satisfy the preconditions of the operation.
    #[error("{0}\nBacktrace:\n{1}")]
    InvalidArgument(ErrString, Box<Backtrace>),
    /// A value of one type was supplied where another was expected.
    #[error("expected type: {0} but instead got {1}\nBacktrace:\n{2}")]
    MismatchedTypes(ErrString, ErrString, Box<Backtrace>),
    /// An error wrapped with additional context.
    #[error("{0}: {1}")]
    Context(ErrString, Box<VellumError>),
}

impl VellumError {
    /// Wrap this error with an additional message describing where it occurred.
    pub fn with_context<T: Into<ErrString>>(self, msg: T) -> Self {
        VellumError::Context(msg.into(), Box::new(self))
    }

    /// Walk through any [`VellumError::Context`] layers and return the innermost error.
    pub fn root_cause(&self) -> &VellumError {
        match self {
            VellumError::Context(_, inner) => inner.root_cause(),
            other => other,
        }
    }
}

impl Debug for VellumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A type alias for results that return a [`VellumError`] as the error type.
pub type VellumResult<T> = Result<T, VellumError>;

/// A trait for expecting a [`VellumResult`] or an [`Option`] to hold a value.
pub trait VellumExpect {
    /// The type of the value being expected.
    type Output;

    /// Returns the value of the result if it is Ok, otherwise panics with the error.
    /// Should be called only in contexts where the error condition represents a bug (programmer error).
    fn vellum_expect(self, msg: &str) -> Self::Output;
}

impl<T, E> VellumExpect for Result<T, E>
where
    E: Into<VellumError>,
{
    type Output = T;

    #[inline(always)]
    #[allow(clippy::panic)]
    fn vellum_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|err| {
            let err: VellumError = err.into();
            vellum_panic!(err.with_context(msg.to_string()))
        })
    }
}

impl<T> VellumExpect for Option<T> {
    type Output = T;

    #[inline(always)]
    #[allow(clippy::panic)]
    fn vellum_expect(self, msg: &str) -> Self::Output {
        self.unwrap_or_else(|| {
            let err =
                VellumError::InvalidArgument(msg.to_string().into(), Box::new(Backtrace::capture()));
            vellum_panic!(err)
        })
    }
}

/// A convenient macro for creating a [`VellumError`].
#[macro_export]
macro_rules! vellum_err {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::VellumError::OutOfBounds($idx, $start, $stop, Box::new(Backtrace::capture()))
        )
    }};
    (MismatchedTypes: $expected:literal, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::VellumError::MismatchedTypes($expected.into(), $actual.to_string().into(), Box::new(Backtrace::capture()))
        )
    }};
    (MismatchedTypes: $expected:expr, $actual:expr) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::VellumError::MismatchedTypes($expected.to_string().into(), $actual.to_string().into(), Box::new(Backtrace::capture()))
        )
    }};
    (Context: $msg:literal, $err:expr) => {{
        $crate::__private::must_use(
            $crate::VellumError::Context($msg.into(), Box::new($err))
        )
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        use std::backtrace::Backtrace;
        $crate::__private::must_use(
            $crate::VellumError::InvalidArgument(format!($fmt, $($arg),*).into(), Box::new(Backtrace::capture()))
        )
    }};
}

/// A convenient macro for returning a [`VellumError`] from the enclosing function.
#[macro_export]
macro_rules! vellum_bail {
    ($($tt:tt)+) => {
        return Err($crate::vellum_err!($($tt)+))
    };
}

/// A convenient macro for panicking with a [`VellumError`] in the presence of a programmer error
/// (e.g., an invariant has been violated).
#[macro_export]
macro_rules! vellum_panic {
    (OutOfBounds: $idx:expr, $start:expr, $stop:expr) => {{
        $crate::vellum_panic!($crate::vellum_err!(OutOfBounds: $idx, $start, $stop))
    }};
    (MismatchedTypes: $expected:expr, $actual:expr) => {{
        $crate::vellum_panic!($crate::vellum_err!(MismatchedTypes: $expected, $actual))
    }};
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::vellum_panic!($crate::vellum_err!($fmt, $($arg),*))
    };
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let err: $crate::VellumError = $err;
        panic!("{}", err.with_context(format!($fmt, $($arg),*)))
    }};
    ($err:expr) => {{
        let err: $crate::VellumError = $err;
        panic!("{}", err)
    }};
}

#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub const fn must_use(error: crate::VellumError) -> crate::VellumError {
        error
    }
}
