#![deny(missing_docs)]

//! Backing storage for Vellum vectors.
//!
//! A [`Buffer`] is a window over storage that may be shared by many handles. Cloning a buffer
//! is cheap and aliases the same elements, so a write through one handle is observed by every
//! other handle over the same storage. Slicing narrows the window without copying, while
//! [`Buffer::relocate`] copies the window into storage that nothing else references.

pub use buffer::*;

mod buffer;
mod macros;
