//! In-memory vectors over [`Data`](crate::Data) storage.

mod primitive;
mod utf8;

pub use primitive::*;
pub use utf8::*;
