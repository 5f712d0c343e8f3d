//! Dictionary encoding: a column stored as a vector of small integer keys that index into a
//! vector holding each distinct value.
//!
//! [`DictionaryView`] presents the pair as a single [`Vector`](vellum_array::Vector) over the
//! logical values, so it can stand anywhere a plain vector can, including as the dictionary of
//! another view.

pub use array::*;
pub use key::*;

mod array;
mod key;
mod ops;
mod vector;
