//! Vectors: the row-addressable column views every Vellum encoding is built from.
//!
//! The [`Vector`] trait is the contract. [`PrimitiveVector`](vectors::PrimitiveVector) and
//! [`Utf8Vector`](vectors::Utf8Vector) are plain, unencoded implementations of it over shared
//! [`Data`] storage.

pub use data::*;
pub use iter::*;
pub use ptype::*;
pub use vector::*;

mod data;
mod iter;
mod ptype;
pub mod validity;
mod vector;
pub mod vectors;
