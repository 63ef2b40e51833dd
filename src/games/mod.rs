//! Game implementations.

pub mod mill;
