//! Command implementations.

pub mod batch;
pub mod normalize;
