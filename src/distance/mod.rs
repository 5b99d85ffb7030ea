//! Distance matrices over the complete point graph.
//!
//! Provides a dense Euclidean distance matrix and the seed lookup used by
//! the spanning-tree builder.

mod matrix;

pub use matrix::{closest_to_base, DistanceMatrix};
