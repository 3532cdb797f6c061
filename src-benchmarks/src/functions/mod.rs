//! Benchmark function implementations
//!
//! All functions map a binary vector (`&[u8]` of 0/1 entries) to a scalar
//! fitness that is maximized. Length and binarity checks live on
//! `BenchmarkProblem::evaluate`; the raw functions assume valid input.

pub mod monotone;
pub mod rugged;

pub use monotone::*;
pub use rugged::*;
