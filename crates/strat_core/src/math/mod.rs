//! Mathematical functions for the strategy engine.
//!
//! Currently limited to standard normal distribution functions; the
//! engine is entirely closed-form and needs no solvers.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
