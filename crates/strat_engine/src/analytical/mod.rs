//! Closed-form pricing for European options.
//!
//! Only the Black-Scholes model is provided; the strategy engine prices
//! every non-stock leg through it.

pub mod black_scholes;

pub use black_scholes::BlackScholes;
