//! Order analysis for GF(2) permutation generators.
//!
//! A good generator for a linear-permutation cryptosystem is an invertible
//! `n × n` matrix of maximal multiplicative order `2^n - 1`. This crate
//! measures orders and orbits, solves discrete logarithms by
//! baby-step/giant-step, searches for maximal-order matrices and sweeps
//! dimensions to compare the brute-force and squaring-based order signals.
//!
//! Every routine that samples takes the RNG explicitly; every loop that could
//! run forever carries a bound from its configuration.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod dlog;
mod order;
mod search;
mod sweep;

pub use config::{DiscreteLogConfig, SearchConfig, SweepConfig};
pub use dlog::{discrete_log, DiscreteLog};
pub use order::{order_by_repeated_multiply, order_by_squaring, orbit_length, orbit_length_of};
pub use search::{find_max_order_matrix, max_order, MaxOrderMatch};
pub use sweep::{order_statistics_sweep, SizeReport, SweepReport};
