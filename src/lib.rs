//! # Streamhist
//!
//! Bounded-memory streaming histograms for Rust.
//!
//! Streamhist maintains a fixed number of adaptive bins over an unbounded
//! stream of observations, approximating the full distribution without ever
//! storing the raw sequence. Distributional queries (percentile rank,
//! median, mean, mode) are answered from the compact bin summary alone.
//!
//! ## Features
//!
//! - **Bounded Memory**: a histogram never holds more than its configured
//!   number of bins, no matter how many values it has seen
//! - **Data-Adaptive Resolution**: densely observed regions keep fine bins
//!   while sparse regions coarsen
//! - **Single-Pass Ingestion**: each observation is folded in once, in
//!   O(bins) time, with no buffering
//! - **Total Queries**: estimators never fail, not even on an empty histogram
//!
//! ## Quick Start
//!
//! ```rust
//! use streamhist::prelude::*;
//!
//! let mut hist = StreamingHistogram::new(32);
//! for i in 1..=100 {
//!     hist.add(i as f64);
//! }
//!
//! // 100 distinct values compacted into 32 bins: queries are estimates
//! let rank = hist.percentile(50.0);
//! assert!(rank > 0.4 && rank < 0.6);
//! assert!((hist.mean() - 50.5).abs() < 1e-9);
//! ```
//!
//! ## Scope
//!
//! A histogram is a per-producer accumulator. It is intentionally not safe
//! for concurrent mutation and does not merge with other histograms; shard
//! across producers and aggregate at a higher level if you need either.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support. Disable for `no_std`
//!   environments (requires `alloc`).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod histogram;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::histogram::{Bin, StreamingHistogram};
}

pub use histogram::{Bin, StreamingHistogram};
