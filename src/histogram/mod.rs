//! Adaptive-bin streaming histograms
//!
//! This module provides a histogram that summarizes an unbounded stream of
//! values in a fixed number of bins, trading exactness for bounded memory.
//!
//! # Algorithms
//!
//! - [`StreamingHistogram`]: ordered adaptive bins with closest-pair merging
//!
//! # Example
//!
//! ```
//! use streamhist::histogram::StreamingHistogram;
//!
//! let mut hist = StreamingHistogram::new(8);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0] {
//!     hist.add(value);
//! }
//!
//! println!("median: {}", hist.median());
//! println!("p({}) = {}", 5.0, hist.percentile(5.0));
//! ```

mod streaming;

pub use streaming::{Bin, StreamingHistogram};
