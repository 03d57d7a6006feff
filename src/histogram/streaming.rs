//! Adaptive-bin streaming histogram
//!
//! Maintains an ordered sequence of value-range bins over an unbounded
//! stream. When a new value does not fit an existing bin, a fresh singleton
//! bin is spliced in and the two adjacent bins spanning the smallest
//! combined range are fused, so the bin count never exceeds the configured
//! capacity. Loosely based on the streaming decision-tree histograms of
//! Ben-Haim & Tom-Tov (JMLR 11, 2010).

use crate::traits::{DistributionSketch, Sketch};
use core::fmt;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One interval of observed values
///
/// A bin records the bounds of the interval it summarizes together with the
/// exact count and sum of the observations folded into it. A freshly created
/// bin covers a single value (`min == max`); merges widen the interval, so
/// an old bin's bounds may span values that were never observed at its
/// extremes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bin {
    /// Lower bound of the interval
    pub min: f64,
    /// Upper bound of the interval
    pub max: f64,
    /// Number of observations folded into this bin
    pub count: u64,
    /// Exact sum of the observations folded into this bin
    pub sum: f64,
}

impl Bin {
    /// Create a bin covering exactly one observation
    pub fn singleton(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            count: 1,
            sum: value,
        }
    }

    /// Whether `value` falls inside this bin's interval, bounds inclusive
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Width of the interval; zero for a singleton bin
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Fold the right-hand neighbor in, extending `max` to cover both
    fn absorb(&mut self, upper: &Bin) {
        self.max = upper.max;
        self.count += upper.count;
        self.sum += upper.sum;
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in [{:.6}, {:.6}] totaling {:.6}",
            self.count, self.min, self.max, self.sum
        )
    }
}

/// Bounded-memory streaming histogram with adaptive bins
///
/// Ingests one value at a time and keeps at most a fixed number of bins,
/// ordered by value range and never overlapping. Overflow is resolved by
/// fusing the adjacent pair of bins whose combined range is smallest, so
/// resolution follows the data: tight clusters keep narrow bins, outlier
/// regions coarsen.
///
/// # Bin Capacity
///
/// The capacity is fixed at construction and bounds both memory use and the
/// per-insertion cost (one binary search plus one linear scan). Accuracy of
/// the estimators grows with capacity; for most workloads a few tens of
/// bins are plenty and anything under 100 keeps insertions cheap.
///
/// # Thread Safety
///
/// A histogram is a plain value with no interior mutability: `Send` and
/// `Sync` as usual, but mutation requires `&mut self`. It is meant as a
/// per-producer accumulator: shard across producers rather than sharing
/// one histogram behind a lock.
///
/// # Example
///
/// ```
/// use streamhist::histogram::StreamingHistogram;
///
/// let mut hist = StreamingHistogram::new(16);
/// for v in [12.0, 8.0, 21.0, 8.0, 30.0] {
///     hist.add(v);
/// }
///
/// assert_eq!(hist.count(), 5);
/// assert_eq!(hist.percentile(30.0), 1.0); // at the observed maximum
/// assert!((hist.mean() - 15.8).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct StreamingHistogram {
    /// Target bin capacity, fixed at construction
    size: usize,
    /// Bins ordered ascending by value range; adjacent bins never overlap
    bins: Vec<Bin>,
    /// Total number of observations added
    count: u64,
    /// Exact sum of every observation added
    sum: f64,
}

impl StreamingHistogram {
    /// Create an empty histogram that will hold at most `size` bins
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "bin capacity must be positive");

        Self {
            size,
            bins: Vec::with_capacity(size + 1),
            count: 0,
            sum: 0.0,
        }
    }

    /// Get the configured bin capacity
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of observations added
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Exact sum of every observation added
    ///
    /// Tracked independently of the per-bin sums, which partition the same
    /// observations and can be cross-checked against it.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// The current bins, ordered ascending by value range
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Check if no observations have been added
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Smallest value observed, `None` when empty
    pub fn min(&self) -> Option<f64> {
        self.bins.first().map(|bin| bin.min)
    }

    /// Largest value observed, `None` when empty
    pub fn max(&self) -> Option<f64> {
        self.bins.last().map(|bin| bin.max)
    }

    /// Add a value to the histogram
    ///
    /// Locates the bin covering `value` by binary search and folds the value
    /// in; when no bin covers it, a singleton bin is spliced in at the
    /// ordered position and, if the capacity is now exceeded, the closest
    /// adjacent pair is merged. NaN values are ignored to keep the bin
    /// ordering well defined.
    ///
    /// # Panics
    ///
    /// Panics if the histogram has already absorbed `u64::MAX` observations.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.count == u64::MAX {
            panic!("observation count overflow in StreamingHistogram");
        }
        self.count += 1;
        self.sum += value;

        let index = self.bins.partition_point(|bin| bin.max < value);
        if let Some(bin) = self.bins.get_mut(index) {
            if bin.contains(value) {
                bin.count += 1;
                bin.sum += value;
                return;
            }
        }

        self.bins.insert(index, Bin::singleton(value));
        if self.bins.len() > self.size {
            let pair = self.closest_pair();
            self.merge_pair(pair);
        }
    }

    /// Index of the lower bin of the adjacent pair spanning the smallest
    /// combined range. The scan runs from the top of the value range down,
    /// so on ties the highest-valued pair wins.
    fn closest_pair(&self) -> usize {
        debug_assert!(self.bins.len() >= 2);

        let mut best_index = self.bins.len() - 2;
        let mut best_span = f64::INFINITY;
        for index in (0..self.bins.len() - 1).rev() {
            let span = self.bins[index + 1].max - self.bins[index].min;
            if span < best_span {
                best_span = span;
                best_index = index;
            }
        }
        best_index
    }

    /// Fuse bins `index` and `index + 1`; the lower bin absorbs the upper
    fn merge_pair(&mut self, index: usize) {
        let upper = self.bins.remove(index + 1);
        self.bins[index].absorb(&upper);
    }

    /// Fraction of observations at or below `value`, in [0.0, 1.0]
    ///
    /// Sums the counts of every bin entirely below `value` plus a linear
    /// estimate of the containing bin's share (half of it when that bin is a
    /// single point). Values at or beyond the observed extremes pin the
    /// result to exactly `0.0` or `1.0`; an empty histogram reports `0.0`.
    pub fn percentile(&self, value: f64) -> f64 {
        if self.count == 0 || self.bins.is_empty() {
            return 0.0;
        }
        // >= max before <= min, so a single-point histogram reports 1.0 at
        // its value (CDF convention: P(X <= x) = 1 when x >= max).
        if value >= self.bins[self.bins.len() - 1].max {
            return 1.0;
        }
        if value <= self.bins[0].min {
            return 0.0;
        }

        let mut position = 0.0;
        for bin in &self.bins {
            if bin.count == 0 {
                continue;
            }
            if bin.max < value {
                position += bin.count as f64;
            } else if bin.contains(value) {
                let fraction = if bin.width() > 0.0 {
                    (value - bin.min) / bin.width()
                } else {
                    0.5
                };
                position += bin.count as f64 * fraction;
                break;
            }
        }
        position / self.count as f64
    }

    /// Estimated median of the distribution
    ///
    /// Walks bins from the top of the value range accumulating counts until
    /// the midpoint rank (`count / 2`) falls inside a bin, then interpolates
    /// within that bin's range. A bin holding a single observation yields
    /// its upper bound directly. Returns `0.0` on an empty histogram.
    pub fn median(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let midpoint = self.count / 2;
        let mut seen = 0u64;
        for bin in self.bins.iter().rev() {
            seen += bin.count;
            if seen >= midpoint {
                if bin.count > 1 {
                    let overshoot = (seen - midpoint) as f64 / (bin.count - 1) as f64;
                    return bin.max - (1.0 - overshoot) * bin.width();
                }
                return bin.max;
            }
        }
        0.0
    }

    /// Arithmetic mean of all observations, `0.0` when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Copy of the most populated bin
    ///
    /// This approximates the mode by bucket, not by exact value: it names
    /// the heaviest region of the distribution. Ties keep the first bin
    /// reaching the maximum count in ascending range order; an empty
    /// histogram yields a zero-valued bin.
    pub fn mode(&self) -> Bin {
        let mut mode = Bin::default();
        for bin in &self.bins {
            if bin.count > mode.count {
                mode = bin.clone();
            }
        }
        mode
    }
}

impl fmt::Display for StreamingHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} bin histogram summarizing {} observations",
            self.bins.len(),
            self.count
        )?;
        writeln!(f, "mean: {:.6}  median: {:.6}", self.mean(), self.median())?;
        writeln!(f, "mode: {}", self.mode())?;
        writeln!(f, "bins:")?;
        for (index, bin) in self.bins.iter().enumerate() {
            writeln!(f, "  {}: {}", index, bin)?;
        }
        Ok(())
    }
}

impl Sketch for StreamingHistogram {
    type Item = f64;

    fn update(&mut self, item: &f64) {
        self.add(*item);
    }

    fn clear(&mut self) {
        *self = Self::new(self.size);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.bins.capacity() * core::mem::size_of::<Bin>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl DistributionSketch for StreamingHistogram {
    type Value = f64;

    fn add(&mut self, value: f64) {
        StreamingHistogram::add(self, value);
    }

    fn rank(&self, value: &f64) -> f64 {
        self.percentile(*value)
    }

    fn mean(&self) -> f64 {
        StreamingHistogram::mean(self)
    }

    fn median(&self) -> f64 {
        StreamingHistogram::median(self)
    }

    fn min(&self) -> Option<f64> {
        StreamingHistogram::min(self)
    }

    fn max(&self) -> Option<f64> {
        StreamingHistogram::max(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
