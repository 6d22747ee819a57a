//! Split fraction domain
//!
//! Produces evenly spaced split fractions over [0, 1] lazily. Samples are
//! laid out in percent first (the last one pinned to exactly 100%) and then
//! converted to fractions, so both endpoints are hit exactly.

use std::iter::FusedIterator;

/// Lazy, restartable producer of `resolution` split fractions in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDomain {
    resolution: usize,
    front: usize,
    back: usize,
}

impl SplitDomain {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            front: 0,
            back: resolution,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Rewind to the first sample
    pub fn restart(&mut self) {
        self.front = 0;
        self.back = self.resolution;
    }

    /// Split fraction of sample `index`, or `None` past the end
    pub fn split_at(&self, index: usize) -> Option<f64> {
        if index >= self.resolution {
            return None;
        }
        if self.resolution == 1 {
            return Some(0.0);
        }

        let last = self.resolution - 1;
        let percent = if index == last {
            100.0
        } else {
            index as f64 * (100.0 / last as f64)
        };
        Some(percent / 100.0)
    }
}

impl Iterator for SplitDomain {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let split = self.split_at(self.front);
        self.front += 1;
        split
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SplitDomain {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.split_at(self.back)
    }
}

impl ExactSizeIterator for SplitDomain {}

impl FusedIterator for SplitDomain {}
