//! Detect overlapping meetings in a projected week.
//!
//! Pairwise comparison of same-day intervals. Adjacent meetings (one ends
//! exactly when the next starts) are NOT conflicts.

use serde::Serialize;

use crate::interval::Interval;

/// Two intervals that share time on the same day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict<P> {
    pub first: Interval<P>,
    pub second: Interval<P>,
    pub overlap_minutes: u32,
}

/// Find every pair of overlapping intervals.
///
/// Two intervals overlap when they fall on the same day and
/// `a.start < b.end && b.start < a.end`. The overlap length is
/// `min(a.end, b.end) - max(a.start, b.start)`. Pairs are reported in input
/// order (`first` precedes `second` in `intervals`).
pub fn find_conflicts<P: Clone>(intervals: &[Interval<P>]) -> Vec<Conflict<P>> {
    let mut conflicts = Vec::new();

    for (i, a) in intervals.iter().enumerate() {
        for b in &intervals[i + 1..] {
            if a.overlaps(b) {
                let overlap_start = a.start_minute().max(b.start_minute());
                let overlap_end = a.end_minute().min(b.end_minute());

                conflicts.push(Conflict {
                    first: a.clone(),
                    second: b.clone(),
                    overlap_minutes: overlap_end - overlap_start,
                });
            }
        }
    }

    conflicts
}
