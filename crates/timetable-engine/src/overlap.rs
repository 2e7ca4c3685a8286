//! Pack same-day intervals into side-by-side columns.
//!
//! Per day, intervals are visited by `(start, end)` ascending and dropped into
//! the first column whose last occupant has already ended (`end <= start`),
//! opening a new column when none is free. This greedy interval-graph colouring
//! uses exactly as many columns as the day's peak concurrency.
//!
//! Every interval also gets a `cluster_span`: the number of columns used by
//! its overlap cluster, i.e. the maximal group of intervals linked by a chain
//! of pairwise overlaps. Two unrelated meetings on a busy day each report a
//! span of 1 even if another cluster that day needs three columns.

use serde::Serialize;

use crate::interval::Interval;

/// An [`Interval`] with its column assignment.
///
/// Invariant: `column < cluster_span`, and overlapping same-day intervals
/// never share a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedInterval<P> {
    pub interval: Interval<P>,
    /// 0-based column within the day.
    pub column: usize,
    /// Columns used by this interval's overlap cluster.
    pub cluster_span: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    column: usize,
    cluster_span: usize,
}

/// Assign a column and cluster span to every interval.
///
/// Output order matches input order; only the column assignment depends on
/// the sorted visiting order. Ties on start are broken by the earlier end,
/// then by input position, so the result is reproducible.
pub fn resolve_overlaps<P>(intervals: Vec<Interval<P>>) -> Vec<PlacedInterval<P>> {
    let mut slots = vec![Slot::default(); intervals.len()];

    let mut by_day: [Vec<usize>; 7] = Default::default();
    for (idx, interval) in intervals.iter().enumerate() {
        by_day[usize::from(interval.day_index())].push(idx);
    }

    for day in by_day.iter_mut().filter(|day| !day.is_empty()) {
        // Stable sort keeps input order among identical ranges.
        day.sort_by_key(|&idx| (intervals[idx].start_minute(), intervals[idx].end_minute()));
        assign_columns(&intervals, day, &mut slots);
        assign_cluster_spans(&intervals, day, &mut slots);
    }

    intervals
        .into_iter()
        .zip(slots)
        .map(|(interval, slot)| PlacedInterval {
            interval,
            column: slot.column,
            cluster_span: slot.cluster_span,
        })
        .collect()
}

/// First-fit over columns, tracking each column's most recent end.
fn assign_columns<P>(intervals: &[Interval<P>], order: &[usize], slots: &mut [Slot]) {
    let mut column_ends: Vec<u32> = Vec::new();

    for &idx in order {
        let interval = &intervals[idx];
        let free = column_ends
            .iter()
            .position(|&end| end <= interval.start_minute());

        let column = match free {
            Some(column) => {
                column_ends[column] = interval.end_minute();
                column
            }
            None => {
                column_ends.push(interval.end_minute());
                column_ends.len() - 1
            }
        };
        slots[idx].column = column;
    }
}

/// Sweep the sorted day, cutting a cluster wherever the next start is at or
/// past everything seen so far.
fn assign_cluster_spans<P>(intervals: &[Interval<P>], order: &[usize], slots: &mut [Slot]) {
    let mut cluster_start = 0;
    let mut cluster_end = 0;

    for (pos, &idx) in order.iter().enumerate() {
        let interval = &intervals[idx];
        if pos > cluster_start && interval.start_minute() >= cluster_end {
            close_cluster(&order[cluster_start..pos], slots);
            cluster_start = pos;
        }
        cluster_end = if pos == cluster_start {
            interval.end_minute()
        } else {
            cluster_end.max(interval.end_minute())
        };
    }

    close_cluster(&order[cluster_start..], slots);
}

fn close_cluster(members: &[usize], slots: &mut [Slot]) {
    // Columns inside a cluster are contiguous from 0: every earlier column is
    // free when a cluster opens, and column k is only taken while 0..k are
    // busy with members of the same cluster.
    let span = members
        .iter()
        .map(|&idx| slots[idx].column + 1)
        .max()
        .unwrap_or(0);
    for &idx in members {
        slots[idx].cluster_span = span;
    }
}

/// Distinct columns used per weekday, Monday first.
pub fn columns_per_day<P>(placed: &[PlacedInterval<P>]) -> [usize; 7] {
    let mut columns = [0; 7];
    for p in placed {
        let day = usize::from(p.interval.day_index());
        columns[day] = columns[day].max(p.column + 1);
    }
    columns
}
