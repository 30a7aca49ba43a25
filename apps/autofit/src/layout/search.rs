//! Binary search over integer sizes with a conservative tie-break.
//!
//! # Tie-break
//! On a fitting probe the search records the lower bound *before* it moves past
//! `mid`; on an overflowing probe it records the new upper bound. With a
//! monotone predicate this still lands on the largest fitting size, except that
//! the raw loop reports `start - 1` when nothing fits. That value is clamped back
//! to `start`: callers treat `start` as the floor and never try smaller sizes.

use std::cmp::Ordering;

use tracing::{trace, warn};

/// Result of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub size: u32,
    /// Number of predicate evaluations.
    pub probes: u32,
}

/// Searches `[start, end_exclusive - 1]` for the largest size the comparator
/// accepts. `compare` returns `Less` when the size fits, `Greater` when it is
/// too big and `Equal` for an exact match (returned immediately).
///
/// An empty range (`end_exclusive <= start`, i.e. `min > max`) is a caller
/// precondition violation and returns `start` without probing.
pub fn binary_search<F>(start: u32, end_exclusive: u32, mut compare: F) -> SearchOutcome
where
    F: FnMut(u32) -> Ordering,
{
    if end_exclusive <= start {
        warn!(start, end_exclusive, "empty size range; returning start");
        return SearchOutcome {
            size: start,
            probes: 0,
        };
    }

    let mut probes = 0u32;
    let mut last_best = i64::from(start);
    let mut lo = i64::from(start);
    let mut hi = i64::from(end_exclusive) - 1;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        probes += 1;
        // `mid` lies within [start, end_exclusive - 1], so it fits in u32.
        match compare(mid as u32) {
            Ordering::Less => {
                last_best = lo;
                lo = mid + 1;
            }
            Ordering::Greater => {
                hi = mid - 1;
                last_best = hi;
            }
            Ordering::Equal => {
                trace!(size = mid, probes, "exact match");
                return SearchOutcome {
                    size: mid as u32,
                    probes,
                };
            }
        }
    }

    let floor = i64::from(start);
    let ceiling = i64::from(end_exclusive) - 1;
    if last_best < floor {
        warn!(min_size = start, "no candidate size fits; using the minimum");
    }

    SearchOutcome {
        size: last_best.clamp(floor, ceiling) as u32,
        probes,
    }
}
