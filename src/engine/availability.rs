use crate::model::*;

// ── Availability Algorithm ────────────────────────────────────────

/// Maximal free sub-ranges of `window` on a resource, in order.
///
/// Expands the window day by day, drops committed days, then coalesces the
/// survivors into stays.
pub fn free_ranges_in(resource: &ResourceState, window: &StayRange) -> Vec<StayRange> {
    let committed = resource.committed_days();
    runs(window.days().filter(|d| !committed.contains(d)))
}

/// Committed days of a resource grouped into contiguous stays.
pub fn committed_ranges(resource: &ResourceState) -> Vec<StayRange> {
    runs(resource.committed_days().iter().copied())
}

/// Group ascending days into contiguous half-open ranges.
fn runs(days: impl Iterator<Item = Day>) -> Vec<StayRange> {
    let nights: Vec<StayRange> = days.filter_map(StayRange::single_night).collect();
    merge_adjacent(&nights)
}

/// Merge sorted overlapping/adjacent stays into disjoint stays.
pub fn merge_adjacent(sorted: &[StayRange]) -> Vec<StayRange> {
    let mut merged: Vec<StayRange> = Vec::new();
    for &stay in sorted {
        if let Some(last) = merged.last_mut()
            && stay.check_in() <= last.check_out() {
                *last = last.with_check_out(last.check_out().max(stay.check_out()));
                continue;
            }
        merged.push(stay);
    }
    merged
}
