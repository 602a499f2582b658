use crate::model::Run;

/// Sorts the runs from the oldest to the most recent one.
///
/// Runs with the same date keep their relative order.
pub fn sort_by_date(runs: &mut [Run]) {
    runs.sort_by(|a, b| a.date.total_cmp(&b.date));
}
