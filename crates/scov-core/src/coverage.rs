//! Coverage calculation
//!
//! Coverage is the QA scenario count as a percentage of the source scenario
//! count. The result is rounded half away from zero and is not clamped, so a
//! QA list longer than the source list reports more than 100.

use crate::scenario::Scenario;

/// Coverage of `qa` over `source` as an integer percentage
///
/// Returns 0 when `source` is empty.
#[inline]
#[must_use]
pub fn calculate_coverage(source: &[Scenario], qa: &[Scenario]) -> u64 {
    coverage_ratio(source.len(), qa.len())
}

/// Count-based form of [`calculate_coverage`]
#[must_use]
pub fn coverage_ratio(source_len: usize, qa_len: usize) -> u64 {
    if source_len == 0 {
        return 0;
    }
    let source = source_len as u128;
    let qa = qa_len as u128;
    // round(100 * qa / source) with halves rounded up, in exact integers
    let rounded = (200 * qa + source) / (2 * source);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}
