//! Ranking for live search results.
//!
//! Results inside the target region are shown before anything outside it.
//! The provider's own ordering is otherwise trusted: there is no secondary
//! sort key.

use crate::domain::Place;
use crate::provider::Candidate;

/// Maximum number of results returned from a live search.
pub const MAX_RESULTS: usize = 8;

/// Rank candidates and strip their region tags.
///
/// In-region candidates come first; within each group the input order is
/// kept. At most [`MAX_RESULTS`] places are returned.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Place> {
    // `sort_by_key` is stable; `!in_region` puts `true` first.
    candidates.sort_by_key(|c| !c.in_region);

    candidates
        .into_iter()
        .take(MAX_RESULTS)
        .map(|c| c.place)
        .collect()
}
