//! Nearest-match search over candidate records.
//!
//! A candidate is any record `T`. The matcher sees it only through an ordered
//! list of [`Field`]s, each a named selector returning one comparable string.
//! A candidate's score is the minimum [`levenshtein::distance`] from the query
//! to any of its fields; the candidate with the lowest score wins.
//!
//! # Ordering
//!
//! Every comparison is strict `<`, so earlier input wins ties:
//! - across fields, the first field reaching the minimum is reported;
//! - across candidates, the first candidate reaching the minimum is returned;
//! - [`rank`] uses a stable sort, so equal scores keep input order.
//!
//! All candidates are scored on every call. There is no early exit on an
//! exact match and no caching across calls.

pub mod levenshtein;

use tracing::debug;

/// Extracts one searchable string from a candidate.
pub type FieldSelector<T> = fn(&T) -> &str;

/// A named field selector. The name is reported back in [`MatchResult`].
pub type Field<T> = (&'static str, FieldSelector<T>);

/// A candidate paired with its score against the query.
#[derive(Debug, PartialEq)]
pub struct MatchResult<'a, T> {
    /// The original record, unmodified.
    pub candidate: &'a T,
    /// Minimum edit distance across all fields.
    pub distance: usize,
    /// Name of the first field that achieved `distance`.
    pub field: &'static str,
}

impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchResult<'_, T> {}

/// Score a single candidate: minimum distance across `fields`.
///
/// Returns `None` only when `fields` is empty.
pub fn score<'a, T>(query: &str, candidate: &'a T, fields: &[Field<T>]) -> Option<MatchResult<'a, T>> {
    let mut best: Option<MatchResult<'a, T>> = None;
    for &(name, select) in fields {
        let dist = levenshtein::distance(query, select(candidate));
        if best.is_none_or(|b| dist < b.distance) {
            best = Some(MatchResult {
                candidate,
                distance: dist,
                field: name,
            });
        }
    }
    best
}

/// Find the best-scoring candidate together with its score.
///
/// Returns `None` if `candidates` or `fields` is empty.
pub fn best_match<'a, T>(
    query: &str,
    candidates: &'a [T],
    fields: &[Field<T>],
) -> Option<MatchResult<'a, T>> {
    let mut best: Option<MatchResult<'a, T>> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let Some(current) = score(query, candidate, fields) else {
            continue;
        };
        if best.is_none_or(|b| current.distance < b.distance) {
            debug!(index, distance = current.distance, field = current.field, "new best candidate");
            best = Some(current);
        }
    }
    best
}

/// Find the candidate closest to `query`.
///
/// The first candidate in input order achieving the minimum score wins.
/// Returns `None` if `candidates` is empty.
pub fn find_best_match<'a, T>(query: &str, candidates: &'a [T], fields: &[Field<T>]) -> Option<&'a T> {
    best_match(query, candidates, fields).map(|m| m.candidate)
}

/// Like [`best_match`], but only if the winning score is within `max_distance`.
pub fn closest_within<'a, T>(
    query: &str,
    candidates: &'a [T],
    fields: &[Field<T>],
    max_distance: usize,
) -> Option<MatchResult<'a, T>> {
    best_match(query, candidates, fields).filter(|m| m.distance <= max_distance)
}

/// Score every candidate and sort ascending by distance.
///
/// The sort is stable: equal scores stay in input order, so the first entry
/// is always the [`best_match`] result.
pub fn rank<'a, T>(query: &str, candidates: &'a [T], fields: &[Field<T>]) -> Vec<MatchResult<'a, T>> {
    let mut ranked: Vec<MatchResult<'a, T>> = candidates
        .iter()
        .filter_map(|c| score(query, c, fields))
        .collect();
    ranked.sort_by_key(|m| m.distance);
    ranked
}
