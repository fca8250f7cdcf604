//! Prioritized search over a slice of user records.
//!
//! The engine is a pure function: it reads the supplied records and the
//! criteria, allocates call-local state only, and never mutates the
//! directory. Concurrent calls need no coordination.

use std::collections::HashSet;

use crate::types::{MatchPriority, SearchCriteria, SearchError, SearchHit, UserRecord};

#[cfg(test)]
mod tests;

/// Search `records` against the provided `criteria`.
///
/// Records are evaluated in slice order. An exact `id` match tags the record
/// at [`MatchPriority::Id`] and skips every other criterion for that record.
/// Otherwise `name`, `age`, and `occupation` are evaluated independently, so
/// one record can produce several hits at different priorities. A non-numeric
/// `age` value abandons both the age and occupation checks for the record
/// being evaluated and moves on; it is never a call-level error.
///
/// With no criteria provided at all, the entire dataset comes back at
/// [`MatchPriority::All`] in its original order.
///
/// Hits are deduplicated by `(record id, priority)` and stably sorted by
/// ascending priority, so ties keep their encounter order. An empty result
/// is reported as [`SearchError::NotFound`] rather than an empty list.
pub fn search(
    records: &[UserRecord],
    criteria: &SearchCriteria,
) -> Result<Vec<SearchHit>, SearchError> {
    let id = criteria.id();
    let name = criteria.name().map(|s| s.to_lowercase());
    let age = criteria.age();
    let occupation = criteria.occupation().map(|s| s.to_lowercase());

    let mut hits: Vec<SearchHit> = Vec::new();
    let mut seen: HashSet<(&str, MatchPriority)> = HashSet::new();

    if criteria.is_empty() {
        for user in records {
            push_hit(&mut hits, &mut seen, user, MatchPriority::All);
        }
        // An empty dataset yields an empty list here, not NotFound.
        return Ok(hits);
    }

    for user in records {
        if let Some(id) = id {
            if user.id == id {
                push_hit(&mut hits, &mut seen, user, MatchPriority::Id);
                // An id match short-circuits every other criterion.
                continue;
            }
        }

        if let Some(name) = &name {
            if user.name.to_lowercase().contains(name.as_str()) {
                push_hit(&mut hits, &mut seen, user, MatchPriority::Name);
            }
        }

        if let Some(age) = age {
            match age.parse::<i64>() {
                Ok(wanted) => {
                    // abs_diff stays overflow-free for extreme i64 values.
                    if user.age.abs_diff(wanted) <= 1 {
                        push_hit(&mut hits, &mut seen, user, MatchPriority::Age);
                    }
                }
                // A malformed age also suppresses the occupation check
                // for this record.
                Err(_) => continue,
            }
        }

        if let Some(occupation) = &occupation {
            if user.occupation.to_lowercase().contains(occupation.as_str()) {
                push_hit(&mut hits, &mut seen, user, MatchPriority::Occupation);
            }
        }
    }

    if hits.is_empty() {
        return Err(SearchError::NotFound);
    }

    // sort_by_key is stable, so encounter order survives within a priority.
    hits.sort_by_key(|hit| hit.priority);

    tracing::debug!(hits = hits.len(), "search completed");
    Ok(hits)
}

fn push_hit<'a>(
    hits: &mut Vec<SearchHit>,
    seen: &mut HashSet<(&'a str, MatchPriority)>,
    user: &'a UserRecord,
    priority: MatchPriority,
) {
    if seen.insert((user.id.as_str(), priority)) {
        hits.push(SearchHit {
            user: user.clone(),
            priority,
        });
    }
}
