//! Per-token step of the iterative peeling engine
//!
//! A round matches each pending token against the frontier: the words
//! discovered in the immediately preceding round, not the full accumulated
//! dictionary. The first frontier word that prefixes the token wins; which
//! one is tried first is unspecified, so the outcome is match-order-dependent
//! when several prefixes apply. Any valid decomposition is acceptable.

use crate::splitter::queue::{TokenBag, WordSet};

/// Match one token against the frontier
///
/// - Prefix match with a non-empty remainder: the remainder goes into the
///   round's candidate set (deduplicated within the round).
/// - Prefix match with an empty remainder: the token is fully decomposed
///   and simply dropped.
/// - No match: the token is forwarded unchanged to the next round's bag.
pub fn peel_token(
    token: String,
    frontier: &[String],
    candidates: &WordSet,
    next_pending: &TokenBag,
) {
    for word in frontier {
        if let Some(remainder) = token.strip_prefix(word.as_str()) {
            if !remainder.is_empty() {
                candidates.insert(remainder.to_string());
            }
            return;
        }
    }

    next_pending.push(token);
}
