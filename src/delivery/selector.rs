//! Dedup-aware quip selection
//!
//! Uniform choice over the candidates not recently shown; when every
//! candidate was recently shown, choose from the unfiltered pool —
//! repetition is preferable to silence.

use super::dedup::RecentHistory;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one quip from the pool, avoiding the recent history when
/// possible. Returns `None` only for an empty pool.
pub fn select_quip<R: Rng + ?Sized>(
    pool: &[String],
    history: &RecentHistory,
    rng: &mut R,
) -> Option<String> {
    if pool.is_empty() {
        return None;
    }

    let fresh: Vec<&String> = pool.iter().filter(|text| !history.contains(text)).collect();
    if fresh.is_empty() {
        pool.choose(rng).cloned()
    } else {
        fresh.choose(rng).map(|text| (*text).clone())
    }
}
