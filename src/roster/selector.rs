//! Weighted random race selection

use super::WeightEntry;
use rand::Rng;

/// Pick one entry with probability weight / total weight
///
/// Cumulative-weight draw: one random value in `0..total`, then walk the
/// entries subtracting weights. Equivalent to materializing a pool where
/// entry `i` appears `w_i` times, without building the pool.
pub fn pick_weighted(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    let total: u64 = entries.iter().map(|entry| u64::from(entry.weight)).sum();
    if total == 0 {
        return None;
    }

    let mut rng = rand::thread_rng();
    let mut remaining = rng.gen_range(0..total);

    for entry in entries {
        let weight = u64::from(entry.weight);
        if remaining < weight {
            return Some(entry);
        }
        remaining -= weight;
    }

    // Fallback to last entry
    entries.last()
}
