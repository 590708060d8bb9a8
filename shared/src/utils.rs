use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Uniformly random element of a non-empty phrase set.
pub fn pick_phrase(phrases: &'static [&'static str]) -> &'static str {
    phrases
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Random duration in `[min, max]`, millisecond granularity.
pub fn random_delay(min: Duration, max: Duration) -> Duration {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let lo_ms = lo.as_millis() as u64;
    let hi_ms = hi.as_millis() as u64;
    if lo_ms == hi_ms {
        return lo;
    }
    Duration::from_millis(rand::thread_rng().gen_range(lo_ms..=hi_ms))
}
