use std::collections::HashSet;

use super::normalize::normalize;
use super::{CharacterReadingData, ReadingResult};
use crate::romaji::Romanize;

pub const DEFAULT_MAX_READINGS: usize = 3;

/// Pick at most `max_readings` romanized readings for one character.
///
/// Preference order is primary kun (normalized), primary on, then the second
/// on reading if there is still room. On readings are romanized as given.
pub fn select_readings<R>(
    data: &CharacterReadingData,
    romanizer: &R,
    max_readings: usize,
) -> ReadingResult
where
    R: Romanize + ?Sized,
{
    let mut candidates: Vec<String> = Vec::with_capacity(3);

    if let Some(kun) = data.kun_readings.first() {
        let stem = normalize(kun);
        if !stem.is_empty() {
            candidates.push(romanizer.romanize(&stem));
        }
    }

    if let Some(on) = data.on_readings.first() {
        candidates.push(romanizer.romanize(on));
    }

    if candidates.len() < max_readings {
        if let Some(on) = data.on_readings.get(1) {
            candidates.push(romanizer.romanize(on));
        }
    }

    dedup_truncate(candidates, max_readings)
}

/// Drop empty and repeated entries (first occurrence wins), then keep at
/// most `max_readings`. Idempotent.
pub fn dedup_truncate(candidates: Vec<String>, max_readings: usize) -> ReadingResult {
    let mut seen = HashSet::new();
    let mut result: ReadingResult = candidates
        .into_iter()
        .filter(|r| !r.is_empty() && seen.insert(r.clone()))
        .collect();
    result.truncate(max_readings);
    result
}
