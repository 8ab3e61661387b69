//! Reading selection: turns the raw kun/on readings of one character into a
//! short, ordered, deduplicated list of romanized hints.

mod normalize;
mod select;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Deserializer};

pub use normalize::normalize;
pub use select::{dedup_truncate, select_readings, DEFAULT_MAX_READINGS};

/// Raw reading data for one character as delivered by the data source.
///
/// Missing or `null` fields deserialize as empty sequences; unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CharacterReadingData {
    /// Native-style readings, possibly with okurigana (`.`) or affix (`-`) markup.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub kun_readings: Vec<String>,
    /// Borrowed-style readings, plain katakana.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub on_readings: Vec<String>,
}

impl CharacterReadingData {
    pub fn new<K, O>(kun: K, on: O) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            kun_readings: kun.into_iter().map(Into::into).collect(),
            on_readings: on.into_iter().map(Into::into).collect(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered, duplicate-free romanized readings for one character.
pub type ReadingResult = Vec<String>;
