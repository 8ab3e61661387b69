use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::reading::ReadingResult;

/// Character → readings, iterated and serialized in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeMap {
    entries: Vec<(String, ReadingResult)>,
    index: HashMap<String, usize>,
}

impl GradeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, character: String, readings: ReadingResult) {
        match self.index.get(&character) {
            Some(&i) => self.entries[i].1 = readings,
            None => {
                self.index.insert(character.clone(), self.entries.len());
                self.entries.push((character, readings));
            }
        }
    }

    pub fn get(&self, character: &str) -> Option<&ReadingResult> {
        self.index.get(character).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, character: &str) -> bool {
        self.index.contains_key(character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for GradeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (character, readings) in &self.entries {
            map.serialize_entry(character, readings)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(xs: &[&str]) -> ReadingResult {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut map = GradeMap::new();
        map.insert("日".into(), readings(&["hi", "nichi"]));
        map.insert("一".into(), readings(&["ichi"]));
        map.insert("右".into(), readings(&["migi", "u"]));
        let keys: Vec<&str> = map.characters().collect();
        assert_eq!(keys, ["日", "一", "右"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn replace_keeps_position() {
        let mut map = GradeMap::new();
        map.insert("a".into(), readings(&["1"]));
        map.insert("b".into(), readings(&["2"]));
        map.insert("a".into(), readings(&["3"]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&readings(&["3"])));
        assert_eq!(map.characters().next(), Some("a"));
    }

    #[test]
    fn empty_readings_are_a_present_key() {
        let mut map = GradeMap::new();
        map.insert("〇".into(), Vec::new());
        assert!(map.contains("〇"));
        assert_eq!(map.get("〇"), Some(&Vec::new()));
        assert!(!map.contains("一"));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut map = GradeMap::new();
        map.insert("二".into(), readings(&["futa", "ni"]));
        map.insert("一".into(), readings(&["hito", "ichi"]));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"二":["futa","ni"],"一":["hito","ichi"]}"#);
    }
}
