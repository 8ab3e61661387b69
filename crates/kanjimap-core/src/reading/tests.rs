use proptest::prelude::*;

use super::*;
use crate::romaji::Romanizer;

fn identity(s: &str) -> String {
    s.to_string()
}

fn pick(kun: &[&str], on: &[&str], max: usize) -> ReadingResult {
    let data = CharacterReadingData::new(kun.iter().copied(), on.iter().copied());
    select_readings(&data, &identity, max)
}

#[test]
fn kun_then_on_primary_then_on_secondary() {
    assert_eq!(pick(&["mi.ru"], &["kan", "ken"], 3), ["mi", "kan", "ken"]);
}

#[test]
fn only_on_reading() {
    assert_eq!(pick(&[], &["dai"], 3), ["dai"]);
}

#[test]
fn duplicate_across_categories_keeps_kun() {
    // "a.b" normalizes to "a", which collides with the on reading.
    assert_eq!(pick(&["a.b"], &["a"], 3), ["a"]);
}

#[test]
fn no_readings_is_empty() {
    assert!(pick(&[], &[], 3).is_empty());
}

#[test]
fn kun_that_normalizes_to_empty_is_skipped() {
    assert_eq!(pick(&[".る"], &["kan"], 3), ["kan"]);
    assert!(pick(&["-"], &[], 3).is_empty());
}

#[test]
fn only_first_kun_is_considered() {
    assert_eq!(pick(&["x", "y"], &[], 3), ["x"]);
}

#[test]
fn third_on_reading_never_used() {
    assert_eq!(pick(&[], &["a", "b", "c"], 3), ["a", "b"]);
}

#[test]
fn second_on_skipped_when_full() {
    assert_eq!(pick(&["k"], &["a", "b"], 2), ["k", "a"]);
}

#[test]
fn second_on_fills_gap_left_by_empty_kun() {
    assert_eq!(pick(&["."], &["a", "b"], 2), ["a", "b"]);
}

#[test]
fn on_readings_are_not_normalized() {
    assert_eq!(pick(&[], &["a.b", "-c"], 3), ["a.b", "-c"]);
}

#[test]
fn zero_max_is_empty() {
    assert!(pick(&["k"], &["a", "b"], 0).is_empty());
}

#[test]
fn empty_romanization_is_dropped() {
    let data = CharacterReadingData::new(["み"], ["カン", "ケン"]);
    let drop_kan = |s: &str| if s == "カン" { String::new() } else { s.to_string() };
    assert_eq!(select_readings(&data, &drop_kan, 3), ["み", "ケン"]);
}

#[test]
fn hepburn_end_to_end() {
    let romanizer = Romanizer::hepburn();
    let data = CharacterReadingData::new(["み.る", "み.せる"], ["ケン"]);
    assert_eq!(
        select_readings(&data, &romanizer, DEFAULT_MAX_READINGS),
        ["mi", "ken"]
    );

    let data = CharacterReadingData::new(["おお-", "おお.きい"], ["ダイ", "タイ"]);
    assert_eq!(
        select_readings(&data, &romanizer, DEFAULT_MAX_READINGS),
        ["oo", "dai", "tai"]
    );

    // 日: ひ and ニチ are distinct.
    let data = CharacterReadingData::new(["ひ", "-び", "-か"], ["ニチ", "ジツ"]);
    assert_eq!(
        select_readings(&data, &romanizer, DEFAULT_MAX_READINGS),
        ["hi", "nichi", "jitsu"]
    );
}

#[test]
fn romanized_collision_is_deduplicated() {
    let romanizer = Romanizer::hepburn();
    // Hiragana kun and katakana on romanize identically.
    let data = CharacterReadingData::new(["かん"], ["カン", "ケン"]);
    assert_eq!(
        select_readings(&data, &romanizer, DEFAULT_MAX_READINGS),
        ["kan", "ken"]
    );
}

#[test]
fn deserialize_missing_fields_as_empty() {
    let data: CharacterReadingData = serde_json::from_str(r#"{"kanji":"〇"}"#).unwrap();
    assert_eq!(data, CharacterReadingData::default());

    let data: CharacterReadingData =
        serde_json::from_str(r#"{"kun_readings":["ひと"],"grade":1}"#).unwrap();
    assert_eq!(data.kun_readings, ["ひと"]);
    assert!(data.on_readings.is_empty());
}

#[test]
fn deserialize_null_fields_as_empty() {
    let data: CharacterReadingData =
        serde_json::from_str(r#"{"kanji":"〇","kun_readings":null,"on_readings":["レイ"]}"#)
            .unwrap();
    assert!(data.kun_readings.is_empty());
    assert_eq!(data.on_readings, ["レイ"]);

    let data: CharacterReadingData =
        serde_json::from_str(r#"{"kun_readings":null,"on_readings":null}"#).unwrap();
    assert_eq!(data, CharacterReadingData::default());
}

#[test]
fn dedup_truncate_basics() {
    let v = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(dedup_truncate(v(&["a", "", "a", "b"]), 3), v(&["a", "b"]));
    assert_eq!(dedup_truncate(v(&["a", "b", "c", "d"]), 2), v(&["a", "b"]));
    assert!(dedup_truncate(v(&["", ""]), 3).is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_reading() -> impl Strategy<Value = String> {
    "[あかきカンa .\\-]{0,5}"
}

fn arb_readings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_reading(), 0..4)
}

proptest! {
    #[test]
    fn normalize_without_markers_is_trim(s in "[^.\\-]{0,12}") {
        prop_assert_eq!(normalize(&s), s.trim());
    }

    #[test]
    fn normalize_never_leaves_markers(s in ".{0,12}") {
        let n = normalize(&s);
        prop_assert!(!n.contains('.'));
        prop_assert!(!n.contains('-'));
    }

    #[test]
    fn selection_is_bounded_and_unique(
        kun in arb_readings(),
        on in arb_readings(),
        max in 0usize..5,
    ) {
        let data = CharacterReadingData { kun_readings: kun, on_readings: on };
        let result = select_readings(&data, &identity, max);
        prop_assert!(result.len() <= max);
        let mut sorted = result.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), result.len());
        prop_assert!(result.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn dedup_truncate_is_idempotent(
        xs in prop::collection::vec("[ab]{0,2}", 0..8),
        max in 0usize..5,
    ) {
        let once = dedup_truncate(xs, max);
        let twice = dedup_truncate(once.clone(), max);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn selection_follows_preference_order(
        kun in arb_readings(),
        on in arb_readings(),
    ) {
        let data = CharacterReadingData { kun_readings: kun, on_readings: on };
        let result = select_readings(&data, &identity, DEFAULT_MAX_READINGS);

        // Candidates in preference order: kun primary, on primary, on secondary.
        let mut ordered: Vec<String> = Vec::new();
        if let Some(k) = data.kun_readings.first() {
            ordered.push(normalize(k));
        }
        ordered.extend(data.on_readings.iter().take(2).cloned());

        let positions: Vec<usize> = result
            .iter()
            .map(|r| ordered.iter().position(|c| c == r).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
