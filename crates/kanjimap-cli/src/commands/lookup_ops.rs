use std::process;

use kanjimap_core::grade::{FetchError, KanjiSource};
use kanjimap_core::reading::{normalize, select_readings, CharacterReadingData};
use kanjimap_core::retry::{ExponentialBackoff, RetryStrategy};
use kanjimap_core::unicode::is_kanji;

use super::{load_romanizer, load_settings};
use crate::kanji_source::KanjiApiSource;

/// Fetch one character and show how its hints are picked.
pub fn lookup(kanji: &str, settings_path: Option<&str>, romaji: Option<&str>) {
    let mut chars = kanji.chars();
    if !matches!((chars.next(), chars.next()), (Some(c), None) if is_kanji(c)) {
        eprintln!("Error: expected a single kanji, got '{kanji}'");
        process::exit(1);
    }

    let settings = load_settings(settings_path);
    let romanizer = load_romanizer(romaji);
    let source = KanjiApiSource::new(&settings.source);
    let retry = ExponentialBackoff::from_settings(&settings.retry);

    let data = die!(
        retry.execute_while(|_| source.reading_data(kanji), FetchError::is_retryable),
        "Error fetching {kanji}: {}"
    );

    println!("Kanji:   {kanji}");
    println!("Kun:     {}", data.kun_readings.join(", "));
    if let Some(first) = data.kun_readings.first() {
        println!("  stem:  {}", normalize(first));
    }
    println!("On:      {}", data.on_readings.join(", "));
    let readings = select_readings(&data, &romanizer, settings.selection.max_readings);
    println!("Hints:   {}", readings.join(", "));
}

/// Run the selector over readings given on the command line.
pub fn pick(kun: Vec<String>, on: Vec<String>, max_readings: usize, romaji: Option<&str>) {
    let romanizer = load_romanizer(romaji);
    let data = CharacterReadingData {
        kun_readings: kun,
        on_readings: on,
    };
    let readings = select_readings(&data, &romanizer, max_readings);
    println!("{}", readings.join(", "));
}

pub fn romanize(kana: &str, romaji: Option<&str>) {
    let romanizer = load_romanizer(romaji);
    println!("{}", romanizer.convert(kana));
}
