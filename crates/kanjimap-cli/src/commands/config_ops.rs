use std::fs;
use std::process;

pub fn romaji_export() {
    print!("{}", kanjimap_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(
        kanjimap_core::romaji::parse_romaji_toml(&content),
        "Error: {}"
    );
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", kanjimap_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kanjimap_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: source.base_url={}, pacing.delay_ms={}, export.grades={:?}",
        s.source.base_url, s.pacing.delay_ms, s.export.grades
    );
}
