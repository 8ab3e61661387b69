use std::fs;
use std::process;

use kanjimap_core::romaji::Romanizer;
use kanjimap_core::settings::{parse_settings_toml, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod export_ops;
pub mod lookup_ops;

/// Settings from `path`, or the embedded defaults.
pub(crate) fn load_settings(path: Option<&str>) -> Settings {
    match path {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error in {path}: {}")
        }
        None => Settings::defaults(),
    }
}

/// Romanizer over the kana table at `path`, or the built-in Hepburn table.
pub(crate) fn load_romanizer(path: Option<&str>) -> Romanizer {
    match path {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(Romanizer::from_toml(&content), "Error in {path}: {}")
        }
        None => Romanizer::hepburn(),
    }
}
