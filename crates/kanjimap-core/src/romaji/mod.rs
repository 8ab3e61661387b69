//! Kana-to-romaji conversion.
//!
//! A longest-match trie over a TOML kana table turns kana readings into
//! lowercase Hepburn romaji, handling sokuon (っ), the prolonged sound mark
//! (ー) and yōon digraphs (きゃ).

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{Romanize, Romanizer};
pub use table::default_toml;
