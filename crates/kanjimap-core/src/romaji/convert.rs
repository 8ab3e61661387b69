use std::collections::BTreeMap;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;
use super::trie::KanaTrie;
use crate::unicode::katakana_to_hiragana;

/// Converts a phonetic (kana) string into its lowercase romanized form.
pub trait Romanize {
    fn romanize(&self, kana: &str) -> String;
}

impl<F> Romanize for F
where
    F: Fn(&str) -> String,
{
    fn romanize(&self, kana: &str) -> String {
        self(kana)
    }
}

/// Kana→romaji converter built once from a mapping table and shared by
/// reference afterwards. Immutable after construction.
pub struct Romanizer {
    trie: KanaTrie,
}

impl Romanizer {
    /// Romanizer over the embedded Hepburn table.
    pub fn hepburn() -> Self {
        // The embedded table is checked by build.rs and the config tests.
        let map = parse_romaji_toml(DEFAULT_TOML).expect("romaji TOML must be valid");
        Self::from_map(&map)
    }

    /// Romanizer over a custom TOML table (`[mappings] "かな" = "kana"`).
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        Ok(Self::from_map(&map))
    }

    fn from_map(map: &BTreeMap<String, String>) -> Self {
        // Input is folded to hiragana before lookup, so keys are folded too.
        let folded: Vec<(String, &str)> = map
            .iter()
            .map(|(kana, romaji)| {
                let key: String = kana.chars().map(katakana_to_hiragana).collect();
                (key, romaji.as_str())
            })
            .collect();
        let trie = KanaTrie::from_mappings(folded.iter().map(|(k, v)| (k.as_str(), *v)));
        tracing::debug!(mappings = trie.len(), "romanizer initialized");
        Self { trie }
    }

    pub fn mapping_count(&self) -> usize {
        self.trie.len()
    }

    pub fn convert(&self, kana: &str) -> String {
        let chars: Vec<char> = kana.chars().map(katakana_to_hiragana).collect();
        let mut out = String::with_capacity(chars.len() * 3);
        let mut sokuon = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == 'っ' {
                sokuon = true;
                i += 1;
                continue;
            }

            if c == 'ー' {
                if let Some(vowel) = out.chars().last().filter(|&v| is_vowel(v)) {
                    out.push(vowel);
                }
                sokuon = false;
                i += 1;
                continue;
            }

            match self.trie.longest_match(&chars[i..]) {
                Some((len, romaji)) => {
                    if sokuon {
                        if let Some(g) = geminate(romaji) {
                            out.push(g);
                        }
                    }
                    out.push_str(romaji);
                    i += len;
                }
                None => {
                    out.push(c);
                    i += 1;
                }
            }
            sokuon = false;
        }

        out.to_lowercase()
    }
}

impl Romanize for Romanizer {
    fn romanize(&self, kana: &str) -> String {
        self.convert(kana)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Consonant doubled by a preceding sokuon: `ka` → `k`, `chi` → `t`.
/// Vowel-initial syllables and `n` take no doubling.
fn geminate(romaji: &str) -> Option<char> {
    if romaji.starts_with("ch") {
        return Some('t');
    }
    romaji
        .chars()
        .next()
        .filter(|&c| c.is_ascii_alphabetic() && !is_vowel(c) && c != 'n')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romanize(kana: &str) -> String {
        Romanizer::hepburn().convert(kana)
    }

    #[test]
    fn test_basic_hiragana() {
        assert_eq!(romanize("かんじ"), "kanji");
        assert_eq!(romanize("み"), "mi");
        assert_eq!(romanize("ひと"), "hito");
    }

    #[test]
    fn test_hepburn_irregulars() {
        assert_eq!(romanize("し"), "shi");
        assert_eq!(romanize("ち"), "chi");
        assert_eq!(romanize("つ"), "tsu");
        assert_eq!(romanize("ふ"), "fu");
        assert_eq!(romanize("じ"), "ji");
        assert_eq!(romanize("を"), "o");
    }

    #[test]
    fn test_katakana_on_readings() {
        assert_eq!(romanize("カン"), "kan");
        assert_eq!(romanize("ダイ"), "dai");
        assert_eq!(romanize("ジン"), "jin");
        assert_eq!(romanize("ニチ"), "nichi");
    }

    #[test]
    fn test_youon() {
        assert_eq!(romanize("きょう"), "kyou");
        assert_eq!(romanize("シャ"), "sha");
        assert_eq!(romanize("リョク"), "ryoku");
        assert_eq!(romanize("ジュウ"), "juu");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(romanize("がっこう"), "gakkou");
        assert_eq!(romanize("まっちゃ"), "matcha");
        assert_eq!(romanize("ザッ"), "za");
        assert_eq!(romanize("っあ"), "a");
    }

    #[test]
    fn test_prolonged_sound_mark() {
        assert_eq!(romanize("ラーメン"), "raamen");
        assert_eq!(romanize("ー"), "");
        assert_eq!(romanize("ンー"), "n");
    }

    #[test]
    fn test_extended_katakana() {
        assert_eq!(romanize("ティ"), "ti");
        assert_eq!(romanize("ファ"), "fa");
        assert_eq!(romanize("ヴァ"), "va");
    }

    #[test]
    fn test_unmapped_passthrough_lowercased() {
        assert_eq!(romanize("ABC"), "abc");
        assert_eq!(romanize("か-"), "ka-");
        assert_eq!(romanize("漢"), "漢");
        assert_eq!(romanize(""), "");
    }

    #[test]
    fn test_custom_table() {
        let toml = r#"
[mappings]
"し" = "si"
"ア" = "a"
"#;
        let r = Romanizer::from_toml(toml).unwrap();
        assert_eq!(r.mapping_count(), 2);
        assert_eq!(r.convert("シ"), "si");
        // Katakana keys are folded, so both scripts resolve.
        assert_eq!(r.convert("あア"), "aa");
    }

    #[test]
    fn test_closure_romanize() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.romanize("ka"), "KA");
    }
}
