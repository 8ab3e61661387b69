/// Character-level Unicode classification for Japanese text.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Fold a katakana letter onto its hiragana counterpart.
///
/// Only ァ..ヶ (U+30A1..U+30F6) have a hiragana twin at a fixed 0x60 offset;
/// the prolonged sound mark ー and every other character are returned as-is.
pub fn katakana_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Check if a string is made only of kana (either script).
///
/// Used to validate the keys of a kana→romaji table.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana)
}
