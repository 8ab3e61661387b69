/// Strip okurigana and affix markup from a kun reading.
///
/// Everything from the first `.` on is dropped, remaining `-` and `.` are
/// removed and surrounding whitespace is trimmed. `"た.べる"` → `"た"`,
/// `"-どり"` → `"どり"`. Never fails; marker-only input yields `""`.
pub fn normalize(raw: &str) -> String {
    let stem = raw.split('.').next().unwrap_or_default();
    let cleaned: String = stem.chars().filter(|&c| c != '-' && c != '.').collect();
    cleaned.trim().to_string()
}
