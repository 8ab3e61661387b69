//! HTTP access to the kanjiapi.dev data set.

use kanjimap_core::grade::{FetchError, KanjiSource};
use kanjimap_core::reading::CharacterReadingData;
use kanjimap_core::settings::SourceSettings;

/// Blocking client for `{base_url}/grade-{n}` and `{base_url}/{kanji}`.
pub struct KanjiApiSource {
    agent: ureq::Agent,
    base_url: String,
}

impl KanjiApiSource {
    pub fn new(settings: &SourceSettings) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(settings.timeout()))
            .build();
        Self {
            agent: config.into(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn grade_url(&self, grade: u8) -> String {
        format!("{}/grade-{grade}", self.base_url)
    }

    pub fn character_url(&self, character: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(character))
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "GET");
        self.agent
            .get(url)
            .call()
            .map_err(fetch_error)?
            .into_body()
            .read_to_string()
            .map_err(fetch_error)
    }
}

impl KanjiSource for KanjiApiSource {
    fn list_characters(&self, grade: u8) -> Result<Vec<String>, FetchError> {
        let body = self.get(&self.grade_url(grade))?;
        parse_grade_list(&body)
    }

    fn reading_data(&self, character: &str) -> Result<CharacterReadingData, FetchError> {
        let body = self.get(&self.character_url(character))?;
        parse_reading_data(&body)
    }
}

fn fetch_error(e: ureq::Error) -> FetchError {
    match e {
        ureq::Error::StatusCode(code) => FetchError::Status(code),
        ureq::Error::Timeout(_) => FetchError::Timeout,
        other => FetchError::Http(other.to_string()),
    }
}

/// Parse a grade listing: a JSON array of characters.
pub fn parse_grade_list(body: &str) -> Result<Vec<String>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(format!("grade list: {e}")))
}

/// Parse a character record. Only the reading arrays are kept; absent arrays
/// are empty.
pub fn parse_reading_data(body: &str) -> Result<CharacterReadingData, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(format!("kanji record: {e}")))
}
