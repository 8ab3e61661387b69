use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::{FetchError, GradeMap, KanjiSource};
use crate::reading::{select_readings, CharacterReadingData, DEFAULT_MAX_READINGS};
use crate::retry::RetryStrategy;
use crate::romaji::Romanizer;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub max_readings: usize,
    /// Pause after every character fetch.
    pub pacing: Duration,
    /// Report progress every N characters; 0 disables.
    pub progress_interval: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_readings: DEFAULT_MAX_READINGS,
            pacing: Duration::from_millis(120),
            progress_interval: 25,
        }
    }
}

impl BuildOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_readings: settings.selection.max_readings,
            pacing: settings.pacing.delay(),
            progress_interval: settings.pacing.progress_interval,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub grade: u8,
    /// Zero-based index of the character just processed.
    pub index: usize,
    pub total: usize,
}

/// A character left out of the map because its data could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharFailure {
    pub character: String,
    pub error: FetchError,
    pub attempts: u32,
}

#[derive(Debug, Clone)]
pub struct GradeReport {
    pub grade: u8,
    pub map: GradeMap,
    pub failures: Vec<CharFailure>,
    /// Set when the cancel flag stopped the run early; `map` holds the
    /// characters completed before that.
    pub cancelled: bool,
}

impl GradeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("grade {grade}: character list fetch failed after {attempts} attempt(s): {source}")]
    ListFetch {
        grade: u8,
        attempts: u32,
        source: FetchError,
    },
}

/// Builds one [`GradeMap`] per call, strictly sequentially.
pub struct GradeBuilder<'a, S: ?Sized, R> {
    source: &'a S,
    romanizer: &'a Romanizer,
    retry: R,
    options: BuildOptions,
    cancel: Option<Arc<AtomicBool>>,
    on_progress: Option<Box<dyn FnMut(Progress) + 'a>>,
}

impl<'a, S, R> GradeBuilder<'a, S, R>
where
    S: KanjiSource + ?Sized,
    R: RetryStrategy,
{
    pub fn new(source: &'a S, romanizer: &'a Romanizer, retry: R, options: BuildOptions) -> Self {
        Self {
            source,
            romanizer,
            retry,
            options,
            cancel: None,
            on_progress: None,
        }
    }

    /// Stop between characters once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Called at every progress interval, after the character is processed.
    pub fn with_progress(mut self, f: impl FnMut(Progress) + 'a) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Fetch, select and collect every character of `grade`.
    ///
    /// Failing to fetch the character list is fatal. A character whose data
    /// cannot be fetched after retries is left out of the map and recorded in
    /// [`GradeReport::failures`].
    pub fn build(&mut self, grade: u8) -> Result<GradeReport, BuildError> {
        info!(grade, "building grade");

        let mut attempts = 0;
        let characters = self
            .retry
            .execute_while(
                |_| {
                    attempts += 1;
                    self.source.list_characters(grade)
                },
                FetchError::is_retryable,
            )
            .map_err(|source| BuildError::ListFetch {
                grade,
                attempts,
                source,
            })?;

        let total = characters.len();
        info!(grade, total, "fetched character list");

        let mut report = GradeReport {
            grade,
            map: GradeMap::new(),
            failures: Vec::new(),
            cancelled: false,
        };

        for (i, character) in characters.into_iter().enumerate() {
            if self.is_cancelled() {
                warn!(grade, done = i, total, "cancelled");
                report.cancelled = true;
                break;
            }

            match self.fetch_reading(&character) {
                Ok(data) => {
                    let readings =
                        select_readings(&data, self.romanizer, self.options.max_readings);
                    debug!(%character, ?readings, "selected readings");
                    report.map.insert(character, readings);
                }
                Err((error, attempts)) => {
                    warn!(grade, %character, attempts, %error, "excluding character");
                    report.failures.push(CharFailure {
                        character,
                        error,
                        attempts,
                    });
                }
            }

            if !self.options.pacing.is_zero() {
                thread::sleep(self.options.pacing);
            }

            let interval = self.options.progress_interval;
            if interval > 0 && i % interval == 0 {
                info!(grade, "{i}/{total}");
                if let Some(on_progress) = self.on_progress.as_mut() {
                    on_progress(Progress {
                        grade,
                        index: i,
                        total,
                    });
                }
            }
        }

        info!(
            grade,
            characters = report.map.len(),
            failed = report.failures.len(),
            "grade built"
        );
        Ok(report)
    }

    fn fetch_reading(&self, character: &str) -> Result<CharacterReadingData, (FetchError, u32)> {
        let mut attempts = 0;
        self.retry
            .execute_while(
                |attempt| {
                    attempts += 1;
                    if attempt > 0 {
                        debug!(%character, attempt, "retrying");
                    }
                    self.source.reading_data(character)
                },
                FetchError::is_retryable,
            )
            .map_err(|e| (e, attempts))
    }
}
