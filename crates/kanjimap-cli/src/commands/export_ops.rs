use std::fs;
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kanjimap_core::grade::{BuildOptions, GradeBuilder};
use kanjimap_core::retry::ExponentialBackoff;
use kanjimap_core::settings::validate_grades;

use super::{load_romanizer, load_settings};
use crate::export::export_grades;
use crate::kanji_source::KanjiApiSource;

pub struct ExportArgs<'a> {
    pub settings: Option<&'a str>,
    pub romaji: Option<&'a str>,
    pub grades: Vec<u8>,
    pub base_url: Option<String>,
    pub output_dir: &'a str,
}

pub fn export(args: ExportArgs<'_>) {
    let mut settings = load_settings(args.settings);
    if let Some(base_url) = args.base_url {
        settings.source.base_url = base_url;
    }
    if !args.grades.is_empty() {
        die!(validate_grades(&args.grades), "Error: {}");
        settings.export.grades = args.grades;
    }

    let output_dir = Path::new(args.output_dir);
    die!(
        fs::create_dir_all(output_dir),
        "Error creating {}: {}",
        output_dir.display()
    );

    let romanizer = load_romanizer(args.romaji);
    let source = KanjiApiSource::new(&settings.source);
    let retry = ExponentialBackoff::from_settings(&settings.retry);
    let cancel = install_cancel_handler();
    let mut builder = GradeBuilder::new(
        &source,
        &romanizer,
        retry,
        BuildOptions::from_settings(&settings),
    )
    .with_cancel_flag(cancel);

    eprintln!(
        "Source: {} (grades {:?})",
        settings.source.base_url, settings.export.grades
    );
    let summary = export_grades(
        &mut builder,
        &settings.export.grades,
        output_dir,
        &settings.export,
    );

    for path in &summary.written {
        println!("Wrote {}", path.display());
    }
    for (grade, failure) in &summary.excluded {
        eprintln!(
            "Excluded grade {grade} {} after {} attempt(s): {}",
            failure.character, failure.attempts, failure.error
        );
    }
    for failure in &summary.failed_grades {
        eprintln!("Failed grade {}: {}", failure.grade, failure.reason);
    }
    if summary.cancelled {
        eprintln!("Cancelled");
    }

    if !summary.is_success() {
        process::exit(1);
    }
}

/// Ctrl+C raises the returned flag; the builder stops before the next character.
fn install_cancel_handler() -> Arc<AtomicBool> {
    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    die!(
        ctrlc::set_handler(move || {
            eprintln!("\nCancelling after the current character...");
            handler_flag.store(true, Ordering::Relaxed);
        }),
        "Error installing Ctrl+C handler: {}"
    );
    cancel
}
