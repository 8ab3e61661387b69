use clap::{Parser, Subcommand};

use kanjimap_cli::commands::export_ops::ExportArgs;
use kanjimap_cli::commands::{config_ops, export_ops, lookup_ops};
use kanjimap_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanjitool", about = "Kanji reading-hint table builder")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and write one reading table per grade
    Export {
        /// Settings TOML (defaults are embedded)
        #[arg(long)]
        settings: Option<String>,
        /// Custom kana table TOML (default: Hepburn)
        #[arg(long)]
        romaji: Option<String>,
        /// Grades to build, comma-separated (default: from settings)
        #[arg(long, value_delimiter = ',')]
        grades: Vec<u8>,
        /// Override source.base_url
        #[arg(long)]
        base_url: Option<String>,
        /// Output directory
        #[arg(long, default_value = ".")]
        output_dir: String,
    },
    /// Fetch one kanji and show its selected hints
    Lookup {
        /// Kanji character
        kanji: String,
        /// Settings TOML (defaults are embedded)
        #[arg(long)]
        settings: Option<String>,
        /// Custom kana table TOML (default: Hepburn)
        #[arg(long)]
        romaji: Option<String>,
    },
    /// Select hints from readings given on the command line (no network)
    Pick {
        /// Kun reading (repeatable, first is primary)
        #[arg(long, allow_hyphen_values = true)]
        kun: Vec<String>,
        /// On reading (repeatable, first is primary)
        #[arg(long, allow_hyphen_values = true)]
        on: Vec<String>,
        /// Maximum number of hints
        #[arg(long, default_value = "3")]
        max: usize,
        /// Custom kana table TOML (default: Hepburn)
        #[arg(long)]
        romaji: Option<String>,
    },
    /// Romanize a kana string
    Romanize {
        /// Kana input
        kana: String,
        /// Custom kana table TOML (default: Hepburn)
        #[arg(long)]
        romaji: Option<String>,
    },
    /// Export default kana mappings as TOML
    RomajiExport,
    /// Validate a custom kana table TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Export {
            settings,
            romaji,
            grades,
            base_url,
            output_dir,
        } => export_ops::export(ExportArgs {
            settings: settings.as_deref(),
            romaji: romaji.as_deref(),
            grades,
            base_url,
            output_dir: &output_dir,
        }),
        Command::Lookup {
            kanji,
            settings,
            romaji,
        } => lookup_ops::lookup(&kanji, settings.as_deref(), romaji.as_deref()),
        Command::Pick {
            kun,
            on,
            max,
            romaji,
        } => lookup_ops::pick(kun, on, max, romaji.as_deref()),
        Command::Romanize { kana, romaji } => lookup_ops::romanize(&kana, romaji.as_deref()),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
