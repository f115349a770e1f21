use std::path::Path;

use clap::{Parser, Subcommand};

use slug_cli::commands::{config_ops, slug_ops};

#[derive(Parser)]
#[command(name = "slugtool", about = "Chapiko title-to-slug tool")]
struct Cli {
    /// Custom kanji readings TOML (replaces the built-in table)
    #[arg(long, global = true)]
    kanji: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the slug for each title
    Generate {
        /// Titles to convert
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Show every pipeline stage for a title
    Explain {
        /// Title to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a file of titles (one per line) to JSONL
    Batch {
        /// Path to the input file
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Add numeric suffixes to slugs repeated within the file
        #[arg(long)]
        unique: bool,
    },
    /// Export default kanji readings as TOML
    KanjiExport,
    /// Validate a custom kanji readings TOML file
    KanjiValidate {
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

    if let Some(dir) = cli.trace_dir.as_deref() {
        chapiko_slug::init_tracing(Path::new(dir));
    }
    config_ops::load_custom(cli.kanji.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Generate { texts } => slug_ops::generate_cmd(&texts),
        Command::Explain { text, json } => slug_ops::explain_cmd(&text, json),
        Command::Batch {
            input_file,
            output_file,
            unique,
        } => slug_ops::batch_cmd(&input_file, &output_file, unique),
        Command::KanjiExport => config_ops::kanji_export(),
        Command::KanjiValidate { file } => config_ops::kanji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
