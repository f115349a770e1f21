use std::fs;
use std::process;

use slug_core::kanji::{self, KanjiTable};
use slug_core::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install custom kanji readings and settings before any slug is generated.
pub fn load_custom(kanji_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = kanji_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(KanjiTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn kanji_export() {
    print!("{}", kanji::default_toml());
}

pub fn kanji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(kanji::parse_kanji_toml(&content), "Error: {}");
    println!("OK: {} readings", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: slug.max_length={}, unique.first_suffix={}, unique.max_attempts={}",
        s.slug.max_length, s.unique.first_suffix, s.unique.max_attempts
    );
}
