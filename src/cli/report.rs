//! Result lines printed by the CLI commands.
//!
//! Kept apart from the pipeline so jsoncode can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::core::TableStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// `2 languages, 3 categories, 10 words, 1 untranslated`
pub fn format_stats(stats: &TableStats) -> String {
    let untranslated = format!("{} untranslated", stats.untranslated);
    let untranslated = if stats.untranslated > 0 {
        untranslated.yellow().to_string()
    } else {
        untranslated
    };
    format!(
        "{} {}, {} {}, {} {}, {}",
        stats.languages,
        plural(stats.languages, "language", "languages"),
        stats.categories,
        plural(stats.categories, "category", "categories"),
        stats.translated,
        plural(stats.translated, "word", "words"),
        untranslated
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

pub fn print_written(path: &Path, stats: Option<&TableStats>) {
    print_written_to(path, stats, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(path: &Path, stats: Option<&TableStats>, writer: &mut W) {
    let detail = stats
        .map(|stats| format!(" ({})", format_stats(stats)))
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "{} {}{}",
        SUCCESS_MARK.green(),
        format!("Wrote {}", path.display()).green(),
        detail
    );
}

pub fn print_up_to_date(path: &Path) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} is up to date", path.display()).green()
    );
}

pub fn print_out_of_date(path: &Path) {
    println!(
        "{} {}",
        FAILURE_MARK.red(),
        format!("{} is out of date, run `jsoncode generate`", path.display()).red()
    );
}

pub fn print_init_created() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}
