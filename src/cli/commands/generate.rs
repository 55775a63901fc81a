use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::super::args::GenerateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_out_of_date, print_up_to_date, print_written};
use crate::config::load_config;
use crate::core::{
    CodeTranslateWords, build_table,
    codegen::{JsRenderer, generate_code},
    parsers::{load_code_words, load_translate_data},
};

/// Paths of one generate run after merging CLI flags over the config file.
#[derive(Debug)]
struct GeneratePaths {
    data: PathBuf,
    words: Option<PathBuf>,
    output: PathBuf,
    table: Option<PathBuf>,
}

fn resolve_paths(cmd: &GenerateCommand) -> Result<GeneratePaths> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if loaded.from_file {
        debug!("using configuration file");
    }
    let config = loaded.config;

    Ok(GeneratePaths {
        data: cmd
            .data
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.translate_data)),
        words: cmd
            .words
            .clone()
            .or_else(|| config.code_words.as_ref().map(PathBuf::from)),
        output: cmd
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output)),
        table: cmd
            .table
            .clone()
            .or_else(|| config.table_output.as_ref().map(PathBuf::from)),
    })
}

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let paths = resolve_paths(&cmd)?;
    debug!("{:?}", paths);

    let data = load_translate_data(&paths.data)?;
    let words = match &paths.words {
        Some(path) => load_code_words(path)?,
        None => CodeTranslateWords::default(),
    };

    let table = build_table(&data, &words)
        .with_context(|| format!("Failed to compact {}", paths.data.display()))?;
    let stats = table.stats();
    info!(
        "{} languages, {} categories, {} untranslated",
        stats.languages, stats.categories, stats.untranslated
    );

    let renderer = JsRenderer::with_indent(" ".repeat(cmd.indent));
    let code = generate_code(&table, &renderer).context("Failed to render translation code")?;
    let content = format!("{}\n", code);

    if cmd.stdout {
        print!("{}", content);
        return Ok(ExitStatus::Success);
    }

    let mut outputs = vec![(paths.output.as_path(), content, Some(stats))];
    if let Some(table_path) = &paths.table {
        let json = serde_json::to_string_pretty(&table).context("Failed to serialize table")?;
        outputs.push((table_path.as_path(), format!("{}\n", json), None));
    }

    if cmd.check {
        let mut status = ExitStatus::Success;
        for (path, content, _) in &outputs {
            if read_existing(path)?.as_deref() == Some(content.as_str()) {
                print_up_to_date(path);
            } else {
                print_out_of_date(path);
                status = ExitStatus::Failure;
            }
        }
        return Ok(status);
    }

    for (path, content, stats) in &outputs {
        write_file(path, content)?;
        print_written(path, stats.as_ref());
    }

    Ok(ExitStatus::Success)
}

/// Current content of a generated file, `None` when it does not exist yet.
fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
