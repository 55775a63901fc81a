use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".jsoncoderc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Per-language translations (Input A).
    #[serde(default = "default_translate_data")]
    pub translate_data: String,
    /// Words referenced by source code (Input B).
    #[serde(default)]
    pub code_words: Option<String>,
    /// Where the generated translation code is written.
    #[serde(default = "default_output")]
    pub output: String,
    /// Optional cache of the compacted table as JSON.
    #[serde(default)]
    pub table_output: Option<String>,
}

fn default_translate_data() -> String {
    "./i18n/translate_data.json".to_string()
}

fn default_output() -> String {
    "./i18n/translate_data.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_data: default_translate_data(),
            code_words: None,
            output: default_output(),
            table_output: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Paths must be non-empty and no output may overwrite an input.
    pub fn validate(&self) -> Result<()> {
        let inputs = [Some(&self.translate_data), self.code_words.as_ref()];
        let outputs = [
            ("output", Some(&self.output)),
            ("tableOutput", self.table_output.as_ref()),
        ];

        for path in inputs.iter().flatten() {
            if path.trim().is_empty() {
                bail!("Input paths in config must not be empty");
            }
        }
        for (field, path) in outputs {
            let Some(path) = path else { continue };
            if path.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
            if inputs.iter().flatten().any(|input| same_path(input, path)) {
                bail!("'{}' would overwrite an input file: \"{}\"", field, path);
            }
        }
        if let Some(table) = &self.table_output
            && same_path(table, &self.output)
        {
            bail!(
                "'tableOutput' and 'output' point to the same file: \"{}\"",
                table
            );
        }

        Ok(())
    }
}

fn same_path(a: &str, b: &str) -> bool {
    fn components(path: &str) -> Vec<Component<'_>> {
        Path::new(path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
    components(a) == components(b)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
