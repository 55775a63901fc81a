use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

const TRANSLATE_DATA: &str = r#"{
  "fr": {
    "DEFAULTS": { "hello": "Bonjour", "cat": "Chat" },
    "SUBTYPES": { "menu": { "open": "Ouvrir" } }
  },
  "en": {
    "DEFAULTS": { "hello": "Hello", "cat": "Cat" },
    "SUBTYPES": { "menu": { "open": "Open" } }
  },
  "es": {
    "DEFAULTS": { "cat": "Chat" }
  }
}"#;

const CODE_WORDS: &str = r#"{
  "DEFAULTS": ["bye", "hello", "bye"],
  "SUBTYPES": { "menu": ["close"], "dialog": ["cancel"] }
}"#;

const EXPECTED_CODE: &str = "{
    '$': ['en', 'es', 'fr'],
    '*': {
        // 'bye':
        'cat': ['Cat', 'Chat', 1],
        'hello': ['Hello', , 'Bonjour']
    },
    'dialog': {
        // 'cancel':
    },
    'menu': {
        // 'close':
        'open': ['Open', , 'Ouvrir']
    }
}
";

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("i18n/translate_data.json", TRANSLATE_DATA)?;
    test.write_file("i18n/code_words.json", CODE_WORDS)?;
    Ok(test)
}

#[test]
fn test_generate_writes_output() -> Result<()> {
    let test = project()?;

    let output = test
        .generate_command()
        .args(["--words", "i18n/code_words.json"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Wrote ./i18n/translate_data.js (3 languages, 3 categories, 3 words, 3 untranslated)\n"
    );
    assert_eq!(test.read_file("i18n/translate_data.js")?, EXPECTED_CODE);

    Ok(())
}

#[test]
fn test_generate_stdout() -> Result<()> {
    let test = project()?;

    let output = test
        .generate_command()
        .args(["--words", "i18n/code_words.json", "--stdout"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_CODE);
    assert!(!test.root().join("i18n/translate_data.js").exists());

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = project()?;

    test.generate_command().output()?;
    let first = test.read_file("i18n/translate_data.js")?;
    test.generate_command().output()?;
    let second = test.read_file("i18n/translate_data.js")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_check() -> Result<()> {
    let test = project()?;

    // Nothing generated yet.
    let output = test.generate_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("is out of date"));

    test.generate_command().output()?;
    let output = test.generate_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("is up to date"));

    // A new translation makes the file stale.
    test.write_file(
        "i18n/translate_data.json",
        r#"{ "en": { "DEFAULTS": { "hello": "Hello", "new": "New" } } }"#,
    )?;
    let output = test.generate_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_generate_check_covers_table() -> Result<()> {
    let test = project()?;
    let words = ["--words", "i18n/code_words.json"];
    let table = ["--table", "cache/table.json"];

    test.generate_command().args(words).args(table).output()?;
    let output = test
        .generate_command()
        .args(words)
        .args(table)
        .arg("--check")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    test.write_file("cache/table.json", "{}\n")?;
    let output = test
        .generate_command()
        .args(words)
        .args(table)
        .arg("--check")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("i18n/translate_data.js is up to date"));
    assert!(stdout.contains("cache/table.json is out of date"));

    Ok(())
}

#[test]
fn test_generate_check_unreadable_output() -> Result<()> {
    let test = project()?;
    fs::create_dir_all(test.root().join("i18n/translate_data.js"))?;

    let output = test.generate_command().arg("--check").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));

    Ok(())
}

#[test]
fn test_generate_table_output() -> Result<()> {
    let test = project()?;

    let output = test
        .generate_command()
        .args(["--words", "i18n/code_words.json", "--table", "cache/table.json"])
        .output()?;
    assert!(output.status.success());

    let table: Value = serde_json::from_str(&test.read_file("cache/table.json")?)?;
    assert_eq!(
        table,
        json!({
            "$": ["en", "es", "fr"],
            "*": {
                "bye": null,
                "cat": ["Cat", "Chat", 1],
                "hello": ["Hello", null, "Bonjour"]
            },
            "dialog": { "cancel": null },
            "menu": { "close": null, "open": ["Open", null, "Ouvrir"] }
        })
    );

    Ok(())
}

#[test]
fn test_generate_empty_input() -> Result<()> {
    let test = CliTest::with_file("i18n/translate_data.json", "{}")?;
    test.write_file("i18n/code_words.json", "{}")?;

    let output = test
        .generate_command()
        .args(["--words", "i18n/code_words.json", "--stdout"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");

    Ok(())
}

#[test]
fn test_generate_rejects_reserved_category() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/translate_data.json",
        r#"{ "en": { "SUBTYPES": { "$lang": { "a": "A" } } } }"#,
    )?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to compact"));
    assert!(stderr.contains("`$lang` is a reserved category name"));
    assert!(!test.root().join("i18n/translate_data.js").exists());

    Ok(())
}

#[test]
fn test_generate_missing_input() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read JSON file"));

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".jsoncoderc.json",
        r#"{
  "translateData": "data/langs.json",
  "codeWords": "data/words.json",
  "output": "src/i18n.js",
  "tableOutput": "data/table.json"
}"#,
    )?;
    test.write_file(
        "data/langs.json",
        r#"{ "en": { "DEFAULTS": { "hi": "Hi" } }, "fr": { "DEFAULTS": { "hi": "" } } }"#,
    )?;
    test.write_file("data/words.json", r#"{ "DEFAULTS": ["it's"] }"#)?;

    let output = test.generate_command().args(["--indent", "2"]).output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        test.read_file("src/i18n.js")?,
        "{\n  '$': ['en', 'fr'],\n  '*': {\n    // 'it\\'s':\n    'hi': ['Hi', []]\n  }\n}\n"
    );
    assert!(test.root().join("data/table.json").exists());

    Ok(())
}

#[test]
fn test_generate_verbose_logs_to_stderr() -> Result<()> {
    let test = project()?;

    let output = test.generate_command().args(["--stdout", "-v"]).output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("compacted 3 languages into 2 categories"));
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().next(), Some("{"));

    Ok(())
}
