use std::fs;

use anyhow::{Context, Result};
use serde_json::json;

use super::super::args::DecodeCommand;
use super::super::exit_status::ExitStatus;
use crate::core::parsers::decode_code;

pub fn decode(cmd: DecodeCommand) -> Result<ExitStatus> {
    let code = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
    let table =
        decode_code(&code).with_context(|| format!("Failed to decode {}", cmd.file.display()))?;

    let json = if cmd.expand {
        let (data, words) = table.expand();
        serde_json::to_string_pretty(&json!({
            "translateData": data,
            "codeWords": words,
        }))
    } else {
        serde_json::to_string_pretty(&table)
    }
    .context("Failed to serialize decoded table")?;

    println!("{}", json);
    Ok(ExitStatus::Success)
}
