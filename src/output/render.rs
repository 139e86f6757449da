//! Render parsed commands in the configured output format.

use crate::command::Command;
use crate::config::{Config, Format};
use std::fmt::Write;

/// Render commands according to the config.
///
/// The returned string carries no trailing newline; the caller decides how to
/// emit it.
pub fn render(commands: &[Command], config: &Config) -> Result<String, serde_json::Error> {
    match config.format() {
        Format::Json => render_json(commands, config.json.pretty),
        Format::Jsonl => render_jsonl(commands),
        Format::Text => Ok(render_text(commands, config.text.indexed)),
    }
}

fn render_json(commands: &[Command], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(commands)
    } else {
        serde_json::to_string(commands)
    }
}

fn render_jsonl(commands: &[Command]) -> Result<String, serde_json::Error> {
    let mut lines = Vec::with_capacity(commands.len());
    for command in commands {
        lines.push(serde_json::to_string(command)?);
    }
    Ok(lines.join("\n"))
}

fn render_text(commands: &[Command], indexed: bool) -> String {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if indexed {
            let _ = write!(out, "{}: ", i + 1);
        }
        let _ = write!(out, "{command}");
    }
    out
}
