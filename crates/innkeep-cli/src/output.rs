//! Shared output layer for pretty/text/JSON parity across commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for pipes, or
//! stable JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--json` flag
//! 2. `FORMAT` env var: `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY, [`OutputMode::Text`] if piped.

use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use innkeep_core::error::StoreError;

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized output (sections, visual framing).
    Pretty,
    /// Compact plain text for pipes and scripts.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.trim().to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value falls through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from the `--json` flag, environment, and TTY.
#[must_use]
pub fn resolve_output_mode(json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(json_flag, env_val.as_deref(), is_tty)
}

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

/// A command error ready for rendering in any mode.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl CliError {
    #[must_use]
    pub fn new(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            message: message.into(),
            code,
            hint: None,
        }
    }

    #[must_use]
    pub fn from_store(err: &StoreError) -> Self {
        Self {
            message: err.to_string(),
            code: err.code().code(),
            hint: err.hint(),
        }
    }
}

/// Render a success message in the requested mode.
pub fn render_success(mode: OutputMode, message: &str) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let body = serde_json::json!({ "ok": true, "message": message });
            println!("{}", serde_json::to_string(&body)?);
        }
        OutputMode::Pretty | OutputMode::Text => println!("{message}"),
    }
    Ok(())
}

/// Render an error in the requested mode (to stderr for human modes,
/// structured JSON on stdout for scripts).
pub fn render_error(mode: OutputMode, err: &CliError) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let body = serde_json::json!({ "ok": false, "error": err });
            println!("{}", serde_json::to_string(&body)?);
        }
        OutputMode::Pretty | OutputMode::Text => {
            eprintln!("error[{}]: {}", err.code, err.message);
            if let Some(hint) = err.hint {
                eprintln!("  hint: {hint}");
            }
        }
    }
    Ok(())
}

/// Serialize any value as one JSON object on stdout.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve_output_mode_inner, CliError, OutputMode};
    use innkeep_core::error::StoreError;
    use innkeep_core::model::ticket_id::TicketId;

    #[test]
    fn json_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(true, Some("pretty"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn env_var_overrides_tty_default() {
        assert_eq!(
            resolve_output_mode_inner(false, Some("json"), true),
            OutputMode::Json
        );
        assert_eq!(
            resolve_output_mode_inner(false, Some("text"), true),
            OutputMode::Text
        );
    }

    #[test]
    fn unknown_env_value_falls_back_to_tty_detection() {
        assert_eq!(
            resolve_output_mode_inner(false, Some("fancy"), true),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(false, Some("fancy"), false),
            OutputMode::Text
        );
    }

    #[test]
    fn store_errors_carry_code_and_hint() {
        let err = StoreError::TicketNotFound(TicketId::from_seq(1234));
        let cli = CliError::from_store(&err);
        assert_eq!(cli.code, "E2001");
        assert!(cli.hint.is_some());
        assert!(cli.message.contains("T-1234"));
    }
}
