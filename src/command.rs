//! The structured result of splitting a command line.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Characters that force a token to be re-quoted when rendering.
static NEEDS_QUOTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s'"\\#]"#).expect("quoting pattern is valid")
});

/// One parsed command: the command name and its arguments.
///
/// A transient, immutable value built fresh for each split. `cmd` is empty
/// when the input held no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// First quote-aware token of the line.
    pub cmd: String,
    /// Remaining tokens, in order.
    pub args: Vec<String>,
}

impl Command {
    /// Build from an ordered token list. The first token becomes `cmd`.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut tokens = tokens.into_iter();
        let cmd = tokens.next().unwrap_or_default();
        Self {
            cmd,
            args: tokens.collect(),
        }
    }

    /// True when the input held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.cmd.is_empty() && self.args.is_empty()
    }

    /// All tokens in order, `cmd` first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.cmd.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

/// Renders a line that splits back into the same tokens.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for (i, token) in self.tokens().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&quote_token(token))?;
        }
        Ok(())
    }
}

/// Single-quote a token when it contains delimiters, escaping the characters
/// the splitter treats specially inside quotes.
fn quote_token(token: &str) -> String {
    if !token.is_empty() && !NEEDS_QUOTING.is_match(token) {
        return token.to_string();
    }
    let escaped = token.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
