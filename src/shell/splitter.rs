//! Split a single command line into a command and its arguments.

use crate::command::Command;

/// Split one line of text into a [`Command`], shell-style.
///
/// Handles single quotes, double quotes, nested quotes of the opposite kind,
/// and backslash escaping. No expansion, globbing, or subshells. Total over
/// all inputs: unterminated quotes are treated as closed at end of string and
/// a dangling backslash is dropped.
pub fn split_command(input: &str) -> Command {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut token_started = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escape_next = false;
    // Once a quote shows up mid-token (--flag="x"), quote characters are kept
    // literally for the rest of the token instead of acting as delimiters.
    let mut keep_delims = false;

    for c in input.chars() {
        if escape_next {
            current.push(c);
            token_started = true;
            escape_next = false;
            continue;
        }

        if c == '\\' {
            escape_next = true;
            continue;
        }

        if c == '"' && !in_single_quote {
            if token_started && !in_double_quote {
                keep_delims = true;
            }
            in_double_quote = !in_double_quote;
            token_started = true;
            if keep_delims {
                current.push(c);
            }
            continue;
        }

        if c == '\'' && !in_double_quote {
            if token_started && !in_single_quote {
                keep_delims = true;
            }
            in_single_quote = !in_single_quote;
            token_started = true;
            if keep_delims {
                current.push(c);
            }
            continue;
        }

        if c.is_whitespace() && !in_single_quote && !in_double_quote {
            if token_started {
                tokens.push(std::mem::take(&mut current));
                token_started = false;
                keep_delims = false;
            }
            continue;
        }

        token_started = true;
        current.push(c);
    }

    // Unterminated quotes: whatever accumulated still counts as a token.
    if token_started {
        tokens.push(current);
    }

    Command::from_tokens(tokens)
}
