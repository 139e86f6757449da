//! Parse multi-line scripts into an ordered list of commands.

use crate::command::Command;

use super::splitter::split_command;

/// Parse a multi-line script into commands.
///
/// Lines are comment-stripped at the first unescaped `#`, trimmed, and merged
/// into logical lines: a trailing backslash continues onto the next line, and
/// blank lines inside a logical line are absorbed. Each logical line goes
/// through [`split_command`]. Blank and comment-only lines produce nothing.
pub fn parse_script(script: &str) -> Vec<Command> {
    let lines: Vec<String> = script
        .split('\n')
        .map(|line| strip_comment(line).trim().to_string())
        .collect();

    let mut commands = Vec::new();
    let mut cursor = 0;
    while cursor < lines.len() {
        if lines[cursor].is_empty() {
            cursor += 1;
            continue;
        }

        // Grow the window while the last line continues (trailing backslash)
        // or the next line is blank.
        let mut end = cursor;
        while end + 1 < lines.len() && (lines[end].ends_with('\\') || lines[end + 1].is_empty()) {
            end += 1;
        }

        // Joined directly: the continuation backslash escapes the first
        // character of the next line, which is how `foo \` + `bar` becomes
        // the two tokens `foo` and `bar`.
        let logical = lines[cursor..=end].concat();
        commands.push(split_command(&logical));
        cursor = end + 1;
    }

    commands
}

/// Cut a line at the first unescaped `#`.
///
/// Quoting is ignored here: a `#` inside a quoted string still starts a
/// comment. `\#` survives and later unescapes to a literal `#`.
fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '#' => return &line[..idx],
            _ => {}
        }
    }
    line
}
