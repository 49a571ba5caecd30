//! Indentation helpers for generated code.

use crate::trivia::leading_whitespace;

/// The indentation carried by the last line of `text`'s leading whitespace.
///
/// For `"\n\n    const x = 1;"` this is `"    "`: the newlines belong to the
/// preceding lines, only the trailing run is the indentation of the first
/// significant line.
pub fn indentation_of(text: &str) -> &str {
    let ws = leading_whitespace(text);
    match memchr::memrchr(b'\n', ws.as_bytes()) {
        Some(idx) => &ws[idx + 1..],
        None => ws,
    }
}

/// Re-indent a block of generated code to `indent`.
///
/// Leading blank lines are dropped and the indentation common to all
/// non-blank lines is removed before `indent` is applied. Blank lines stay
/// empty. The first line receives `indent` only when `indent_first_line` is
/// set, for text inserted after existing indentation on the same line.
pub fn reindent(text: &str, indent: &str, indent_first_line: bool) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .skip_while(|line| line.trim().is_empty())
        .collect();

    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut result = String::with_capacity(text.len() + lines.len() * indent.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        if line.trim().is_empty() {
            continue;
        }
        if i > 0 || indent_first_line {
            result.push_str(indent);
        }
        result.push_str(&line[common.min(line.len())..]);
    }
    result
}
