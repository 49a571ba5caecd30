//! Trivia scanning.
//!
//! Trivia is the whitespace and comments that precede a token. Syntax nodes
//! store their full start (`pos`, trivia included); the first significant
//! character is found by skipping trivia from there.

/// Skip whitespace, `//` comments and `/* */` comments starting at `pos`.
///
/// Returns the offset of the first significant character, or `end` if only
/// trivia remains before `end`. An unclosed block comment runs to `end`.
pub fn skip_trivia(source: &str, pos: u32, end: u32) -> u32 {
    let bytes = source.as_bytes();
    let end = (end as usize).min(bytes.len());
    let mut pos = pos as usize;

    while pos < end {
        let ch = bytes[pos];

        if ch == b' ' || ch == b'\t' || ch == b'\r' || ch == b'\n' || ch == 0x0B || ch == 0x0C {
            pos += 1;
            continue;
        }

        if ch == b'/' && pos + 1 < end {
            let next = bytes[pos + 1];

            if next == b'/' {
                pos += 2;
                while pos < end && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
                    pos += 1;
                }
                continue;
            }

            if next == b'*' {
                pos += 2;
                let mut closed = false;
                while pos + 1 < end {
                    if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
                        pos += 2;
                        closed = true;
                        break;
                    }
                    pos += 1;
                }
                if !closed {
                    pos = end;
                }
                continue;
            }
        }

        break;
    }

    pos as u32
}

/// The run of whitespace at the start of `text` (newlines included).
pub fn leading_whitespace(text: &str) -> &str {
    let trimmed = text.trim_start();
    &text[..text.len() - trimmed.len()]
}

/// Whether `offset` sits at the start of a line in `source`.
pub fn is_line_start(source: &str, offset: u32) -> bool {
    let offset = offset as usize;
    offset == 0 || source.as_bytes().get(offset - 1) == Some(&b'\n')
}
