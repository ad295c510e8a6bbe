//! Tolerant parser for argument blobs copied out of a browser console.
//!
//! Two renderings are accepted: a JSON array literal and a parenthesized tuple
//! whose elements are JSON-ish values. Console output is rarely valid JSON
//! (BigInt suffixes, unquoted keys, single quotes), so every element is
//! normalized before it reaches `serde_json`.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("argument blob is empty")]
    Empty,
    #[error("unclosed '{open}' opened at byte {position}")]
    Unbalanced { open: char, position: usize },
    #[error("unexpected '{found}' at byte {position}")]
    UnexpectedClose { found: char, position: usize },
    #[error("unterminated string starting at byte {position}")]
    UnterminatedString { position: usize },
    #[error("element {index} is empty")]
    EmptyElement { index: usize },
}

/// Rendering of the pasted blob, picked from its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobFormat {
    JsonArray,
    Tuple,
}

impl BlobFormat {
    pub fn detect(text: &str) -> Option<Self> {
        match text.trim_start().chars().next()? {
            '[' => Some(Self::JsonArray),
            _ => Some(Self::Tuple),
        }
    }
}

/// Result of a single pass over a slice: depth-zero commas and the byte
/// where the first top-level group closes.
struct Scan {
    commas: Vec<usize>,
    first_close: Option<usize>,
}

fn closer_for(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Walks `text` once, tracking bracket depth and string state. `offset` is
/// added to every reported position so errors point into the whole blob.
fn scan(text: &str, offset: usize) -> Result<Scan, BlobError> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut quote: Option<(char, usize)> = None;
    let mut escaped = false;
    let mut commas = Vec::new();
    let mut first_close = None;

    for (i, ch) in text.char_indices() {
        if let Some((q, _)) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some((ch, i)),
            '{' | '[' | '(' => stack.push((ch, i)),
            '}' | ']' | ')' => match stack.pop() {
                Some((open, _)) if closer_for(open) == ch => {
                    if stack.is_empty() && first_close.is_none() {
                        first_close = Some(i);
                    }
                }
                _ => {
                    return Err(BlobError::UnexpectedClose {
                        found: ch,
                        position: offset + i,
                    })
                }
            },
            ',' if stack.is_empty() => commas.push(i),
            _ => {}
        }
    }

    if let Some((_, position)) = quote {
        return Err(BlobError::UnterminatedString {
            position: offset + position,
        });
    }
    if let Some(&(open, position)) = stack.last() {
        return Err(BlobError::Unbalanced {
            open,
            position: offset + position,
        });
    }

    Ok(Scan {
        commas,
        first_close,
    })
}

/// Parses a pasted blob into its top-level argument list.
///
/// Integers come back as JSON strings so that 256-bit values keep every
/// digit; the typed coercion layer parses them. Error positions are byte
/// offsets into `text` as given, leading whitespace included.
pub fn parse_blob(text: &str) -> Result<Vec<Value>, BlobError> {
    let lead = text.len() - text.trim_start().len();
    let trimmed = text.trim();
    let format = BlobFormat::detect(trimmed).ok_or(BlobError::Empty)?;
    debug!(?format, len = trimmed.len(), "parsing argument blob");

    let outer = scan(trimmed, lead)?;
    let wrapped = matches!(trimmed.chars().next(), Some('[' | '('))
        && outer.first_close == Some(trimmed.len() - 1);

    let (body, offset) = if wrapped {
        (&trimmed[1..trimmed.len() - 1], lead + 1)
    } else {
        (trimmed, lead)
    };

    let elements = split_top_level_at(body, offset)?;
    debug!("split blob into {} top-level elements", elements.len());

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect()
}

/// Splits `body` on commas that sit outside every bracket and string.
pub fn split_top_level(body: &str) -> Result<Vec<&str>, BlobError> {
    split_top_level_at(body, 0)
}

fn split_top_level_at(body: &str, offset: usize) -> Result<Vec<&str>, BlobError> {
    let scan = scan(body, offset)?;

    let mut elements = Vec::with_capacity(scan.commas.len() + 1);
    let mut start = 0;
    for comma in scan.commas {
        elements.push(body[start..comma].trim());
        start = comma + 1;
    }
    let last = body[start..].trim();
    if !last.is_empty() {
        elements.push(last);
    }

    Ok(elements)
}

/// Parses one element. Falls back to the raw text as a string when even the
/// normalized rendering is not JSON.
pub fn parse_element(index: usize, text: &str) -> Result<Value, BlobError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BlobError::EmptyElement { index });
    }

    let normalized = normalize(text);
    match serde_json::from_str::<Value>(&normalized) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!(index, error = %e, "element is not JSON after normalization, keeping raw text");
            Ok(Value::String(text.to_string()))
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'
}

/// Rewrites console-flavored text into JSON.
///
/// Single-quoted strings become double-quoted, tuple parentheses become
/// array brackets, and every bareword outside a string (unquoted keys, hex
/// literals, integers, `123n` BigInts) is quoted. `true`, `false` and `null`
/// pass through.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '\'' => {
                out.push('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    if escaped {
                        escaped = false;
                        if c != '\'' {
                            out.push('\\');
                        }
                        out.push(c);
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '\'' {
                        break;
                    } else if c == '"' {
                        out.push_str("\\\"");
                    } else {
                        out.push(c);
                    }
                }
                out.push('"');
            }
            '(' => out.push('['),
            ')' => out.push(']'),
            c if c.is_ascii_alphanumeric()
                || c == '_'
                || (c == '-' && chars.peek().is_some_and(|n| n.is_ascii_digit())) =>
            {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if !is_word_char(next) {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                push_bareword(&mut out, &word);
            }
            _ => out.push(ch),
        }
    }

    out
}

fn push_bareword(out: &mut String, word: &str) {
    if matches!(word, "true" | "false" | "null") {
        out.push_str(word);
        return;
    }

    // BigInt literal: digits with a trailing `n`
    let digits = word.strip_suffix('n').filter(|d| {
        let d = d.strip_prefix('-').unwrap_or(d);
        !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit())
    });

    out.push('"');
    out.push_str(digits.unwrap_or(word));
    out.push('"');
}
