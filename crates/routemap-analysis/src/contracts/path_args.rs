//! Path-argument parser.
//!
//! Turns the raw argument text of one mapping annotation into its path
//! fragments. A `value = ...` or `path = ...` attribute takes precedence over
//! positional literals. Escapes are decoded the way the compiler would.

use routemap_core::config::PathPolicy;

use super::annotations::skip_literal;
use super::types::PathSet;

/// Parse the path fragments declared by one annotation's argument text.
pub fn parse_paths(arg_text: &str, policy: PathPolicy) -> PathSet {
    let normalized = normalize_args(arg_text);
    let target = named_path_attr(&normalized).unwrap_or(normalized.as_str());

    let mut literals = extract_literals(target);
    if policy == PathPolicy::FirstLiteral {
        literals.truncate(1);
    }
    PathSet::from_fragments(literals)
}

/// Collapse whitespace runs and drop one trailing comma left over from
/// multi-line formatting.
fn normalize_args(arg_text: &str) -> String {
    let collapsed = arg_text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_suffix(',') {
        Some(stripped) => stripped.to_string(),
        None => collapsed,
    }
}

/// Right-hand side of the first top-level `value =` / `path =` attribute.
fn named_path_attr(args: &str) -> Option<&str> {
    split_top_level(args).into_iter().find_map(|segment| {
        let (name, value) = segment.split_once('=')?;
        match name.trim() {
            "value" | "path" => Some(value.trim()),
            _ => None,
        }
    })
}

/// Split on commas outside literals, braces, brackets, and parentheses.
fn split_top_level(args: &str) -> Vec<&str> {
    let bytes = args.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                if let Some(next) = skip_literal(bytes, i) {
                    i = next;
                    continue;
                }
            }
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                segments.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&args[start..]);
    segments
}

/// Every double-quoted literal in `text`, decoded, in order.
/// Char literals are stepped over so `'"'` never opens a string.
fn extract_literals(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut literals = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => match skip_literal(bytes, i) {
                Some(end) => {
                    literals.push(unescape(&text[i + 1..end - 1]));
                    i = end;
                }
                // Unterminated: nothing after it can be a well-formed literal
                None => break,
            },
            b'\'' => match skip_literal(bytes, i) {
                Some(end) => i = end,
                None => i += 1,
            },
            _ => i += 1,
        }
    }
    literals
}

/// Decode backslash escapes of a string literal body.
///
/// Handles the single-character escapes, octal escapes up to `\377`, and
/// `\uXXXX` (surrogate pairs combined). Anything else is kept verbatim.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&next) = chars.peek() else {
            out.push('\\');
            break;
        };
        match next {
            'n' | 't' | 'r' | 'b' | 'f' | 's' | '"' | '\'' | '\\' => {
                chars.next();
                out.push(match next {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    's' => ' ',
                    other => other,
                });
            }
            '0'..='7' => {
                // Up to three digits when the first is 0-3, else up to two
                let max_digits = if next <= '3' { 3 } else { 2 };
                let mut value = 0u32;
                let mut digits = 0;
                while digits < max_digits {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'u' => match decode_unicode(&mut chars) {
                Some(decoded) => out.push(decoded),
                None => out.push('\\'),
            },
            _ => out.push('\\'),
        }
    }
    out
}

/// Decode `u+XXXX` following a backslash, plus a trailing low surrogate.
/// On failure nothing is consumed.
fn decode_unicode(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<char> {
    let mut lookahead = chars.clone();
    let high = read_unicode_unit(&mut lookahead)?;

    let decoded = if (0xD800..0xDC00).contains(&high) {
        let mut pair = lookahead.clone();
        let low = (pair.next() == Some('\\'))
            .then(|| read_unicode_unit(&mut pair))
            .flatten()
            .filter(|low| (0xDC00..0xE000).contains(low));
        match low {
            Some(low) => {
                lookahead = pair;
                char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
            }
            None => Some(char::REPLACEMENT_CHARACTER),
        }
    } else if (0xDC00..0xE000).contains(&high) {
        Some(char::REPLACEMENT_CHARACTER)
    } else {
        char::from_u32(high)
    };

    *chars = lookahead;
    decoded
}

fn read_unicode_unit(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    if chars.next() != Some('u') {
        return None;
    }
    while chars.peek() == Some(&'u') {
        chars.next();
    }
    let mut value = 0u32;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
