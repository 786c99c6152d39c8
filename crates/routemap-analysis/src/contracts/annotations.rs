//! Mapping annotation extractor.
//!
//! Finds `@RequestMapping` and the five verb annotations in raw source text
//! and isolates their argument spans. Argument spans are delimited by
//! balanced parentheses, skipping string and char literals, so they may span
//! lines and contain nested calls.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{AnnotationKind, AnnotationMatch, FileAnnotations};

static ANNOTATION_RE: OnceLock<Regex> = OnceLock::new();

fn annotation_re() -> &'static Regex {
    ANNOTATION_RE.get_or_init(|| {
        Regex::new(
            r"@(RequestMapping|GetMapping|PostMapping|PutMapping|DeleteMapping|PatchMapping)\b",
        )
        .expect("annotation pattern is valid")
    })
}

/// Locate the base-path annotation and all verb annotations of one file.
///
/// Only the first `@RequestMapping` is kept. An annotation whose opening
/// parenthesis is never closed is dropped.
pub fn extract_annotations(text: &str) -> FileAnnotations {
    let mut annotations = FileAnnotations::default();
    let bytes = text.as_bytes();

    // Line counting is incremental over the ordered matches.
    let mut line: u32 = 1;
    let mut counted_to = 0;

    for caps in annotation_re().captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(kind) = AnnotationKind::from_name(name.as_str()) else {
            continue;
        };

        line += bytecount_newlines(&bytes[counted_to..whole.start()]);
        counted_to = whole.start();

        let args = if bytes.get(whole.end()) == Some(&b'(') {
            match find_closing_paren(bytes, whole.end()) {
                Some(close) => text[whole.end() + 1..close].to_string(),
                None => {
                    tracing::debug!(line, annotation = kind.name(), "unbalanced annotation arguments");
                    continue;
                }
            }
        } else {
            String::new()
        };

        let found = AnnotationMatch { kind, args, line };
        if kind == AnnotationKind::RequestMapping {
            if annotations.base.is_none() {
                annotations.base = Some(found);
            }
        } else {
            annotations.methods.push(found);
        }
    }

    annotations
}

fn bytecount_newlines(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|&&b| b == b'\n').count() as u32
}

/// Index of the `)` matching the `(` at `open`.
pub(crate) fn find_closing_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            b'"' | b'\'' => {
                if let Some(next) = skip_literal(bytes, i) {
                    i = next;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Skip a quoted literal starting at `start`, returning the index just past
/// its closing quote. Literals do not span lines; an opening quote with no
/// closing quote on the same line returns `None`.
pub(crate) fn skip_literal(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = *bytes.get(start)?;
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return None,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
