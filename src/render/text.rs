// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    match max_len {
        0 => String::new(),
        _ if text_len(text) <= max_len => text.to_owned(),
        1 => "…".to_owned(),
        _ => {
            let mut out = text.chars().take(max_len - 1).collect::<String>();
            out.push('…');
            out
        }
    }
}

/// A run of a node title: plain text or a delimited math expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSegment<'a> {
    Text(&'a str),
    /// `source` keeps its `$` delimiters; `display` is true for `$$...$$`.
    Math { source: &'a str, display: bool },
}

fn math_regex() -> &'static Regex {
    static MATH: OnceLock<Regex> = OnceLock::new();
    MATH.get_or_init(|| {
        Regex::new(r"\$\$[^$]+?\$\$|\$[^$\n]+?\$").expect("math regex is valid")
    })
}

/// Splits a title into text and math runs. Unbalanced `$` stays in the text.
pub fn split_math(title: &str) -> Vec<LabelSegment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for found in math_regex().find_iter(title) {
        if found.start() > last {
            segments.push(LabelSegment::Text(&title[last..found.start()]));
        }
        segments.push(LabelSegment::Math {
            source: found.as_str(),
            display: found.as_str().starts_with("$$"),
        });
        last = found.end();
    }
    if last < title.len() {
        segments.push(LabelSegment::Text(&title[last..]));
    }
    segments
}

/// Unbreakable piece of a wrapped label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelToken<'a> {
    Word(&'a str),
    Math(&'a str),
}

impl LabelToken<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Word(text) | Self::Math(text) => text_len(text),
        }
    }
}

/// Greedy word wrap that never splits a math run.
///
/// Produces at most `max_lines` lines of roughly `max_chars` characters; when text is cut off the
/// last line ends with an `…` word. A single token wider than a line gets a line of its own.
pub(crate) fn wrap_label(
    title: &str,
    max_chars: usize,
    max_lines: usize,
) -> Vec<Vec<LabelToken<'_>>> {
    let max_chars = max_chars.max(1);
    let max_lines = max_lines.max(1);

    let mut tokens = Vec::new();
    for segment in split_math(title) {
        match segment {
            LabelSegment::Text(text) => {
                tokens.extend(text.split_whitespace().map(LabelToken::Word));
            }
            LabelSegment::Math { source, .. } => tokens.push(LabelToken::Math(source)),
        }
    }

    let mut lines = Vec::<Vec<LabelToken<'_>>>::new();
    let mut current = Vec::<LabelToken<'_>>::new();
    let mut current_len = 0usize;
    let mut truncated = false;

    for token in tokens {
        let mut needed = if current.is_empty() {
            token.len()
        } else {
            current_len + 1 + token.len()
        };
        if !current.is_empty() && needed > max_chars {
            if lines.len() + 1 == max_lines {
                truncated = true;
                break;
            }
            lines.push(std::mem::take(&mut current));
            needed = token.len();
        }
        current_len = needed;
        current.push(token);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if truncated {
        if let Some(last) = lines.last_mut() {
            last.push(LabelToken::Word("…"));
        }
    }
    lines
}
