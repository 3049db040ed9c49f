// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Indentation-based outlines, including Mermaid `mindmap` bodies and Markdown bullet lists.

use std::fmt;

use crate::model::MindNode;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineParseError {
    Empty,
    MultipleRoots { line_no: usize, line: String },
    EmptyLabel { line_no: usize, line: String },
}

impl fmt::Display for OutlineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("outline has no nodes"),
            Self::MultipleRoots { line_no, line } => write!(
                f,
                "second root on line {line_no}: {line} (indent it below the first line)"
            ),
            Self::EmptyLabel { line_no, line } => {
                write!(f, "empty node label on line {line_no}: {line}")
            }
        }
    }
}

impl std::error::Error for OutlineParseError {}

struct OpenNode {
    indent: usize,
    node: MindNode,
}

/// Parses an indented outline into a tree.
///
/// - An optional leading `mindmap` header line is skipped.
/// - Blank lines and `%%` comment lines are ignored.
/// - Each line attaches to the nearest preceding line with a smaller indent.
/// - A leading bullet (`-`, `*`, `+`) is stripped from labels.
/// - Under a `mindmap` header, Mermaid shape wrappers (`id((text))`, `id[text]`, ...) are
///   stripped too. Plain outlines keep brackets as written, so `f(x)` stays `f(x)`.
pub fn parse_outline(input: &str) -> Result<MindNode, OutlineParseError> {
    let mut stack = Vec::<OpenNode>::new();
    let mut saw_content = false;
    let mut mermaid = false;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }
        if !saw_content {
            saw_content = true;
            if trimmed == "mindmap" {
                mermaid = true;
                continue;
            }
        }

        let indent = indent_width(raw_line);
        let title = node_label(trimmed, mermaid);
        if title.is_empty() {
            return Err(OutlineParseError::EmptyLabel {
                line_no,
                line: trimmed.to_owned(),
            });
        }

        while stack.len() > 1 && stack.last().is_some_and(|open| open.indent >= indent) {
            close_top(&mut stack);
        }
        if stack.first().is_some_and(|root| root.indent >= indent) {
            return Err(OutlineParseError::MultipleRoots {
                line_no,
                line: trimmed.to_owned(),
            });
        }

        stack.push(OpenNode {
            indent,
            node: MindNode::leaf(title),
        });
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    let root = stack
        .pop()
        .map(|open| open.node)
        .ok_or(OutlineParseError::Empty)?;
    tracing::debug!(nodes = root.node_count(), "parsed outline");
    Ok(root)
}

/// Pops the innermost open node into its parent. The root is never popped here.
fn close_top(stack: &mut Vec<OpenNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.node.push_child(done.node);
        }
    }
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
    }
    width
}

fn node_label(line: &str, mermaid: bool) -> String {
    let line = strip_bullet(line);
    let line = if mermaid { strip_shape(line) } else { line };
    line.trim().to_owned()
}

fn strip_bullet(line: &str) -> &str {
    if matches!(line, "-" | "*" | "+") {
        return "";
    }
    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return rest.trim_start();
        }
    }
    line
}

/// Reduces `id((text))`, `id(text)`, `id[text]`, `id{{text}}`, `id))text((`, `id)text(` to
/// `text`. Anything else is returned unchanged.
fn strip_shape(label: &str) -> &str {
    const SHAPES: [(&str, &str); 6] = [
        ("((", "))"),
        ("{{", "}}"),
        ("))", "(("),
        ("(", ")"),
        ("[", "]"),
        (")", "("),
    ];

    for (open, close) in SHAPES {
        let Some(start) = label.find(open) else {
            continue;
        };
        let id = &label[..start];
        if id.chars().any(char::is_whitespace) || !label.ends_with(close) {
            continue;
        }
        let inner_start = start + open.len();
        let inner_end = label.len() - close.len();
        if inner_start > inner_end {
            continue;
        }
        return &label[inner_start..inner_end];
    }
    label
}
