// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The `{ "title", "children" }` JSON shape a model returns for a mind map.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::MindNode;

/// Wire shape of one node. `children` may be absent, `null`, or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MindNodeJson {
    /// Node label. May contain inline math delimited by `$...$` or `$$...$$`.
    pub title: String,
    /// Sub-topics in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MindNodeJson>>,
}

impl From<MindNodeJson> for MindNode {
    fn from(value: MindNodeJson) -> Self {
        let children = value
            .children
            .unwrap_or_default()
            .into_iter()
            .map(MindNode::from)
            .collect();
        MindNode::branch(value.title, children)
    }
}

impl From<&MindNode> for MindNodeJson {
    fn from(node: &MindNode) -> Self {
        let children = if node.is_leaf() {
            None
        } else {
            Some(node.children().iter().map(MindNodeJson::from).collect())
        };
        Self {
            title: node.title().to_owned(),
            children,
        }
    }
}

/// Accepted top-level documents: the root object, or a one-element array holding it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Root(MindNodeJson),
    Many(Vec<MindNodeJson>),
    Null(()),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MindTreeJsonError {
    Empty,
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
    MissingRoot,
    MultipleRoots {
        count: usize,
    },
}

impl fmt::Display for MindTreeJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("mind map response is empty"),
            Self::InvalidJson {
                line,
                column,
                message,
            } => write!(
                f,
                "invalid mind map JSON at line {line}, column {column}: {message}"
            ),
            Self::MissingRoot => f.write_str("mind map JSON has no root node"),
            Self::MultipleRoots { count } => {
                write!(f, "mind map JSON has {count} root nodes (expected 1)")
            }
        }
    }
}

impl std::error::Error for MindTreeJsonError {}

impl From<serde_json::Error> for MindTreeJsonError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Parses a model response into a normalized tree.
///
/// Surrounding whitespace and a Markdown code fence (```` ```json ````) are stripped first.
pub fn parse_mind_tree_json(input: &str) -> Result<MindNode, MindTreeJsonError> {
    let body = strip_code_fence(input.trim());
    if body.is_empty() {
        return Err(MindTreeJsonError::Empty);
    }

    // Validate as plain JSON first so syntax errors keep their position instead of collapsing
    // into the untagged enum's generic message.
    let value = serde_json::from_str::<serde_json::Value>(body)?;
    let document = serde_json::from_value::<Document>(value)?;

    let root = match document {
        Document::Root(root) => root,
        Document::Null(()) => return Err(MindTreeJsonError::MissingRoot),
        Document::Many(mut roots) => match roots.len() {
            0 => return Err(MindTreeJsonError::MissingRoot),
            1 => roots.remove(0),
            count => return Err(MindTreeJsonError::MultipleRoots { count }),
        },
    };

    let root = MindNode::from(root);
    tracing::debug!(nodes = root.node_count(), "parsed mind map JSON");
    Ok(root)
}

/// Serializes `root` in the canonical wire shape (leaves omit `children`).
pub fn export_mind_tree_json(root: &MindNode, pretty: bool) -> Result<String, serde_json::Error> {
    let doc = MindNodeJson::from(root);
    if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
}

/// JSON Schema of the accepted node shape, suitable as a structured-output response schema.
pub fn mind_tree_json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(MindNodeJson);
    serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
}

fn strip_code_fence(text: &str) -> &str {
    const FENCE: &[u8] = b"```";

    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`json`, `JSON`, ...) up to the end of the opening line.
    let rest = match memchr::memchr(b'\n', rest.as_bytes()) {
        Some(newline) => &rest[newline + 1..],
        None => return text,
    };
    match memchr::memmem::rfind(rest.as_bytes(), FENCE) {
        Some(close) => rest[..close].trim(),
        None => rest.trim(),
    }
}
