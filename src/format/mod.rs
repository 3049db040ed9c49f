// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mind map input formats.
//!
//! Every format normalizes into [`MindNode`] before anything is laid out.

use std::fmt;
use std::str::FromStr;

use crate::model::MindNode;

pub mod json;
pub mod outline;

pub use json::{
    export_mind_tree_json, mind_tree_json_schema, parse_mind_tree_json, MindNodeJson,
    MindTreeJsonError,
};
pub use outline::{parse_outline, OutlineParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Outline,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "outline" | "mindmap" => Ok(Self::Outline),
            other => Err(format!("unknown input format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MindTreeParseError {
    Json(MindTreeJsonError),
    Outline(OutlineParseError),
}

impl fmt::Display for MindTreeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "json: {err}"),
            Self::Outline(err) => write!(f, "outline: {err}"),
        }
    }
}

impl std::error::Error for MindTreeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Outline(err) => Some(err),
        }
    }
}

impl From<MindTreeJsonError> for MindTreeParseError {
    fn from(value: MindTreeJsonError) -> Self {
        Self::Json(value)
    }
}

impl From<OutlineParseError> for MindTreeParseError {
    fn from(value: OutlineParseError) -> Self {
        Self::Outline(value)
    }
}

pub fn parse_mind_tree(input: &str, format: InputFormat) -> Result<MindNode, MindTreeParseError> {
    match format {
        InputFormat::Json => Ok(parse_mind_tree_json(input)?),
        InputFormat::Outline => Ok(parse_outline(input)?),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_mind_tree, InputFormat, MindTreeParseError};
    use crate::model::MindNode;

    #[test]
    fn dispatches_on_format() {
        let json = parse_mind_tree(
            r#"{"title": "A", "children": [{"title": "B"}]}"#,
            InputFormat::Json,
        )
        .expect("json");
        let outline = parse_mind_tree("A\n  B\n", InputFormat::Outline).expect("outline");
        assert_eq!(json, outline);
        assert_eq!(json, MindNode::branch("A", vec![MindNode::leaf("B")]));
    }

    #[test]
    fn wraps_errors_with_their_format() {
        let err = parse_mind_tree("", InputFormat::Outline).unwrap_err();
        assert!(matches!(err, MindTreeParseError::Outline(_)));
        assert_eq!(err.to_string(), "outline: outline has no nodes");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("json".parse::<InputFormat>(), Ok(InputFormat::Json));
        assert_eq!("mindmap".parse::<InputFormat>(), Ok(InputFormat::Outline));
        assert!("yaml".parse::<InputFormat>().is_err());
    }
}
