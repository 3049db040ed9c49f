// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Content renderers for computed mind-map layouts.
//!
//! SVG is what the app shows in the browser; the Unicode renderer draws the same tree on a
//! terminal [`Canvas`]; the JSON document exposes raw coordinates to other clients.

use std::fmt;
use std::str::FromStr;

use crate::layout::{LayoutConfig, TreeLayoutEngine, TreeLayoutError};
use crate::model::MindNode;

pub mod canvas;
pub mod json;
pub mod svg;
pub mod text;
pub mod unicode;

pub use canvas::{Canvas, CanvasError, Edges};
pub use json::{layout_document, render_layout_json, LayoutDocument};
pub use svg::{render_mind_map_svg, SvgRenderOptions};
pub use text::{split_math, LabelSegment};
pub use unicode::{
    render_mind_map_unicode, render_mind_map_unicode_with_options, UnicodeRenderError,
    UnicodeRenderOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "svg" => Ok(Self::Svg),
            "text" | "unicode" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    pub svg: SvgRenderOptions,
    pub unicode: UnicodeRenderOptions,
    pub pretty_json: bool,
}

#[derive(Debug)]
pub enum MindMapRenderError {
    Layout(TreeLayoutError),
    /// Text output failed; a node-limit breach arrives here as `UnicodeRenderError::Layout`.
    Unicode(UnicodeRenderError),
    Json(serde_json::Error),
}

impl fmt::Display for MindMapRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout failed: {err}"),
            Self::Unicode(err) => write!(f, "text render failed: {err}"),
            Self::Json(err) => write!(f, "json export failed: {err}"),
        }
    }
}

impl std::error::Error for MindMapRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Unicode(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<TreeLayoutError> for MindMapRenderError {
    fn from(value: TreeLayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<UnicodeRenderError> for MindMapRenderError {
    fn from(value: UnicodeRenderError) -> Self {
        Self::Unicode(value)
    }
}

impl From<serde_json::Error> for MindMapRenderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Lays out `root` and renders it in `format`.
///
/// SVG and JSON use `config` as given. Text output works in terminal cells and derives its own
/// constants from `options.unicode`, so `config` only contributes its `max_nodes` guard there.
pub fn render_mind_map(
    root: &MindNode,
    config: &LayoutConfig,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, MindMapRenderError> {
    match format {
        OutputFormat::Svg => {
            let layout = TreeLayoutEngine::new(*config)?.layout(root)?;
            Ok(render_mind_map_svg(&layout, &options.svg))
        }
        OutputFormat::Json => {
            let layout = TreeLayoutEngine::new(*config)?.layout(root)?;
            Ok(render_layout_json(&layout, options.pretty_json)?)
        }
        OutputFormat::Text => {
            let text = unicode::render_with_node_limit(root, options.unicode, config.max_nodes)?;
            Ok(text)
        }
    }
}
