// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::{LayoutConfig, TreeLayout, TreeLayoutEngine, TreeLayoutError};
use crate::model::MindNode;

use super::canvas::{Canvas, CanvasError};
use super::text::truncate_with_ellipsis;

const BOX_HEIGHT: usize = 3;
const MIN_BOX_WIDTH: usize = 5;
const MIN_COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeRenderOptions {
    /// Outer width of every node box, borders included.
    pub box_width: usize,
    /// Blank columns between a parent column and its children's column.
    pub column_gap: usize,
    /// Blank rows between neighbouring leaf boxes.
    pub row_gap: usize,
}

impl Default for UnicodeRenderOptions {
    fn default() -> Self {
        Self {
            box_width: 22,
            column_gap: 6,
            row_gap: 1,
        }
    }
}

impl UnicodeRenderOptions {
    /// Cell-unit layout constants for these options.
    pub fn layout_config(&self) -> LayoutConfig {
        let box_width = self.box_width.max(MIN_BOX_WIDTH);
        let column_gap = self.column_gap.max(MIN_COLUMN_GAP);
        LayoutConfig {
            node_width: box_width as f64,
            node_height: BOX_HEIGHT as f64,
            horizontal_separation: (box_width + column_gap) as f64,
            vertical_separation: self.row_gap as f64,
            margin: 0.0,
            ..LayoutConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnicodeRenderError {
    Layout(TreeLayoutError),
    Canvas(CanvasError),
}

impl fmt::Display for UnicodeRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for UnicodeRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<TreeLayoutError> for UnicodeRenderError {
    fn from(value: TreeLayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<CanvasError> for UnicodeRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

pub fn render_mind_map_unicode(root: &MindNode) -> Result<String, UnicodeRenderError> {
    render_mind_map_unicode_with_options(root, UnicodeRenderOptions::default())
}

/// Draws the tree left-to-right with box-drawing characters.
///
/// The tree goes through the regular layout engine with cell-sized constants; a node's box is
/// centred on the row `floor(y)`. Connectors run from the parent's right border to the middle of
/// the column gap, then vertically, then into the child's left border.
pub fn render_mind_map_unicode_with_options(
    root: &MindNode,
    options: UnicodeRenderOptions,
) -> Result<String, UnicodeRenderError> {
    render_with_node_limit(root, options, LayoutConfig::default().max_nodes)
}

pub(crate) fn render_with_node_limit(
    root: &MindNode,
    options: UnicodeRenderOptions,
    max_nodes: usize,
) -> Result<String, UnicodeRenderError> {
    let config = LayoutConfig {
        max_nodes,
        ..options.layout_config()
    };
    let layout = TreeLayoutEngine::new(config)?.layout(root)?;
    let canvas = paint(&layout)?;
    Ok(canvas.to_string_trimmed())
}

fn paint(layout: &TreeLayout<'_>) -> Result<Canvas, CanvasError> {
    let config = layout.config();
    let box_width = config.node_width as usize;
    let width = layout.width().ceil() as usize;
    let height = layout.height().ceil() as usize;
    let mut canvas = Canvas::new(width, height)?;

    let rows = layout
        .nodes()
        .iter()
        .map(|node| node.y().floor() as usize)
        .collect::<Vec<_>>();

    for (node, &mid_row) in layout.nodes().iter().zip(&rows) {
        let left = node.x() as usize;
        let right = left + box_width - 1;
        canvas.rect(left, mid_row - 1, right, mid_row + 1)?;

        let label = truncate_with_ellipsis(node.title(), box_width.saturating_sub(4));
        canvas.put_str(left + 2, mid_row, &label)?;
    }

    for edge in layout.edges() {
        let parent_row = rows[edge.parent().get()];
        let child_row = rows[edge.child().get()];
        let parent_border = edge.source().x as usize - 1;
        let child_border = edge.target().x as usize;
        let elbow = parent_border + (child_border - parent_border) / 2;

        canvas.hline(parent_border, elbow, parent_row)?;
        canvas.vline(elbow, parent_row, child_row)?;
        canvas.hline(elbow, child_border, child_row)?;
    }

    Ok(canvas)
}
