// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG output for a computed [`TreeLayout`].
//!
//! Node boxes are drawn at `(x, y - node_height / 2)`, connectors use the cubic curve from
//! [`crate::layout::CubicConnector`], and the whole drawing is shifted by half the layout margin so
//! the margin is split evenly around the content. Math runs inside titles are left as raw
//! `$...$` text in `<tspan class="math">` elements for a later typesetting pass.

use std::fmt::Write as _;

use crate::layout::connector::push_number;
use crate::layout::{LayoutNode, TreeLayout};

use super::text::{wrap_label, LabelToken};

const DEFAULT_PALETTE: [&str; 6] = [
    "#fde68a", "#bfdbfe", "#bbf7d0", "#fecaca", "#ddd6fe", "#fbcfe8",
];

/// Average glyph advance as a fraction of the font size, used for wrapping only.
const GLYPH_ADVANCE: f64 = 0.55;
const LINE_HEIGHT: f64 = 1.25;
const LABEL_PADDING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderOptions {
    /// Node fill colours, picked by `level % palette.len()`. Empty means no fill attribute.
    pub palette: Vec<String>,
    pub staggered_reveal: bool,
    /// Animation delay added per tree level when `staggered_reveal` is on.
    pub reveal_step_ms: u32,
    pub corner_radius: f64,
    pub font_size: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            palette: Vec::from(DEFAULT_PALETTE.map(str::to_owned)),
            staggered_reveal: true,
            reveal_step_ms: 150,
            corner_radius: 12.0,
            font_size: 14.0,
        }
    }
}

impl SvgRenderOptions {
    fn fill_for(&self, level: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[level % self.palette.len()].as_str())
    }

    fn reveal_delay_ms(&self, level: usize) -> Option<u64> {
        self.staggered_reveal
            .then(|| level as u64 * u64::from(self.reveal_step_ms))
    }
}

pub fn render_mind_map_svg(layout: &TreeLayout<'_>, options: &SvgRenderOptions) -> String {
    let config = layout.config();
    let mut out = String::with_capacity(256 + layout.nodes().len() * 256);

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    out.push_str(r#" class="mind-map" width=""#);
    push_number(&mut out, layout.width());
    out.push_str(r#"" height=""#);
    push_number(&mut out, layout.height());
    out.push_str(r#"" viewBox="0 0 "#);
    push_number(&mut out, layout.width());
    out.push(' ');
    push_number(&mut out, layout.height());
    out.push_str(r#"">"#);

    push_style(&mut out, options);

    let inset = config.margin / 2.0;
    out.push_str(r#"<g transform="translate("#);
    push_number(&mut out, inset);
    out.push_str(", ");
    push_number(&mut out, inset);
    out.push_str(r#")">"#);

    out.push_str(r#"<g class="connectors">"#);
    for edge in layout.edges() {
        let level = layout.node(edge.child()).map_or(0, LayoutNode::level);
        out.push_str(r#"<path class="connector""#);
        push_reveal(&mut out, options, level);
        out.push_str(r#" d=""#);
        out.push_str(&edge.connector().to_svg_path());
        out.push_str(r#""/>"#);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in layout.nodes() {
        push_node(&mut out, layout, node, options);
    }
    out.push_str("</g>");

    out.push_str("</g></svg>\n");
    tracing::debug!(
        bytes = out.len(),
        nodes = layout.nodes().len(),
        "rendered svg"
    );
    out
}

fn push_style(out: &mut String, options: &SvgRenderOptions) {
    out.push_str("<style>");
    out.push_str(".mind-map .connector{fill:none;stroke:#94a3b8;");
    out.push_str("stroke-width:2}");
    out.push_str(".mind-map .node rect{stroke:#475569;stroke-width:1}");
    let _ = write!(
        out,
        ".mind-map .node text{{font-family:sans-serif;font-size:{}px;fill:#1e293b;",
        options.font_size
    );
    out.push_str("text-anchor:middle;dominant-baseline:central}");
    out.push_str(".mind-map .math{font-style:italic}");
    if options.staggered_reveal {
        out.push_str(".mind-map .reveal{opacity:0;");
        out.push_str("animation:reveal 400ms ease-out forwards}");
        out.push_str("@keyframes reveal{to{opacity:1}}");
    }
    out.push_str("</style>");
}

fn push_reveal(out: &mut String, options: &SvgRenderOptions, level: usize) {
    if let Some(delay) = options.reveal_delay_ms(level) {
        let mut buf = itoa::Buffer::new();
        out.push_str(r#" style="animation-delay: "#);
        out.push_str(buf.format(delay));
        out.push_str(r#"ms""#);
    }
}

fn push_node(
    out: &mut String,
    layout: &TreeLayout<'_>,
    node: &LayoutNode<'_>,
    options: &SvgRenderOptions,
) {
    let rect = layout.node_rect(node);
    let mut index = itoa::Buffer::new();
    let mut level = itoa::Buffer::new();

    out.push_str(r#"<g class="node level-"#);
    out.push_str(level.format(node.level()));
    if options.staggered_reveal {
        out.push_str(" reveal");
    }
    out.push_str(r#"" data-index=""#);
    out.push_str(index.format(node.index().get()));
    out.push('"');
    push_reveal(out, options, node.level());
    out.push('>');

    out.push_str("<title>");
    push_escaped(out, node.title());
    out.push_str("</title>");

    out.push_str(r#"<rect x=""#);
    push_number(out, rect.x);
    out.push_str(r#"" y=""#);
    push_number(out, rect.y);
    out.push_str(r#"" width=""#);
    push_number(out, rect.width);
    out.push_str(r#"" height=""#);
    push_number(out, rect.height);
    out.push_str(r#"" rx=""#);
    push_number(out, options.corner_radius);
    out.push('"');
    if let Some(fill) = options.fill_for(node.level()) {
        out.push_str(r#" fill=""#);
        push_escaped(out, fill);
        out.push('"');
    }
    out.push_str("/>");

    push_label(out, layout, node, options);
    out.push_str("</g>");
}

fn push_label(
    out: &mut String,
    layout: &TreeLayout<'_>,
    node: &LayoutNode<'_>,
    options: &SvgRenderOptions,
) {
    let config = layout.config();
    let font_size = options.font_size.max(1.0);
    let line_height = font_size * LINE_HEIGHT;
    let usable_width = (config.node_width - 2.0 * LABEL_PADDING).max(font_size);
    let max_chars = (usable_width / (font_size * GLYPH_ADVANCE)).floor() as usize;
    let max_lines = ((config.node_height - LABEL_PADDING) / line_height).floor() as usize;

    let lines = wrap_label(node.title(), max_chars, max_lines);
    let centre_x = node.x() + config.node_width / 2.0;
    let first_y = node.y() - (lines.len().saturating_sub(1) as f64) * line_height / 2.0;

    out.push_str(r#"<text x=""#);
    push_number(out, centre_x);
    out.push_str(r#"" y=""#);
    push_number(out, node.y());
    out.push_str(r#"">"#);
    for (line_idx, line) in lines.iter().enumerate() {
        out.push_str(r#"<tspan x=""#);
        push_number(out, centre_x);
        out.push_str(r#"" y=""#);
        push_number(out, first_y + line_idx as f64 * line_height);
        out.push_str(r#"">"#);
        for (token_idx, token) in line.iter().enumerate() {
            if token_idx > 0 {
                out.push(' ');
            }
            match token {
                LabelToken::Word(word) => push_escaped(out, word),
                LabelToken::Math(source) => {
                    out.push_str(r#"<tspan class="math">"#);
                    push_escaped(out, source);
                    out.push_str("</tspan>");
                }
            }
        }
        out.push_str("</tspan>");
    }
    out.push_str("</text>");
}

/// Appends `text` with the five XML special characters escaped.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
