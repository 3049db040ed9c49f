// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::layout::TreeLayout;

/// Serializable snapshot of a [`TreeLayout`], for clients that draw the map themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDocument {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<LayoutDocumentNode>,
    pub edges: Vec<LayoutDocumentEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDocumentNode {
    pub index: usize,
    pub title: String,
    pub level: usize,
    pub x: f64,
    pub y: f64,
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDocumentEdge {
    pub parent: usize,
    pub child: usize,
    /// SVG path data of the connector curve.
    pub path: String,
}

pub fn layout_document(layout: &TreeLayout<'_>) -> LayoutDocument {
    let nodes = layout
        .nodes()
        .iter()
        .map(|node| LayoutDocumentNode {
            index: node.index().get(),
            title: node.title().to_owned(),
            level: node.level(),
            x: node.x(),
            y: node.y(),
            parent: node.parent().map(|parent| parent.get()),
        })
        .collect();
    let edges = layout
        .edges()
        .iter()
        .map(|edge| LayoutDocumentEdge {
            parent: edge.parent().get(),
            child: edge.child().get(),
            path: edge.connector().to_svg_path(),
        })
        .collect();

    LayoutDocument {
        width: layout.width(),
        height: layout.height(),
        nodes,
        edges,
    }
}

pub fn render_layout_json(
    layout: &TreeLayout<'_>,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let document = layout_document(layout);
    if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{layout_document, render_layout_json};
    use crate::layout::layout_mind_tree;
    use crate::model::fixtures::fan_out;

    #[test]
    fn captures_nodes_and_edges_in_preorder() {
        let tree = fan_out();
        let layout = layout_mind_tree(&tree).expect("layout");
        let doc = layout_document(&layout);

        assert_eq!(doc.width, 460.0);
        assert_eq!(doc.height, 280.0);
        let titles: Vec<_> = doc.nodes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Root", "A", "B", "C"]);
        assert_eq!(doc.nodes[0].parent, None);
        for node in &doc.nodes[1..] {
            assert_eq!((node.parent, node.level), (Some(0), 1));
        }
        let edges: Vec<_> = doc.edges.iter().map(|e| (e.parent, e.child)).collect();
        assert_eq!(edges, [(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn serializes_to_the_documented_shape() {
        let tree = fan_out();
        let layout = layout_mind_tree(&tree).expect("layout");
        let text = render_layout_json(&layout, false).expect("json");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(
            value["nodes"][1],
            json!({"index": 1, "title": "A", "level": 1, "x": 240.0, "y": 40.0, "parent": 0})
        );
        assert_eq!(
            value["edges"][0],
            json!({"parent": 0, "child": 1, "path": "M 180 120 C 210 120, 210 40, 240 40"})
        );
        assert_eq!(value["nodes"][0]["parent"], serde_json::Value::Null);
        let pretty = render_layout_json(&layout, true).expect("pretty");
        assert!(pretty.contains("\n  \"width\""), "{pretty}");
    }
}
