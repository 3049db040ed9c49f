// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{MindNode, MindNodeKind, NodeIndex};

use super::connector::CubicConnector;

pub const DEFAULT_NODE_WIDTH: f64 = 180.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 60.0;
pub const DEFAULT_HORIZONTAL_SEPARATION: f64 = 240.0;
pub const DEFAULT_VERTICAL_SEPARATION: f64 = 20.0;
/// Twice the 20-unit corner inset, so boxes are never clipped by the canvas edge.
pub const DEFAULT_MARGIN: f64 = 40.0;
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Fixed layout constants. Changing them changes absolute positions, never relative order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub horizontal_separation: f64,
    pub vertical_separation: f64,
    pub margin: f64,
    pub max_nodes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
            horizontal_separation: DEFAULT_HORIZONTAL_SEPARATION,
            vertical_separation: DEFAULT_VERTICAL_SEPARATION,
            margin: DEFAULT_MARGIN,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl LayoutConfig {
    /// Vertical band reserved for a single leaf.
    pub fn leaf_slot(&self) -> f64 {
        self.node_height + self.vertical_separation
    }

    fn validate(&self) -> Result<(), TreeLayoutError> {
        let positive = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TreeLayoutError::InvalidConfig { field, value });
            }
        }

        let non_negative = [
            ("horizontal_separation", self.horizontal_separation),
            ("vertical_separation", self.vertical_separation),
            ("margin", self.margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TreeLayoutError::InvalidConfig { field, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeLayoutError {
    InvalidConfig { field: &'static str, value: f64 },
    TooManyNodes { count: usize, max: usize },
}

impl fmt::Display for TreeLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid layout config: {field} = {value}")
            }
            Self::TooManyNodes { count, max } => {
                write!(f, "mind map has {count} nodes (max {max})")
            }
        }
    }
}

impl std::error::Error for TreeLayoutError {}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a> {
    index: NodeIndex,
    node: &'a MindNode,
    parent: Option<NodeIndex>,
    level: usize,
    x: f64,
    y: f64,
    band_top: f64,
    band_height: f64,
}

impl<'a> LayoutNode<'a> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn node(&self) -> &'a MindNode {
        self.node
    }

    pub fn title(&self) -> &'a str {
        self.node.title()
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Depth in the tree; the root is level 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Left edge of the node's column.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical centre of the node.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Top of the vertical band reserved for this node's subtree.
    pub fn band_top(&self) -> f64 {
        self.band_top
    }

    /// Height of the vertical band reserved for this node's subtree.
    pub fn band_height(&self) -> f64 {
        self.band_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEdge {
    parent: NodeIndex,
    child: NodeIndex,
    source: Point,
    target: Point,
}

impl LayoutEdge {
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    pub fn child(&self) -> NodeIndex {
        self.child
    }

    /// Midpoint of the parent's right edge.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Midpoint of the child's left edge.
    pub fn target(&self) -> Point {
        self.target
    }

    pub fn connector(&self) -> CubicConnector {
        CubicConnector::between(self.source, self.target)
    }
}

/// Result of one layout pass. Borrows the laid-out tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout<'a> {
    config: LayoutConfig,
    nodes: Vec<LayoutNode<'a>>,
    edges: Vec<LayoutEdge>,
    width: f64,
    height: f64,
}

impl<'a> TreeLayout<'a> {
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Nodes in pre-order; `nodes()[i].index() == NodeIndex::new(i)`.
    pub fn nodes(&self) -> &[LayoutNode<'a>] {
        &self.nodes
    }

    /// One edge per non-root node, ordered by the child's pre-order index.
    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn node(&self, index: NodeIndex) -> Option<&LayoutNode<'a>> {
        self.nodes.get(index.get())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The box a renderer draws for `node`: `node_width × node_height` centred on its `y`.
    pub fn node_rect(&self, node: &LayoutNode<'_>) -> Rect {
        Rect {
            x: node.x,
            y: node.y - self.config.node_height / 2.0,
            width: self.config.node_width,
            height: self.config.node_height,
        }
    }
}

/// Per-node scratch row of the layout table, keyed by pre-order index.
#[derive(Debug, Clone)]
struct Slot<'a> {
    node: &'a MindNode,
    parent: Option<usize>,
    level: usize,
    children: SmallVec<[usize; 4]>,
    subtree_height: f64,
    y_offset: f64,
    y: f64,
}

/// Hierarchical left-to-right tree layout with fixed-size boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeLayoutEngine {
    config: LayoutConfig,
}

impl TreeLayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, TreeLayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `root` in two passes over a flat pre-order table.
    ///
    /// - Subtree extent (children before parents): a leaf reserves one slot of
    ///   `node_height + vertical_separation`; a branch reserves exactly the sum of its children.
    /// - Coordinates (parents before children): `x = level * horizontal_separation`; children are
    ///   stacked contiguously from the parent's offset in declared order; a leaf sits at the
    ///   centre of its band, a branch at the midpoint of its first and last child.
    pub fn layout<'a>(&self, root: &'a MindNode) -> Result<TreeLayout<'a>, TreeLayoutError> {
        let config = self.config;
        let mut slots = flatten(root, config.max_nodes)?;

        // Extent. Pre-order puts every descendant after its ancestor, so a reverse sweep sees
        // all children before their parent.
        for idx in (0..slots.len()).rev() {
            let height = match slots[idx].node.kind() {
                MindNodeKind::Leaf => config.leaf_slot(),
                MindNodeKind::Branch(_) => {
                    let children = &slots[idx].children;
                    children.iter().map(|&c| slots[c].subtree_height).sum()
                }
            };
            slots[idx].subtree_height = height;
        }

        // Offsets, top-down. Siblings share no band and leave no gap.
        for idx in 0..slots.len() {
            let mut y_offset = slots[idx].y_offset;
            for child_pos in 0..slots[idx].children.len() {
                let child = slots[idx].children[child_pos];
                slots[child].y_offset = y_offset;
                y_offset += slots[child].subtree_height;
            }
        }

        // Centres, bottom-up.
        for idx in (0..slots.len()).rev() {
            let slot = &slots[idx];
            let y = match (slot.children.first(), slot.children.last()) {
                (Some(&first), Some(&last)) => (slots[first].y + slots[last].y) / 2.0,
                _ => slot.y_offset + slot.subtree_height / 2.0,
            };
            slots[idx].y = y;
        }

        let nodes = slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| LayoutNode {
                index: NodeIndex::new(idx),
                node: slot.node,
                parent: slot.parent.map(NodeIndex::new),
                level: slot.level,
                x: slot.level as f64 * config.horizontal_separation,
                y: slot.y,
                band_top: slot.y_offset,
                band_height: slot.subtree_height,
            })
            .collect::<Vec<_>>();

        let edges = nodes
            .iter()
            .filter_map(|child| {
                let parent = &nodes[child.parent?.get()];
                Some(LayoutEdge {
                    parent: parent.index,
                    child: child.index,
                    source: Point::new(parent.x + config.node_width, parent.y),
                    target: Point::new(child.x, child.y),
                })
            })
            .collect::<Vec<_>>();

        let max_x = nodes.iter().map(|node| node.x).fold(0.0, f64::max);
        let width = max_x + config.node_width + config.margin;
        let height = slots[0].subtree_height + config.margin;

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            width,
            height,
            "laid out mind map"
        );

        Ok(TreeLayout {
            config,
            nodes,
            edges,
            width,
            height,
        })
    }
}

impl Default for TreeLayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

/// Lays out `root` with [`LayoutConfig::default`].
pub fn layout_mind_tree(root: &MindNode) -> Result<TreeLayout<'_>, TreeLayoutError> {
    TreeLayoutEngine::default().layout(root)
}

fn flatten(root: &MindNode, max_nodes: usize) -> Result<Vec<Slot<'_>>, TreeLayoutError> {
    let mut slots = Vec::<Slot<'_>>::new();
    let mut stack = vec![(root, None::<usize>, 0usize)];

    while let Some((node, parent, level)) = stack.pop() {
        if slots.len() == max_nodes {
            return Err(TreeLayoutError::TooManyNodes {
                count: root.node_count(),
                max: max_nodes,
            });
        }

        let idx = slots.len();
        if let Some(parent) = parent {
            slots[parent].children.push(idx);
        }
        slots.push(Slot {
            node,
            parent,
            level,
            children: SmallVec::new(),
            subtree_height: 0.0,
            y_offset: 0.0,
            y: 0.0,
        });

        if let MindNodeKind::Branch(children) = node.kind() {
            for child in children.iter().rev() {
                stack.push((child, Some(idx), level + 1));
            }
        }
    }

    tracing::trace!(nodes = slots.len(), "flattened mind map");
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::{
        layout_mind_tree, LayoutConfig, Point, TreeLayout, TreeLayoutEngine, TreeLayoutError,
    };
    use crate::model::fixtures::{fan_out, unbalanced};
    use crate::model::{MindNode, NodeIndex};

    const SLOT: f64 = 80.0;

    fn ys(layout: &TreeLayout<'_>) -> Vec<f64> {
        layout.nodes().iter().map(|node| node.y()).collect()
    }

    #[test]
    fn lays_out_a_single_root() {
        let root = MindNode::leaf("Root");
        let layout = layout_mind_tree(&root).expect("layout");

        assert_eq!(layout.nodes().len(), 1);
        assert!(layout.edges().is_empty());
        let node = &layout.nodes()[0];
        assert_eq!(node.x(), 0.0);
        assert_eq!(node.y(), SLOT / 2.0);
        assert_eq!(node.level(), 0);
        assert_eq!(node.parent(), None);
        assert_eq!(layout.width(), 180.0 + 40.0);
        assert_eq!(layout.height(), SLOT + 40.0);
    }

    #[test]
    fn fans_out_leaf_children_evenly() {
        let root = fan_out();
        let layout = layout_mind_tree(&root).expect("layout");

        assert_eq!(ys(&layout), vec![120.0, 40.0, 120.0, 200.0]);
        for child in &layout.nodes()[1..] {
            assert_eq!(child.x(), 240.0);
            assert_eq!(child.level(), 1);
        }
        assert_eq!(layout.edges().len(), 3);
        for (edge, child) in layout.edges().iter().zip(1..) {
            assert_eq!(edge.parent(), NodeIndex::ROOT);
            assert_eq!(edge.child(), NodeIndex::new(child));
            assert_eq!(edge.source(), Point::new(180.0, 120.0));
        }
        assert_eq!(layout.edges()[2].target(), Point::new(240.0, 200.0));
        assert_eq!(layout.width(), 240.0 + 180.0 + 40.0);
        assert_eq!(layout.height(), 3.0 * SLOT + 40.0);
    }

    #[test]
    fn centres_parents_on_first_and_last_child_only() {
        let root = unbalanced();
        let layout = layout_mind_tree(&root).expect("layout");
        let y = ys(&layout);

        // Child 1 band [0, 80); Child 2 band [80, 320) split over three grandchildren.
        assert_eq!(y[1], 40.0);
        assert_eq!(y[3], 120.0);
        assert_eq!(y[4], 200.0);
        assert_eq!(y[5], 280.0);
        assert_eq!(y[2], (y[3] + y[5]) / 2.0);
        assert_eq!(y[0], (y[1] + y[2]) / 2.0);

        let mean_of_leaves = (y[1] + y[3] + y[4] + y[5]) / 4.0;
        assert_ne!(y[0], mean_of_leaves);
        assert_eq!(layout.nodes()[3].x(), 480.0);
    }

    #[test]
    fn single_child_sits_level_with_its_parent() {
        let root = MindNode::branch("Root", vec![MindNode::leaf("Only")]);
        let layout = layout_mind_tree(&root).expect("layout");

        let y = ys(&layout);
        assert_eq!(y, vec![40.0, 40.0]);
        assert!(y.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn sibling_bands_are_contiguous_and_disjoint() {
        let root = crate::model::demo_mind_map();
        let layout = layout_mind_tree(&root).expect("layout");

        for parent in layout.nodes() {
            let children = layout
                .nodes()
                .iter()
                .filter(|node| node.parent() == Some(parent.index()));
            let mut expected_top = parent.band_top();
            for child in children {
                assert_eq!(child.band_top(), expected_top);
                expected_top += child.band_height();
            }
            if !parent.node().is_leaf() {
                assert_eq!(expected_top, parent.band_top() + parent.band_height());
            }
        }
    }

    #[test]
    fn honours_injected_constants() {
        let config = LayoutConfig {
            node_width: 10.0,
            node_height: 4.0,
            horizontal_separation: 15.0,
            vertical_separation: 2.0,
            margin: 0.0,
            ..LayoutConfig::default()
        };
        let root = fan_out();
        let layout = TreeLayoutEngine::new(config)
            .expect("engine")
            .layout(&root)
            .expect("layout");

        assert_eq!(ys(&layout), vec![9.0, 3.0, 9.0, 15.0]);
        assert_eq!(layout.nodes()[1].x(), 15.0);
        assert_eq!(layout.edges()[0].source(), Point::new(10.0, 9.0));
        assert_eq!(layout.width(), 25.0);
        assert_eq!(layout.height(), 18.0);

        let rect = layout.node_rect(&layout.nodes()[1]);
        assert_eq!(
            (rect.x, rect.y, rect.width, rect.height),
            (15.0, 1.0, 10.0, 4.0)
        );
    }

    #[test]
    fn repeated_layouts_are_identical() {
        let root = crate::model::demo_mind_map();
        let first = layout_mind_tree(&root).expect("layout");
        let second = layout_mind_tree(&root).expect("layout");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_invalid_config() {
        let err = TreeLayoutEngine::new(LayoutConfig {
            node_height: 0.0,
            ..LayoutConfig::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            TreeLayoutError::InvalidConfig {
                field: "node_height",
                value: 0.0
            }
        );

        let err = TreeLayoutEngine::new(LayoutConfig {
            vertical_separation: f64::NAN,
            ..LayoutConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            TreeLayoutError::InvalidConfig {
                field: "vertical_separation",
                ..
            }
        ));
    }

    #[test]
    fn rejects_trees_over_the_node_limit() {
        let engine = TreeLayoutEngine::new(LayoutConfig {
            max_nodes: 3,
            ..LayoutConfig::default()
        })
        .expect("engine");

        let err = engine.layout(&fan_out()).unwrap_err();
        assert_eq!(err, TreeLayoutError::TooManyNodes { count: 4, max: 3 });
        assert_eq!(err.to_string(), "mind map has 4 nodes (max 3)");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"node_width": 120, "margin": 0}"#).expect("config");
        assert_eq!(config.node_width, 120.0);
        assert_eq!(config.margin, 0.0);
        assert_eq!(config.node_height, 60.0);

        serde_json::from_str::<LayoutConfig>(r#"{"node_widht": 1}"#).unwrap_err();
    }
}
