// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// Position of a node in the pre-order traversal of its tree (root = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub const ROOT: Self = Self(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled mind-map node with ordered, owned children.
///
/// Ownership makes the structure a tree by construction: a node cannot be its own descendant and
/// cannot appear under two parents. Titles are opaque text and may embed inline math markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindNode {
    title: SmolStr,
    children: Vec<MindNode>,
}

/// Shape of a node as seen by consumers.
///
/// `Branch` always carries a non-empty slice; an absent or empty child list is a `Leaf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MindNodeKind<'a> {
    Leaf,
    Branch(&'a [MindNode]),
}

impl MindNode {
    pub fn leaf(title: impl Into<SmolStr>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children. An empty `children` yields a leaf.
    pub fn branch(title: impl Into<SmolStr>, children: Vec<MindNode>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[MindNode] {
        &self.children
    }

    pub fn push_child(&mut self, child: MindNode) {
        self.children.push(child);
    }

    pub fn kind(&self) -> MindNodeKind<'_> {
        if self.children.is_empty() {
            MindNodeKind::Leaf
        } else {
            MindNodeKind::Branch(&self.children)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Number of levels in this subtree (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        self.preorder()
            .map(|visit| visit.level + 1)
            .max()
            .unwrap_or(1)
    }

    /// Iterates the subtree in pre-order: a node first, then its children in declared order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(self, 0)],
            next_index: 0,
        }
    }
}

impl Drop for MindNode {
    // Unlinks descendants onto a work list so deep chains never recurse on drop.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// One step of a [`Preorder`] walk.
#[derive(Debug, Clone, Copy)]
pub struct PreorderVisit<'a> {
    pub index: NodeIndex,
    pub level: usize,
    pub node: &'a MindNode,
}

/// Iterative pre-order traversal; depth is bounded by heap, not by the call stack.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<(&'a MindNode, usize)>,
    next_index: usize,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = PreorderVisit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((child, level + 1));
        }

        let index = NodeIndex(self.next_index);
        self.next_index += 1;
        Some(PreorderVisit { index, level, node })
    }
}
