// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use triviet::format::export_mind_tree_json;
use triviet::layout::TreeLayout;
use triviet::model::MindNode;

fn label(base: &str, target_len: usize, with_math: bool) -> String {
    let mut out = String::with_capacity(target_len + 16);
    out.push_str(base);
    if with_math {
        out.push_str(" $x^2 + y^2 = r^2$");
    }
    while out.chars().count() < target_len {
        out.push_str(" ôn");
    }
    out
}

pub fn checksum_layout(layout: &TreeLayout<'_>) -> u64 {
    let mut acc = 0u64;
    for node in layout.nodes() {
        acc = acc.wrapping_mul(131).wrapping_add(node.y().to_bits());
        acc = acc.wrapping_mul(131).wrapping_add(node.level() as u64);
    }
    acc.wrapping_mul(131)
        .wrapping_add(layout.edges().len() as u64)
}

pub fn checksum_tree(root: &MindNode) -> u64 {
    root.preorder().fold(0u64, |acc, visit| {
        acc.wrapping_mul(131)
            .wrapping_add(visit.node.title().len() as u64)
            .wrapping_add(visit.level as u64)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    pub fanout: usize,
    pub depth: usize,
    pub label_len: usize,
    /// Every n-th node gets an inline math run; 0 disables math.
    pub math_every: usize,
}

impl TreeParams {
    pub const fn new(fanout: usize, depth: usize, label_len: usize, math_every: usize) -> Self {
        Self {
            fanout,
            depth,
            label_len,
            math_every,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lesson,
    Balanced,
    Wide,
    LongMathLabels,
    DeepChain,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Balanced => "balanced",
            Self::Wide => "wide",
            Self::LongMathLabels => "long_math_labels",
            Self::DeepChain => "deep_chain",
        }
    }

    pub const fn params(self) -> TreeParams {
        match self {
            Self::Lesson => TreeParams::new(4, 2, 16, 5),
            Self::Balanced => TreeParams::new(4, 5, 16, 0),
            Self::Wide => TreeParams::new(1_000, 1, 12, 0),
            Self::LongMathLabels => TreeParams::new(5, 3, 80, 2),
            Self::DeepChain => TreeParams::new(1, 1_000, 12, 0),
        }
    }
}

/// Complete `fanout`-ary tree of the given depth, built bottom-up without recursion.
pub fn tree(params: TreeParams) -> MindNode {
    let mut counter = 0usize;
    let mut next_label = |level: usize| {
        counter += 1;
        let with_math = params.math_every > 0 && counter % params.math_every == 0;
        label(
            &format!("Chủ đề {level}.{counter}"),
            params.label_len,
            with_math,
        )
    };

    let mut layer = (0..params.fanout.max(1))
        .map(|_| MindNode::leaf(next_label(params.depth)))
        .collect::<Vec<_>>();
    for level in (1..params.depth).rev() {
        let mut parents = Vec::with_capacity(params.fanout.max(1));
        for _ in 0..params.fanout.max(1) {
            parents.push(MindNode::branch(next_label(level), layer.clone()));
        }
        layer = parents;
    }
    MindNode::branch(next_label(0), layer)
}

pub fn fixture(case: Case) -> MindNode {
    tree(case.params())
}

pub fn fixture_json(case: Case) -> String {
    export_mind_tree_json(&fixture(case), true).expect("export fixture")
}

/// Same tree as an indented outline (two spaces per level).
pub fn fixture_outline(case: Case) -> String {
    let root = fixture(case);
    let mut out = String::from("mindmap\n");
    for visit in root.preorder() {
        for _ in 0..visit.level {
            out.push_str("  ");
        }
        out.push_str(visit.node.title());
        out.push('\n');
    }
    out
}
