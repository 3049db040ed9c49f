// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::mind_tree::MindNode;

fn leaves(titles: &[&str]) -> Vec<MindNode> {
    titles.iter().map(|title| MindNode::leaf(*title)).collect()
}

/// Root with three leaf children `A`, `B`, `C`.
#[cfg(test)]
pub(crate) fn fan_out() -> MindNode {
    MindNode::branch("Root", leaves(&["A", "B", "C"]))
}

/// Root → `Child 1` (leaf) and `Child 2` (→ three leaf grandchildren).
#[cfg(test)]
pub(crate) fn unbalanced() -> MindNode {
    MindNode::branch(
        "Root",
        vec![
            MindNode::leaf("Child 1"),
            MindNode::branch(
                "Child 2",
                leaves(&["Grandchild A", "Grandchild B", "Grandchild C"]),
            ),
        ],
    )
}

/// Built-in demo: a small lesson outline with math in some titles.
pub fn demo_mind_map() -> MindNode {
    MindNode::branch(
        "Phương trình bậc hai",
        vec![
            MindNode::branch(
                "Dạng tổng quát",
                leaves(&["$ax^2 + bx + c = 0$", "Điều kiện $a \\neq 0$"]),
            ),
            MindNode::branch(
                "Biệt thức",
                vec![
                    MindNode::leaf("$$\\Delta = b^2 - 4ac$$"),
                    MindNode::branch(
                        "Số nghiệm",
                        leaves(&[
                            "$\\Delta > 0$: hai nghiệm",
                            "$\\Delta = 0$: nghiệm kép",
                            "$\\Delta < 0$: vô nghiệm",
                        ]),
                    ),
                ],
            ),
            MindNode::leaf("Hệ thức Vi-ét"),
        ],
    )
}
