// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A mind map is a single owned tree of titled nodes, normalized at the data-source boundary.

pub(crate) mod fixtures;
pub mod mind_tree;

pub use fixtures::demo_mind_map;
pub use mind_tree::{MindNode, MindNodeKind, NodeIndex, Preorder, PreorderVisit};
