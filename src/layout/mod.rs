// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for mind maps.
//!
//! This module computes node placement (one column per depth level) and connector geometry.

pub mod connector;
pub mod tree;

pub use connector::CubicConnector;
pub use tree::{
    layout_mind_tree, LayoutConfig, LayoutEdge, LayoutNode, Point, Rect, TreeLayout,
    TreeLayoutEngine, TreeLayoutError,
};
