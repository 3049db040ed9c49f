// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trí Việt mind maps: tree model, input formats, layout engine and renderers.
//!
//! The pipeline is `format` (parse and normalize) → `layout` (pure coordinates) → `render`
//! (SVG, terminal text, or a JSON layout document).

pub mod format;
pub mod layout;
pub mod model;
pub mod render;
