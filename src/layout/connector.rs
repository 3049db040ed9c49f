// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use super::tree::Point;

/// Cubic S-curve from a parent's right edge to a child's left edge.
///
/// Both control points sit on the vertical line halfway between the endpoints: the first at the
/// source height, the second at the target height. The curve therefore leaves and arrives
/// horizontally whatever the vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicConnector {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicConnector {
    pub fn between(start: Point, end: Point) -> Self {
        let mid_x = (start.x + end.x) / 2.0;
        Self {
            start,
            control1: Point::new(mid_x, start.y),
            control2: Point::new(mid_x, end.y),
            end,
        }
    }

    /// SVG path data: `M sx sy C c1x c1y, c2x c2y, tx ty`.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::with_capacity(48);
        out.push_str("M ");
        push_point(&mut out, self.start);
        out.push_str(" C ");
        push_point(&mut out, self.control1);
        out.push_str(", ");
        push_point(&mut out, self.control2);
        out.push_str(", ");
        push_point(&mut out, self.end);
        out
    }
}

fn push_point(out: &mut String, point: Point) {
    push_number(out, point.x);
    out.push(' ');
    push_number(out, point.y);
}

/// Appends a compact decimal: integers without a fraction, others rounded to two places.
pub(crate) fn push_number(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push('0');
        return;
    }

    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        let mut buf = itoa::Buffer::new();
        // The bound above keeps the cast exact; -0.0 lands on 0.
        out.push_str(buf.format(rounded as i64));
        return;
    }

    let start = out.len();
    let _ = write!(out, "{rounded:.2}");
    while out.len() > start && out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::{push_number, CubicConnector};
    use crate::layout::tree::Point;

    fn number(value: f64) -> String {
        let mut out = String::new();
        push_number(&mut out, value);
        out
    }

    #[test]
    fn control_points_share_the_mid_column() {
        let c = CubicConnector::between(Point::new(180.0, 120.0), Point::new(240.0, 40.0));
        assert_eq!(c.control1, Point::new(210.0, 120.0));
        assert_eq!(c.control2, Point::new(210.0, 40.0));
    }

    #[test]
    fn formats_svg_path_data() {
        let c = CubicConnector::between(Point::new(180.0, 120.0), Point::new(240.0, 40.5));
        assert_eq!(c.to_svg_path(), "M 180 120 C 210 120, 210 40.5, 240 40.5");
    }

    #[test]
    fn curve_leaves_and_arrives_horizontally() {
        let c = CubicConnector::between(Point::new(0.0, 0.0), Point::new(100.0, 80.0));
        assert_eq!(c.control1.y, c.start.y);
        assert_eq!(c.control2.y, c.end.y);
        assert_eq!(c.to_svg_path(), "M 0 0 C 50 0, 50 80, 100 80");
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(12.0), "12");
        assert_eq!(number(-3.0), "-3");
        assert_eq!(number(2.5), "2.5");
        assert_eq!(number(1.0 / 3.0), "0.33");
        assert_eq!(number(f64::NAN), "0");
    }
}
