// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Half-edges of a box-drawing cell: which neighbours a line leaves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges(u8);

impl Edges {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const UP: Self = Self(1 << 2);
    pub const DOWN: Self = Self(1 << 3);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Glyph for this combination; a lone half-edge renders as a full straight line.
    pub fn glyph(self) -> char {
        let left = self.contains(Self::LEFT);
        let right = self.contains(Self::RIGHT);
        let up = self.contains(Self::UP);
        let down = self.contains(Self::DOWN);
        match ((left, right), (up, down)) {
            ((false, false), (false, false)) => ' ',
            (_, (false, false)) => '─',
            ((false, false), _) => '│',
            ((true, true), (false, true)) => '┬',
            ((true, true), (true, false)) => '┴',
            ((false, true), (true, true)) => '├',
            ((true, false), (true, true)) => '┤',
            ((false, true), (false, true)) => '┌',
            ((true, false), (false, true)) => '┐',
            ((false, true), (true, false)) => '└',
            ((true, false), (true, false)) => '┘',
            _ => '┼',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    edges: Edges,
}

impl Cell {
    fn display(self) -> char {
        if self.edges.is_empty() {
            self.ch
        } else {
            self.edges.glyph()
        }
    }
}

const BLANK: Cell = Cell {
    ch: ' ',
    edges: Edges::NONE,
};

/// Fixed-size character grid for terminal output.
///
/// Lines are recorded as half-edges per cell and only turned into glyphs on display, so a
/// line crossing or touching another merges into the matching junction (`├ ┤ ┬ ┴ ┼`).
/// Text overwrites whatever lines were in its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![BLANK; len],
        })
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at the right edge.
    pub fn put_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.index_of(x.min(self.width.saturating_sub(1)), y)?;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            let idx = (y * self.width) + col;
            self.cells[idx] = Cell {
                ch,
                edges: Edges::NONE,
            };
        }
        Ok(())
    }

    pub fn add_edges(&mut self, x: usize, y: usize, edges: Edges) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx].edges = self.cells[idx].edges.union(edges);
        Ok(())
    }

    /// Horizontal line between the centres of `(x0, y)` and `(x1, y)`.
    ///
    /// The endpoints only get the half-edge that points inwards, so a line ending on a box border
    /// turns the border into a tee rather than a cross.
    pub fn hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.index_of(lo, y)?;
        self.index_of(hi, y)?;
        if lo == hi {
            return Ok(());
        }
        self.add_edges(lo, y, Edges::RIGHT)?;
        for x in (lo + 1)..hi {
            self.add_edges(x, y, Edges::LEFT.union(Edges::RIGHT))?;
        }
        self.add_edges(hi, y, Edges::LEFT)
    }

    /// Vertical line between the centres of `(x, y0)` and `(x, y1)`.
    pub fn vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.index_of(x, lo)?;
        self.index_of(x, hi)?;
        if lo == hi {
            return Ok(());
        }
        self.add_edges(x, lo, Edges::DOWN)?;
        for y in (lo + 1)..hi {
            self.add_edges(x, y, Edges::UP.union(Edges::DOWN))?;
        }
        self.add_edges(x, hi, Edges::UP)
    }

    /// Rectangle outline with corners at `(x0, y0)` and `(x1, y1)`, inclusive.
    ///
    /// Bounds are checked up front; an out-of-bounds rectangle leaves the canvas untouched.
    pub fn rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), CanvasError> {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.index_of(right, bottom)?;

        self.hline(left, right, top)?;
        self.hline(left, right, bottom)?;
        self.vline(left, top, bottom)?;
        self.vline(right, top, bottom)
    }

    /// Rows joined by `\n`, trailing spaces and trailing empty rows removed.
    pub fn to_string_trimmed(&self) -> String {
        let mut lines = Vec::<String>::with_capacity(self.height);
        for y in 0..self.height {
            let line = (0..self.width)
                .map(|x| self.cells[(y * self.width) + x].display())
                .collect::<String>();
            lines.push(line.trim_end_matches(' ').to_owned());
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width) + x)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x].display())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas"),
        }
    }
}

impl std::error::Error for CanvasError {}
