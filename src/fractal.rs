//! Recursive triangle subdivision used to decorate committed rectangles.
//!
//! The rectangle is split into four triangles meeting at its center. Each
//! triangle emits the inner triangle formed by its edge midpoints and, while
//! depth remains, recurses into three corner triangles with a darker color.
//! Geometry is produced as a lazy sequence of [`TriangleCommand`]s so it can
//! be inspected without a drawing surface.

use crate::color::Color;
use crate::rectangle::Rectangle;
use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Tunables for the subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Pixels of the smaller rectangle side per recursion level.
    pub depth_step: f32,
    /// Passed to [`Color::darken`] once per level.
    pub darken_amount: f32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            depth_step: 128.0,
            darken_amount: 0.25,
        }
    }
}

/// Recursion depth for a rectangle of the given signed size.
///
/// One level per full `step` of the smaller side, minus one when the smaller
/// side is an exact multiple of `step`. Results below zero mean the four top
/// level triangles are drawn without recursing.
pub fn recursion_depth(width: f32, height: f32, step: f32) -> i32 {
    let smaller = width.abs().min(height.abs());
    let mut depth = (smaller / step).floor() as i32;
    if smaller % step == 0.0 {
        depth -= 1;
    }
    depth
}

/// Number of triangles a rectangle of the given depth expands to.
pub fn triangle_count(depth: i32) -> usize {
    if depth < 0 {
        return 4;
    }
    // 4 * (1 + 3 + ... + 3^depth)
    4 * (3usize.pow(depth as u32 + 1) - 1) / 2
}

fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    a + (b - a) / 2.0
}

/// One filled and stroked triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleCommand {
    /// `[mid_a, mid_a, mid_b, mid_c]`. The first point repeats to match the
    /// path shape the pattern has always been drawn with.
    pub path: [Pos2; 4],
    pub color: Color,
    /// 0 for the four top level triangles, increasing by one per subdivision.
    pub level: u32,
}

#[derive(Debug, Clone, Copy)]
struct Subdivision {
    center: Pos2,
    a: Pos2,
    b: Pos2,
    color: Color,
    depth: i32,
    level: u32,
}

/// The subdivision tree for a single rectangle.
#[derive(Debug, Clone)]
pub struct FractalPattern {
    rectangle: Rectangle,
    params: FractalParams,
}

impl FractalPattern {
    pub fn new(rectangle: Rectangle) -> Self {
        Self::with_params(rectangle, FractalParams::default())
    }

    pub fn with_params(rectangle: Rectangle, params: FractalParams) -> Self {
        Self { rectangle, params }
    }

    pub fn depth(&self) -> i32 {
        recursion_depth(
            self.rectangle.width(),
            self.rectangle.height(),
            self.params.depth_step,
        )
    }

    /// Triangles in drawing order: each triangle before its children, siblings
    /// in the order `(center side, a side, b side)`.
    pub fn triangles(&self) -> FractalTriangles {
        let center = self.rectangle.center();
        let corners = self.rectangle.corners();
        let depth = self.depth();
        let color = self.rectangle.color();

        let mut stack = Vec::with_capacity(4);
        for i in (0..4).rev() {
            stack.push(Subdivision {
                center,
                a: corners[i],
                b: corners[(i + 1) % 4],
                color,
                depth,
                level: 0,
            });
        }

        FractalTriangles {
            stack,
            darken_amount: self.params.darken_amount,
        }
    }
}

/// Depth-first iterator over a pattern's triangles.
#[derive(Debug, Clone)]
pub struct FractalTriangles {
    stack: Vec<Subdivision>,
    darken_amount: f32,
}

impl Iterator for FractalTriangles {
    type Item = TriangleCommand;

    fn next(&mut self) -> Option<Self::Item> {
        let Subdivision {
            center,
            a,
            b,
            color,
            depth,
            level,
        } = self.stack.pop()?;

        let mid_a = midpoint(center, a);
        let mid_b = midpoint(center, b);
        let mid_c = midpoint(a, b);

        if depth > 0 {
            let darker = color.darken(self.darken_amount);
            let child = |center: Pos2, a: Pos2, b: Pos2| Subdivision {
                center,
                a,
                b,
                color: darker,
                depth: depth - 1,
                level: level + 1,
            };
            // Pushed in reverse so the first child is visited first.
            let children = [
                child(center, mid_a, mid_b),
                child(mid_a, a, mid_c),
                child(mid_b, mid_c, b),
            ];
            self.stack.extend(children.into_iter().rev());
        }

        Some(TriangleCommand {
            path: [mid_a, mid_a, mid_b, mid_c],
            color,
            level,
        })
    }
}
