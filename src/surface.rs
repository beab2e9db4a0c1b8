use crate::color::Color;
use egui::{Pos2, Vec2};

/// A 2D drawing target addressed in canvas coordinates.
///
/// Line widths are passed with every call; there is no "current" pen state.
pub trait Surface {
    fn size(&self) -> Vec2;

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color);

    /// Outline of the rectangle spanned by `p1` and `p2` in any order.
    fn stroke_rect(&mut self, p1: Pos2, p2: Pos2, width: f32, color: Color);

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color);

    /// Stroke an open path through `points`.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color);

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Pos2], color: Color);
}

/// Asks the host to run another frame before the next repaint.
pub trait FrameScheduler {
    fn request_next_frame(&self);
}

impl FrameScheduler for egui::Context {
    fn request_next_frame(&self) {
        self.request_repaint();
    }
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { min: Pos2, size: Vec2, color: Color },
    StrokeRect { p1: Pos2, p2: Pos2, width: f32, color: Color },
    Line { from: Pos2, to: Pos2, width: f32, color: Color },
    Polyline { points: Vec<Pos2>, width: f32, color: Color },
    FillPolygon { points: Vec<Pos2>, color: Color },
}

/// Surface that remembers what was drawn instead of painting it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color) {
        self.ops.push(DrawOp::FillRect { min, size, color });
    }

    fn stroke_rect(&mut self, p1: Pos2, p2: Pos2, width: f32, color: Color) {
        self.ops.push(DrawOp::StrokeRect {
            p1,
            p2,
            width,
            color,
        });
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }
}
