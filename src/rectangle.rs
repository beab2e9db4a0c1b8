use crate::color::Color;
use egui::{Pos2, pos2};

/// A committed rectangle.
///
/// `p1` and `p2` are the corners in the order they were dragged, so width and
/// height keep their sign. There is no way to change a rectangle once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    p1: Pos2,
    p2: Pos2,
    color: Color,
}

impl Rectangle {
    pub fn new(p1: Pos2, p2: Pos2, color: Color) -> Self {
        Self { p1, p2, color }
    }

    pub fn p1(&self) -> Pos2 {
        self.p1
    }

    pub fn p2(&self) -> Pos2 {
        self.p2
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Signed, `p2.x - p1.x`.
    pub fn width(&self) -> f32 {
        self.p2.x - self.p1.x
    }

    /// Signed, `p2.y - p1.y`.
    pub fn height(&self) -> f32 {
        self.p2.y - self.p1.y
    }

    pub fn center(&self) -> Pos2 {
        pos2(
            self.p1.x + self.width() / 2.0,
            self.p1.y + self.height() / 2.0,
        )
    }

    /// The four corners walking from `p1` along the width first.
    pub fn corners(&self) -> [Pos2; 4] {
        let (w, h) = (self.width(), self.height());
        [
            self.p1,
            pos2(self.p1.x + w, self.p1.y),
            pos2(self.p1.x + w, self.p1.y + h),
            pos2(self.p1.x, self.p1.y + h),
        ]
    }

    /// The two diagonals, `p1 -> p2` then the opposite pair.
    pub fn diagonals(&self) -> [[Pos2; 2]; 2] {
        let w = self.width();
        [
            [self.p1, self.p2],
            [pos2(self.p1.x + w, self.p1.y), pos2(self.p2.x - w, self.p2.y)],
        ]
    }
}
