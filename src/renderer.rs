use crate::color::Color;
use crate::surface::Surface;
use egui::{Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// [`Surface`] backed by an egui painter.
///
/// Canvas coordinates are offset by the top left corner of `canvas_rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface drawing into `canvas_rect` of the painter's layer
    ///
    /// Args:
    ///     painter (Painter): The painter to draw with
    ///     canvas_rect (Rect): The screen rectangle the canvas occupies
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            canvas_rect,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas_rect.min + pos.to_vec2()
    }

    fn to_screen_all(&self, points: &[Pos2]) -> Vec<Pos2> {
        points.iter().map(|p| self.to_screen(*p)).collect()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    fn fill_rect(&mut self, min: Pos2, size: Vec2, color: Color) {
        let rect = Rect::from_min_size(self.to_screen(min), size);
        self.painter.rect_filled(rect, 0.0, color.to_color32());
    }

    fn stroke_rect(&mut self, p1: Pos2, p2: Pos2, width: f32, color: Color) {
        let rect = Rect::from_two_pos(self.to_screen(p1), self.to_screen(p2));
        self.painter
            .rect_stroke(rect, 0.0, Stroke::new(width, color.to_color32()));
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color.to_color32()),
        );
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color) {
        self.painter.add(Shape::line(
            self.to_screen_all(points),
            Stroke::new(width, color.to_color32()),
        ));
    }

    fn fill_polygon(&mut self, points: &[Pos2], color: Color) {
        self.painter.add(Shape::convex_polygon(
            self.to_screen_all(points),
            color.to_color32(),
            Stroke::NONE,
        ));
    }
}
