use crate::config::DrawingConfig;
use crate::fractal::FractalPattern;
use crate::rectangle::Rectangle;
use crate::session::DrawingSession;
use crate::surface::{FrameScheduler, Surface};
use crate::trail::TrailBuffer;
use egui::{Pos2, vec2};

/// Paints one frame of a [`DrawingSession`].
#[derive(Debug, Clone, Default)]
pub struct FrameCompositor {
    config: DrawingConfig,
}

impl FrameCompositor {
    pub fn new(config: DrawingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    /// Runs a full frame and asks `scheduler` for the next one.
    ///
    /// Order: background, trail update, rectangles with their fractals, trail,
    /// rubber band.
    pub fn step(
        &self,
        session: &mut DrawingSession,
        surface: &mut dyn Surface,
        scheduler: &dyn FrameScheduler,
    ) {
        let size = surface.size();
        surface.fill_rect(Pos2::ZERO, size, self.config.background);

        session.update_trail();

        let mut triangles = 0;
        for rectangle in session.document().rectangles() {
            triangles += self.draw_rectangle(surface, rectangle);
        }

        self.draw_trail(surface, session.trail());

        if let Some((click_start, pointer)) = session.interaction().pending() {
            surface.stroke_rect(
                click_start,
                pointer,
                self.config.rubber_band_width,
                self.config.rubber_band_color,
            );
        }

        log::trace!(
            "Frame: {} rectangles, {} triangles, trail length {}",
            session.document().len(),
            triangles,
            session.trail().len()
        );

        scheduler.request_next_frame();
    }

    /// Outline, diagonals, then the fractal. Returns the number of triangles drawn.
    fn draw_rectangle(&self, surface: &mut dyn Surface, rectangle: &Rectangle) -> usize {
        let width = self.config.outline_width;
        let outline = self.config.outline_color;
        surface.stroke_rect(rectangle.p1(), rectangle.p2(), width, outline);
        for [from, to] in rectangle.diagonals() {
            surface.line(from, to, width, outline);
        }

        let mut count = 0;
        for triangle in FractalPattern::with_params(*rectangle, self.config.fractal).triangles() {
            surface.polyline(&triangle.path, self.config.triangle_stroke_width, triangle.color);
            surface.fill_polygon(&triangle.path, triangle.color);
            count += 1;
        }
        count
    }

    /// Newest point opaque, each older one faded once more.
    fn draw_trail(&self, surface: &mut dyn Surface, trail: &TrailBuffer) {
        let size = vec2(self.config.trail_point_size, self.config.trail_point_size);
        let mut color = self.config.trail_color;
        for point in trail.iter_newest_first() {
            surface.fill_rect(point, size, color);
            color = color.fade(self.config.trail_fade);
        }
    }
}
