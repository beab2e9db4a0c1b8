use crate::compositor::FrameCompositor;
use crate::config::DrawingConfig;
use crate::input::InputHandler;
use crate::renderer::PainterSurface;
use crate::session::DrawingSession;

/// The eframe application: one canvas filling the central panel.
#[derive(Debug)]
pub struct FractalApp {
    session: DrawingSession,
    compositor: FrameCompositor,
    input: InputHandler,
}

impl Default for FractalApp {
    fn default() -> Self {
        Self::with_config(DrawingConfig::default())
    }
}

impl FractalApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DrawingConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: DrawingConfig) -> Self {
        Self {
            session: DrawingSession::default(),
            compositor: FrameCompositor::new(config),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }
}

impl eframe::App for FractalApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                // The canvas tracks the panel, so window resizes are picked up here.
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                self.input.set_canvas_rect(response.rect);

                for event in self.input.process_input(ctx) {
                    self.session.handle_event(&event);
                }

                let mut surface = PainterSurface::new(&painter, response.rect);
                self.compositor.step(&mut self.session, &mut surface, ctx);
            });
    }
}
