#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod compositor;
pub mod config;
pub mod document;
pub mod error;
pub mod fractal;
pub mod input;
pub mod rectangle;
pub mod renderer;
pub mod session;
pub mod state;
pub mod surface;
pub mod trail;

pub use app::FractalApp;
pub use color::{Color, Palette, RandomPalette};
pub use command::Command;
pub use compositor::FrameCompositor;
pub use config::{ConfigError, DrawingConfig};
pub use document::Document;
pub use error::{AppError, AppResult};
pub use fractal::{FractalParams, FractalPattern, TriangleCommand};
pub use input::{InputEvent, InputHandler};
pub use rectangle::Rectangle;
pub use renderer::PainterSurface;
pub use session::DrawingSession;
pub use state::{InteractionState, InteractionStateMachine};
pub use surface::{DrawOp, FrameScheduler, RecordingSurface, Surface};
pub use trail::TrailBuffer;

/// Opens the drawing window and runs until it is closed.
pub fn run_app(config: DrawingConfig) -> AppResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Fractal Canvas"),
        ..Default::default()
    };
    log::info!("Starting fractal canvas");
    eframe::run_native(
        "Fractal Canvas",
        options,
        Box::new(|cc| Ok(Box::new(FractalApp::new(cc, config)))),
    )?;
    Ok(())
}
