use crate::color::{Palette, RandomPalette};
use crate::document::Document;
use crate::input::InputEvent;
use crate::state::InteractionStateMachine;
use crate::trail::TrailBuffer;

/// Everything one drawing window owns: the trail, the committed rectangles
/// and the pointer interaction in progress.
pub struct DrawingSession {
    trail: TrailBuffer,
    document: Document,
    interaction: InteractionStateMachine,
    palette: Box<dyn Palette>,
}

impl std::fmt::Debug for DrawingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSession")
            .field("trail", &self.trail)
            .field("document", &self.document)
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(Box::new(RandomPalette))
    }
}

impl DrawingSession {
    pub fn new(palette: Box<dyn Palette>) -> Self {
        Self {
            trail: TrailBuffer::new(),
            document: Document::new(),
            interaction: InteractionStateMachine::new(),
            palette,
        }
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn interaction(&self) -> &InteractionStateMachine {
        &self.interaction
    }

    /// Apply one pointer event. Only a completed drag changes the document.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => self.interaction.on_pointer_down(position),
            InputEvent::PointerMove { position } => self.interaction.on_pointer_move(position),
            InputEvent::PointerUp { position } => {
                if let Some(command) = self
                    .interaction
                    .on_pointer_up(position, self.palette.as_mut())
                {
                    command.execute(&mut self.document);
                }
            }
            InputEvent::PointerLeave => self.interaction.on_pointer_leave(),
        }
    }

    /// Grow the trail by the current pointer, or shrink it by one point when
    /// the pointer is off the canvas.
    pub fn update_trail(&mut self) {
        match self.interaction.pointer() {
            Some(pointer) => self.trail.add_point(pointer),
            None => self.trail.drop_point(),
        }
    }
}
