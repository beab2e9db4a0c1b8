use egui::{Context, Pos2, Rect};

/// Pointer signals in canvas coordinates, where `(0, 0)` is the canvas' top left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Primary button was released
    PointerUp { position: Pos2 },
    /// Pointer moved, with or without the button held
    PointerMove { position: Pos2 },
    /// Pointer left the canvas or the window
    PointerLeave,
}

/// Raw pointer state for one frame, in screen coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

/// Turns egui's per-frame pointer state into [`InputEvent`]s for the canvas.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let snapshot = ctx.input(|input| PointerSnapshot {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        });
        self.process_snapshot(snapshot)
    }

    pub fn process_snapshot(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = snapshot
            .hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos));

        match inside {
            Some(pos) => {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_canvas(pos),
                    });
                }
                if snapshot.primary_pressed {
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                    });
                }
                if snapshot.primary_released {
                    events.push(InputEvent::PointerUp {
                        position: self.to_canvas(pos),
                    });
                }
            }
            None if self.last_pointer_pos.is_some() => events.push(InputEvent::PointerLeave),
            None => {}
        }

        self.last_pointer_pos = inside;
        events
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }
}
