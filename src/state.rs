//! Pointer interaction on the canvas.
//!
//! ```text
//!          pointer down
//!   Idle ───────────────► Dragging ──┐ pointer move
//!    ▲  ◄───────────────     │  ◄────┘
//!    │     pointer up        │
//!    │     (commits)         │
//!    └───────────────────────┘
//!       pointer leave (abandons)
//! ```
//!
//! Pointer moves in `Idle` only track the pointer.
use crate::color::Palette;
use crate::command::Command;
use crate::rectangle::Rectangle;
use egui::Pos2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A rectangle is being stretched from `click_start` to the pointer.
    Dragging { click_start: Pos2 },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionStateMachine {
    state: InteractionState,
    /// Last known pointer position, `None` when the pointer is off the canvas.
    pointer: Option<Pos2>,
}

impl InteractionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Corners of the rubber band rectangle while dragging.
    pub fn pending(&self) -> Option<(Pos2, Pos2)> {
        match (self.state, self.pointer) {
            (InteractionState::Dragging { click_start }, Some(pointer)) => {
                Some((click_start, pointer))
            }
            _ => None,
        }
    }

    /// Starts a drag. A second press while dragging restarts from `pos`.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        self.state = InteractionState::Dragging { click_start: pos };
        self.pointer = Some(pos);
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) {
        self.pointer = Some(pos);
    }

    /// Finishes a drag, returning the command that commits the rectangle.
    pub fn on_pointer_up(&mut self, pos: Pos2, palette: &mut dyn Palette) -> Option<Command> {
        self.pointer = Some(pos);
        match std::mem::take(&mut self.state) {
            InteractionState::Dragging { click_start } => Some(Command::AddRectangle(
                Rectangle::new(click_start, pos, palette.next_color()),
            )),
            InteractionState::Idle => None,
        }
    }

    /// The pointer left the canvas. Any drag in progress is dropped.
    pub fn on_pointer_leave(&mut self) {
        if let InteractionState::Dragging { click_start } = self.state {
            log::debug!("Abandoned drag started at {:?}", click_start);
        }
        self.state = InteractionState::Idle;
        self.pointer = None;
    }
}
