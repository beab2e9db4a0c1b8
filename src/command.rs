use crate::document::Document;
use crate::rectangle::Rectangle;

/// Changes to the document produced by pointer interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a finished rectangle.
    AddRectangle(Rectangle),
}

impl Command {
    pub fn execute(self, document: &mut Document) {
        match self {
            Command::AddRectangle(rectangle) => {
                log::debug!(
                    "Committed rectangle {:?} -> {:?} ({} total)",
                    rectangle.p1(),
                    rectangle.p2(),
                    document.len() + 1
                );
                document.add_rectangle(rectangle);
            }
        }
    }
}
