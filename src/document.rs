use crate::rectangle::Rectangle;

/// Committed rectangles in the order they were drawn. Later entries paint on top.
///
/// Append only: rectangles are never edited or removed once added.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rectangles: Vec<Rectangle>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            rectangles: Vec::new(),
        }
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}
