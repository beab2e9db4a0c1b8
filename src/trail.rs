use egui::Pos2;
use std::collections::VecDeque;

/// Recent pointer positions, oldest first.
///
/// The buffer itself never caps its length. Growth and decay are paced by the
/// frame compositor, which performs at most one add or one drop per frame.
#[derive(Debug, Clone, Default)]
pub struct TrailBuffer {
    points: VecDeque<Pos2>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `point` as the newest entry.
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push_back(point);
    }

    /// Remove the oldest entry. Does nothing on an empty trail.
    pub fn drop_point(&mut self) {
        self.points.pop_front();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, where 0 is the oldest.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get_point(&self, index: usize) -> Pos2 {
        self.points[index]
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Pos2> + '_ {
        self.points.iter().copied()
    }

    /// Newest to oldest, the order the trail is painted in.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_points_kept_in_insertion_order() {
        let mut trail = TrailBuffer::new();
        for i in 0..5 {
            trail.add_point(pos2(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 5);
        assert_eq!(trail.get_point(0), pos2(0.0, 0.0));
        assert_eq!(trail.get_point(4), pos2(4.0, 0.0));
    }

    #[test]
    fn test_drop_removes_oldest() {
        let mut trail = TrailBuffer::new();
        trail.add_point(pos2(1.0, 1.0));
        trail.add_point(pos2(2.0, 2.0));
        trail.add_point(pos2(3.0, 3.0));

        trail.drop_point();

        let remaining: Vec<_> = trail.iter().collect();
        assert_eq!(remaining, vec![pos2(2.0, 2.0), pos2(3.0, 3.0)]);
    }

    #[test]
    fn test_drop_on_empty_is_noop() {
        let mut trail = TrailBuffer::new();
        for _ in 0..10 {
            trail.drop_point();
        }
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut trail = TrailBuffer::new();
        trail.add_point(pos2(7.0, 7.0));
        trail.add_point(pos2(7.0, 7.0));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_newest_first_iteration() {
        let mut trail = TrailBuffer::new();
        trail.add_point(pos2(1.0, 0.0));
        trail.add_point(pos2(2.0, 0.0));
        let order: Vec<_> = trail.iter_newest_first().collect();
        assert_eq!(order, vec![pos2(2.0, 0.0), pos2(1.0, 0.0)]);
    }

    #[test]
    #[should_panic]
    fn test_get_point_out_of_range_panics() {
        let trail = TrailBuffer::new();
        trail.get_point(0);
    }
}
