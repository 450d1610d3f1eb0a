use serde::{Deserialize, Serialize};

use crate::types::{Direction, Pos};

/// Inclusive rectangle of cells shown by a renderer.
///
/// A viewport is owned by whoever displays the world. It need not contain
/// any live cell and may extend into negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub top_left: Pos,
    pub bottom_right: Pos,
}

impl Viewport {
    /// Corners are normalised so that `top_left` is the per-axis minimum.
    pub fn new(a: Pos, b: Pos) -> Self {
        Self {
            top_left: Pos::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Pos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Viewport of `width` x `height` cells starting at `origin`.
    ///
    /// Zero sizes are treated as one cell.
    pub fn from_size(origin: Pos, width: u32, height: u32) -> Self {
        let w = i64::from(width.max(1)) - 1;
        let h = i64::from(height.max(1)) - 1;
        Self {
            top_left: origin,
            bottom_right: Pos::new(origin.x.saturating_add(w), origin.y.saturating_add(h)),
        }
    }

    pub fn width(&self) -> u64 {
        self.bottom_right.x.abs_diff(self.top_left.x) + 1
    }

    pub fn height(&self) -> u64 {
        self.bottom_right.y.abs_diff(self.top_left.y) + 1
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&pos.x)
            && (self.top_left.y..=self.bottom_right.y).contains(&pos.y)
    }

    /// Shift both corners by `(dx, dy)`. Returns false and leaves the
    /// viewport unchanged if either corner would leave `i64`.
    pub fn pan(&mut self, dx: i64, dy: i64) -> bool {
        match (self.top_left.offset(dx, dy), self.bottom_right.offset(dx, dy)) {
            (Some(tl), Some(br)) => {
                self.top_left = tl;
                self.bottom_right = br;
                true
            }
            _ => false,
        }
    }

    pub fn pan_toward(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.pan(dx, dy)
    }

    /// Row coordinates from top to bottom.
    pub fn rows(&self) -> std::ops::RangeInclusive<i64> {
        self.top_left.y..=self.bottom_right.y
    }

    /// Column coordinates from left to right.
    pub fn columns(&self) -> std::ops::RangeInclusive<i64> {
        self.top_left.x..=self.bottom_right.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_corners() {
        let v = Viewport::new(Pos::new(3, -1), Pos::new(-2, 4));
        assert_eq!(v.top_left, Pos::new(-2, -1));
        assert_eq!(v.bottom_right, Pos::new(3, 4));
    }

    #[test]
    fn from_size_is_inclusive() {
        let v = Viewport::from_size(Pos::ORIGIN, 80, 30);
        assert_eq!(v.width(), 80);
        assert_eq!(v.height(), 30);
        assert_eq!(v.bottom_right, Pos::new(79, 29));
    }

    #[test]
    fn contains_checks_both_axes() {
        let v = Viewport::new(Pos::new(-1, -1), Pos::new(1, 1));
        assert!(v.contains(Pos::new(0, 0)));
        assert!(v.contains(Pos::new(-1, 1)));
        assert!(!v.contains(Pos::new(2, 0)));
        assert!(!v.contains(Pos::new(0, -2)));
    }

    #[test]
    fn pan_moves_both_corners() {
        let mut v = Viewport::from_size(Pos::ORIGIN, 5, 5);
        assert!(v.pan_toward(Direction::Left));
        assert_eq!(v.top_left, Pos::new(-1, 0));
        assert_eq!(v.bottom_right, Pos::new(3, 4));
        assert!(v.pan_toward(Direction::Up));
        assert_eq!(v.top_left, Pos::new(-1, -1));
        assert_eq!(v.bottom_right, Pos::new(3, 3));
    }

    #[test]
    fn pan_at_edge_of_plane_is_refused() {
        let mut v = Viewport::new(Pos::new(i64::MAX - 1, 0), Pos::new(i64::MAX, 0));
        let before = v;
        assert!(!v.pan(1, 0));
        assert_eq!(v, before);
    }

    #[test]
    fn rows_and_columns_cover_the_rectangle() {
        let v = Viewport::new(Pos::new(-1, 2), Pos::new(1, 3));
        assert_eq!(v.rows().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(v.columns().collect::<Vec<_>>(), vec![-1, 0, 1]);
    }
}
