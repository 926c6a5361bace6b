//! The six hex directions.
//!
//! Directions have a fixed cyclic order, starting at the top right and going
//! clockwise. That order is part of the engine's contract: it decides the
//! order of moves returned by move enumeration.

use serde::{Deserialize, Serialize};

/// One of the six neighbor directions of a hex cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    TopRight,
    Right,
    BottomRight,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// All directions in cyclic order.
    pub const ALL: [Direction; 6] = [
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Position of this direction in the cyclic order (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at the given cyclic index, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Unit offset `(dx, dy, dz)` in cube coordinates.
    ///
    /// The z axis points down the board, so "top" directions decrease z.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::TopRight => (1, 0, -1),
            Direction::Right => (1, -1, 0),
            Direction::BottomRight => (0, -1, 1),
            Direction::BottomLeft => (-1, 0, 1),
            Direction::Left => (-1, 1, 0),
            Direction::TopLeft => (0, 1, -1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::TopRight => Direction::BottomLeft,
            Direction::Right => Direction::Left,
            Direction::BottomRight => Direction::TopLeft,
            Direction::BottomLeft => Direction::TopRight,
            Direction::Left => Direction::Right,
            Direction::TopLeft => Direction::BottomRight,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::TopRight => "TopRight",
            Direction::Right => "Right",
            Direction::BottomRight => "BottomRight",
            Direction::BottomLeft => "BottomLeft",
            Direction::Left => "Left",
            Direction::TopLeft => "TopLeft",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), Some(*dir));
        }
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn test_offsets_are_unit_cube_vectors() {
        for dir in Direction::ALL {
            let (dx, dy, dz) = dir.offset();
            assert_eq!(dx + dy + dz, 0);
            assert_eq!(dx.abs() + dy.abs() + dz.abs(), 2);
        }
    }

    #[test]
    fn test_opposite_cancels_offset() {
        for dir in Direction::ALL {
            let (ax, ay, az) = dir.offset();
            let (bx, by, bz) = dir.opposite().offset();
            assert_eq!((ax + bx, ay + by, az + bz), (0, 0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::BottomLeft), "BottomLeft");
    }
}
