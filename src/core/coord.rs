//! Cube coordinates on the hexagonal board.
//!
//! ## Layout
//!
//! - Center is `(0, 0, 0)`
//! - `x` grows toward the right, `z` grows toward the bottom
//! - Every cell satisfies `x + y + z = 0`
//!
//! The board is the hexagon of radius [`BOARD_RADIUS`]: every component lies in
//! `[-4, 4]`, which gives 61 cells.
//!
//! ## 2D projection
//!
//! `Coord2D { x, y }` drops the cube `y` axis: `to_2d(x, y, z) = (x, z)` and
//! `to_3d(x, y) = (x, -x - y, y)`. The 2D form is used for display and for the
//! canonical ordering of moves.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Largest absolute value of any cube component on the board.
pub const BOARD_RADIUS: i32 = 4;

/// A hex cell in cube coordinates.
///
/// Invalid coordinates are representable (walking off the edge produces them)
/// but fail [`Coord3D::is_valid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord3D {
    /// The center cell.
    pub const ORIGIN: Coord3D = Coord3D { x: 0, y: 0, z: 0 };

    /// Create a coordinate. No validation is performed.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Neighbor one step along `direction`.
    #[must_use]
    pub const fn add(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Whether this coordinate is one of the 61 board cells.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        in_range(self.x) && in_range(self.y) && in_range(self.z) && self.x + self.y + self.z == 0
    }

    /// Project onto the 2D display plane.
    #[must_use]
    pub const fn to_2d(self) -> Coord2D {
        Coord2D {
            x: self.x,
            y: self.z,
        }
    }
}

impl std::fmt::Display for Coord3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A hex cell in the 2D display plane.
///
/// Ordering is row-major: by `y` first, then `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord2D {
    pub x: i32,
    pub y: i32,
}

impl Coord2D {
    /// Create a 2D coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Lift into cube coordinates.
    #[must_use]
    pub const fn to_3d(self) -> Coord3D {
        Coord3D {
            x: self.x,
            y: -self.x - self.y,
            z: self.y,
        }
    }

    /// Iterate over every valid board cell in row-major 2D order.
    ///
    /// ```
    /// use abalone_engine::core::Coord2D;
    ///
    /// let cells: Vec<_> = Coord2D::board_cells().collect();
    /// assert_eq!(cells.len(), 61);
    /// assert_eq!(cells[0], Coord2D::new(0, -4));
    /// ```
    pub fn board_cells() -> impl Iterator<Item = Coord2D> {
        (-BOARD_RADIUS..=BOARD_RADIUS)
            .flat_map(|y| (-BOARD_RADIUS..=BOARD_RADIUS).map(move |x| Coord2D { x, y }))
            .filter(|c| c.to_3d().is_valid())
    }
}

impl PartialOrd for Coord2D {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord2D {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

const fn in_range(v: i32) -> bool {
    v >= -BOARD_RADIUS && v <= BOARD_RADIUS
}
