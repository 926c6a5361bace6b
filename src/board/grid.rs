//! Grid storage, builders and the opening position.

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::config::{CELL_COUNT, MARBLES_PER_PLAYER};
use crate::core::coord::{Coord2D, Coord3D, BOARD_RADIUS};
use crate::core::direction::Direction;
use crate::core::player::{Occupant, Player};

const SPAN: usize = (2 * BOARD_RADIUS + 1) as usize;

/// Opening cells as 2D `(x, y)` pairs, one list per player.
///
/// Player 2 holds the top two rows and the middle three cells of the third;
/// player 1 holds the point-mirrored cells at the bottom.
#[rustfmt::skip]
pub const STARTING_POSITION: [(Player, [(i32, i32); MARBLES_PER_PLAYER]); 2] = [
    (
        Player::One,
        [
            (-4, 4), (-3, 4), (-2, 4), (-1, 4), (0, 4),
            (-4, 3), (-3, 3), (-2, 3), (-1, 3), (0, 3), (1, 3),
            (-2, 2), (-1, 2), (0, 2),
        ],
    ),
    (
        Player::Two,
        [
            (0, -4), (1, -4), (2, -4), (3, -4), (4, -4),
            (-1, -3), (0, -3), (1, -3), (2, -3), (3, -3), (4, -3),
            (0, -2), (1, -2), (2, -2),
        ],
    ),
];

/// Slot assignment for the 61 cells.
struct Layout {
    /// Cells in row-major 2D order; position is the slot index.
    cells: Vec<Coord3D>,
    /// Slot of each `(x, z)` pair, offset by the board radius.
    lookup: [[Option<u8>; SPAN]; SPAN],
}

impl Layout {
    fn new() -> Self {
        let mut cells = discover_cells();
        cells.sort_by_key(|c| c.to_2d());

        let mut lookup = [[None; SPAN]; SPAN];
        for (slot, c) in cells.iter().enumerate() {
            lookup[offset(c.x)][offset(c.z)] = Some(slot as u8);
        }

        Self { cells, lookup }
    }

    fn slot(&self, coord: Coord3D) -> Option<usize> {
        if !coord.is_valid() {
            return None;
        }
        self.lookup[offset(coord.x)][offset(coord.z)].map(usize::from)
    }
}

static LAYOUT: Lazy<Layout> = Lazy::new(Layout::new);
static EMPTY_GRID: Lazy<Grid> = Lazy::new(build_empty_grid);
static STARTING_GRID: Lazy<Grid> = Lazy::new(build_starting_grid);

fn offset(v: i32) -> usize {
    (v + BOARD_RADIUS) as usize
}

/// Breadth-first walk from the center over the six neighbor offsets.
fn discover_cells() -> Vec<Coord3D> {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut cells = Vec::with_capacity(CELL_COUNT);

    visited.insert(Coord3D::ORIGIN);
    queue.push_back(Coord3D::ORIGIN);

    while let Some(current) = queue.pop_front() {
        cells.push(current);
        for direction in Direction::ALL {
            let next = current.add(direction);
            if next.is_valid() && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    cells
}

/// Build a grid with every cell empty.
///
/// Panics if the board walk does not find exactly 61 cells.
#[must_use]
pub fn build_empty_grid() -> Grid {
    assert_eq!(LAYOUT.cells.len(), CELL_COUNT, "Board must have 61 cells");
    Grid {
        cells: [Occupant::Empty; CELL_COUNT],
    }
}

/// Build a grid holding the canonical opening position.
#[must_use]
pub fn build_starting_grid() -> Grid {
    let mut grid = EMPTY_GRID.clone();
    for (player, cells) in STARTING_POSITION {
        for (x, y) in cells {
            let previous = grid.set(Coord2D::new(x, y).to_3d(), Occupant::Marble(player));
            assert_eq!(previous, Some(Occupant::Empty), "Opening cells must be distinct board cells");
        }
    }
    grid
}

/// Occupancy of the 61 board cells.
///
/// Cloning copies the whole array; two grids never share cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Occupant; CELL_COUNT],
}

impl Grid {
    /// Copy of the shared empty grid.
    #[must_use]
    pub fn empty() -> Self {
        EMPTY_GRID.clone()
    }

    /// Copy of the shared starting grid.
    #[must_use]
    pub fn starting() -> Self {
        STARTING_GRID.clone()
    }

    /// Number of cells (always 61).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupant at `coord`, or `None` if `coord` is not a board cell.
    #[must_use]
    pub fn get(&self, coord: Coord3D) -> Option<Occupant> {
        LAYOUT.slot(coord).map(|slot| self.cells[slot])
    }

    /// Overwrite the occupant at `coord`.
    ///
    /// Returns the previous occupant, or `None` (and changes nothing) if
    /// `coord` is not a board cell.
    pub fn set(&mut self, coord: Coord3D, occupant: Occupant) -> Option<Occupant> {
        let slot = LAYOUT.slot(coord)?;
        Some(std::mem::replace(&mut self.cells[slot], occupant))
    }

    /// Iterate over all cells in row-major 2D order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord3D, Occupant)> + '_ {
        LAYOUT.cells.iter().copied().zip(self.cells.iter().copied())
    }

    /// Cells holding a marble of `player`, in row-major 2D order.
    pub fn cells_of(&self, player: Player) -> impl Iterator<Item = Coord3D> + '_ {
        self.iter()
            .filter(move |(_, occupant)| occupant.is_owned_by(player))
            .map(|(coord, _)| coord)
    }

    /// Number of marbles `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|o| o.is_owned_by(player)).count()
    }

    /// Human-readable dump: one line per row, indented into a hexagon.
    ///
    /// ```
    /// use abalone_engine::board::Grid;
    ///
    /// let dump = Grid::starting().show();
    /// assert_eq!(dump.lines().next(), Some("    2 2 2 2 2"));
    /// ```
    #[must_use]
    pub fn show(&self) -> String {
        let mut out = String::new();
        let mut current_row = None;

        for (coord, occupant) in self.iter() {
            let row = coord.to_2d().y;
            if current_row != Some(row) {
                if current_row.is_some() {
                    out.push('\n');
                }
                out.push_str(&" ".repeat(row.unsigned_abs() as usize));
                current_row = Some(row);
            } else {
                out.push(' ');
            }
            out.push(occupant.symbol());
        }

        out.push('\n');
        out
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grid(\n{})", self.show())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter().map(|o| o.number()))
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let raw = Vec::<u8>::deserialize(deserializer)?;
        if raw.len() != CELL_COUNT {
            return Err(D::Error::invalid_length(raw.len(), &"61 cells"));
        }

        let mut cells = [Occupant::Empty; CELL_COUNT];
        for (cell, value) in cells.iter_mut().zip(raw) {
            *cell = Occupant::from_number(value)
                .ok_or_else(|| D::Error::custom(format!("invalid occupant {value}")))?;
        }

        Ok(Self { cells })
    }
}
