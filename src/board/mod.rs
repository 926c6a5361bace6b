//! Board storage.
//!
//! The board is a dense array of 61 occupants. A process-wide layout table
//! maps cube coordinates to array slots; it is discovered once by a
//! breadth-first walk from the center. The empty and starting grids are
//! built once and copied by value into each new game.

mod grid;

pub use grid::{build_empty_grid, build_starting_grid, Grid, STARTING_POSITION};
