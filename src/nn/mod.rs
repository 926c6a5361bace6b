//! Feature extraction for external learners.
//!
//! The engine does not evaluate positions. It exposes a fixed encoding of
//! the board that an external trainer can feed into whatever model it
//! evolves or trains: `StateEncoder` is the contract, `CellOccupancyEncoder`
//! the one encoding shipped.

pub mod encoder;

pub use encoder::{CellOccupancyEncoder, StateEncoder, FEATURES_PER_CELL, FEATURE_LEN};
