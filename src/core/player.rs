//! Players, cell occupants and per-player data storage.
//!
//! ## Player
//!
//! Abalone is strictly two-player. Players keep the numeric encoding `1` and
//! `2` used by feature vectors and text dumps; the opponent of `p` is `3 - p`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`. Backed by an array, so cloning
//! a map always copies its values.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Player from its numeric encoding (1 or 2).
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Numeric encoding (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// The other player.
    ///
    /// ```
    /// use abalone_engine::core::Player;
    ///
    /// assert_eq!(Player::One.opponent(), Player::Two);
    /// assert_eq!(Player::Two.opponent(), Player::One);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Content of a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Marble(Player),
}

impl Occupant {
    /// Owner of the marble in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Marble(p) => Some(p),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Whether this cell holds a marble of `player`.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Numeric encoding: 0 empty, 1 or 2 for a marble.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Occupant::Empty => 0,
            Occupant::Marble(p) => p.number(),
        }
    }

    /// Occupant from its numeric encoding.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Occupant::Empty),
            n => match Player::from_number(n) {
                Some(p) => Some(Occupant::Marble(p)),
                None => None,
            },
        }
    }

    /// Single-character rendering used by board dumps.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Marble(Player::One) => '1',
            Occupant::Marble(Player::Two) => '2',
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        Occupant::Marble(player)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use abalone_engine::core::{Player, PlayerMap};
///
/// let mut score: PlayerMap<u8> = PlayerMap::with_value(0);
/// score[Player::Two] += 1;
///
/// assert_eq!(score[Player::One], 0);
/// assert_eq!(score[Player::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
