//! Push validation and execution.
//!
//! A push is checked in two steps. `plan_push` scans the line in front of the
//! origin and applies every legality rule without touching the game; the
//! resulting `PushPlan` is then executed by `execute_push`, which moves cells
//! from the far end back toward the origin so no source cell is overwritten
//! before it is read.
//!
//! ## Scan
//!
//! Walking from the origin along the push direction:
//! - own-run: consecutive marbles of the mover, collected before any enemy
//! - enemy-run: consecutive enemy marbles right after the own-run
//!
//! The walk stops at the first empty cell or at the board edge. An own marble
//! found after the enemy-run has started is a sandwich and always illegal.

use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::config::{MAX_ENEMY_LINE, MAX_PUSH_LINE};
use crate::core::{Coord3D, Direction, Game, Occupant, Player, PushError, PushLine};

/// A validated push, ready to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushPlan {
    /// Player making the push.
    pub player: Player,

    /// Direction of travel.
    pub direction: Direction,

    /// Own marbles, origin first.
    pub own: SmallVec<[Coord3D; 4]>,

    /// Enemy marbles in front of the own-run, nearest first.
    pub enemy: SmallVec<[Coord3D; 3]>,
}

impl PushPlan {
    /// Whether executing this plan pushes an enemy marble off the board.
    #[must_use]
    pub fn captures(&self) -> bool {
        self.enemy
            .last()
            .is_some_and(|last| !last.add(self.direction).is_valid())
    }

    /// Number of marbles that change cells, captured marble included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.own.len() + self.enemy.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check a push for `game.current_player()` without changing anything.
pub fn plan_push(game: &Game, push: PushLine) -> Result<PushPlan, PushError> {
    let PushLine { from, direction } = push;
    let player = game.current_player();

    if let Some(winner) = game.winner() {
        return Err(PushError::GameOver(winner));
    }

    let origin = game
        .get_grid(from)
        .ok_or(PushError::InvalidCoordinate(from))?;
    if !origin.is_owned_by(player) {
        return Err(PushError::NotYourMarble { at: from, player });
    }

    let mut own: SmallVec<[Coord3D; 4]> = SmallVec::new();
    let mut enemy: SmallVec<[Coord3D; 3]> = SmallVec::new();
    let mut cursor = from;

    while let Some(Occupant::Marble(owner)) = game.get_grid(cursor) {
        if owner == player {
            if !enemy.is_empty() {
                return Err(PushError::Sandwich);
            }
            own.push(cursor);
        } else {
            enemy.push(cursor);
        }
        cursor = cursor.add(direction);
    }

    let Some(&last_own) = own.last() else {
        return Err(PushError::NoMarbleToPush);
    };
    if own.len() > MAX_PUSH_LINE {
        return Err(PushError::TooManyMarbles {
            max: MAX_PUSH_LINE,
            got: own.len(),
        });
    }
    if enemy.len() > MAX_ENEMY_LINE {
        return Err(PushError::TooManyEnemyMarbles {
            max: MAX_ENEMY_LINE,
            got: enemy.len(),
        });
    }
    if !enemy.is_empty() && own.len() <= enemy.len() {
        return Err(PushError::NotEnoughMarbles {
            got: own.len(),
            need: enemy.len() + 1,
        });
    }
    if enemy.is_empty() && !last_own.add(direction).is_valid() {
        return Err(PushError::SelfElimination);
    }

    Ok(PushPlan {
        player,
        direction,
        own,
        enemy,
    })
}

/// Apply a plan to `grid`, returning the number of marbles pushed off.
///
/// Writes go to `grid` only; callers pass a scratch copy so a failure leaves
/// the real board untouched.
pub(crate) fn execute_push(grid: &mut Grid, plan: &PushPlan) -> Result<u8, PushError> {
    let mut captured = 0;

    for &source in plan.enemy.iter().rev().chain(plan.own.iter().rev()) {
        let destination = source.add(plan.direction);
        let occupant = grid
            .set(source, Occupant::Empty)
            .ok_or(PushError::InvalidCoordinate(source))?;

        match grid.get(destination) {
            None => captured += 1,
            Some(Occupant::Empty) => {
                grid.set(destination, occupant);
            }
            Some(Occupant::Marble(_)) => return Err(PushError::DestinationOccupied(destination)),
        }
    }

    Ok(captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[(i32, Player)]) -> Game {
        let mut game = Game::empty();
        for &(x, player) in cells {
            game.set_grid(Coord3D::new(x, -x, 0), Occupant::Marble(player));
        }
        game
    }

    fn push_right(from_x: i32) -> PushLine {
        PushLine::new(Coord3D::new(from_x, -from_x, 0), Direction::Right)
    }

    #[test]
    fn test_plan_single() {
        let game = line(&[(0, Player::One)]);
        let plan = plan_push(&game, push_right(0)).unwrap();

        assert_eq!(plan.own.as_slice(), &[Coord3D::ORIGIN]);
        assert!(plan.enemy.is_empty());
        assert!(!plan.captures());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_plan_collects_runs_in_order() {
        let game = line(&[
            (-1, Player::One),
            (0, Player::One),
            (1, Player::One),
            (2, Player::Two),
            (3, Player::Two),
        ]);
        let plan = plan_push(&game, push_right(-1)).unwrap();

        assert_eq!(
            plan.own.as_slice(),
            &[Coord3D::new(-1, 1, 0), Coord3D::ORIGIN, Coord3D::new(1, -1, 0)]
        );
        assert_eq!(
            plan.enemy.as_slice(),
            &[Coord3D::new(2, -2, 0), Coord3D::new(3, -3, 0)]
        );
    }

    #[test]
    fn test_plan_stops_at_gap() {
        // The marble past the gap is not part of the push
        let game = line(&[(0, Player::One), (2, Player::One)]);
        let plan = plan_push(&game, push_right(0)).unwrap();
        assert_eq!(plan.own.len(), 1);
    }

    #[test]
    fn test_rejections_in_rule_order() {
        let game = line(&[(0, Player::One)]);
        assert_eq!(
            plan_push(&game, PushLine::new(Coord3D::new(5, -5, 0), Direction::Left)),
            Err(PushError::InvalidCoordinate(Coord3D::new(5, -5, 0)))
        );
        assert_eq!(
            plan_push(&game, push_right(1)),
            Err(PushError::NotYourMarble {
                at: Coord3D::new(1, -1, 0),
                player: Player::One
            })
        );

        let four = line(&[
            (-2, Player::One),
            (-1, Player::One),
            (0, Player::One),
            (1, Player::One),
        ]);
        assert_eq!(
            plan_push(&four, push_right(-2)),
            Err(PushError::TooManyMarbles { max: 3, got: 4 })
        );
    }

    #[test]
    fn test_sandwich_beats_counts() {
        // Three against one would be legal without the trailing own marble
        let game = line(&[
            (-3, Player::One),
            (-2, Player::One),
            (-1, Player::One),
            (0, Player::Two),
            (1, Player::One),
        ]);
        assert_eq!(plan_push(&game, push_right(-3)), Err(PushError::Sandwich));
    }

    #[test]
    fn test_captures_detects_edge() {
        let game = line(&[(2, Player::One), (3, Player::One), (4, Player::Two)]);
        let plan = plan_push(&game, push_right(2)).unwrap();
        assert!(plan.captures());
    }

    #[test]
    fn test_plan_refuses_finished_game() {
        let mut game = line(&[(0, Player::One)]);
        game.set_score(Player::Two, 6);
        assert_eq!(
            plan_push(&game, push_right(0)),
            Err(PushError::GameOver(Player::Two))
        );
    }

    #[test]
    fn test_execute_moves_far_end_first() {
        let game = line(&[(0, Player::One), (1, Player::One), (2, Player::Two)]);
        let plan = plan_push(&game, push_right(0)).unwrap();

        let mut grid = game.grid().clone();
        let captured = execute_push(&mut grid, &plan).unwrap();

        assert_eq!(captured, 0);
        assert_eq!(grid.get(Coord3D::ORIGIN), Some(Occupant::Empty));
        assert_eq!(grid.get(Coord3D::new(1, -1, 0)), Some(Occupant::Marble(Player::One)));
        assert_eq!(grid.get(Coord3D::new(2, -2, 0)), Some(Occupant::Marble(Player::One)));
        assert_eq!(grid.get(Coord3D::new(3, -3, 0)), Some(Occupant::Marble(Player::Two)));
    }

    #[test]
    fn test_execute_reports_occupied_destination() {
        // A stale plan that ignores a marble placed after validation
        let mut game = line(&[(0, Player::One)]);
        let plan = plan_push(&game, push_right(0)).unwrap();
        game.set_grid(Coord3D::new(1, -1, 0), Occupant::Marble(Player::Two));

        let mut grid = game.grid().clone();
        let err = execute_push(&mut grid, &plan).unwrap_err();

        assert_eq!(err, PushError::DestinationOccupied(Coord3D::new(1, -1, 0)));
        assert!(err.is_fatal());
    }
}
