/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt;

use arena_core::{DiscreteAction, Vec2};
use serde::{Deserialize, Serialize};

/// A direction type, with up being positive y.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

impl Direction {
    /// Returns the discrete action moving in this direction.
    pub const fn discrete_action(self) -> DiscreteAction {
        match self {
            Direction::Up => DiscreteAction::PosY,
            Direction::Down => DiscreteAction::NegY,
            Direction::Left => DiscreteAction::NegX,
            Direction::Right => DiscreteAction::PosX,
        }
    }

    /// Returns the unit vector of this direction.
    pub const fn unit(self) -> Vec2 {
        self.discrete_action().direction()
    }
}

/// All directions.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

#[cfg(test)]
mod tests {
    use arena_core::{DiscreteAction, Vec2};

    use crate::*;

    #[test]
    fn directions_map_to_reference_indices() {
        assert_eq!(Direction::Right.discrete_action().index(), 1);
        assert_eq!(Direction::Left.discrete_action().index(), 2);
        assert_eq!(Direction::Up.discrete_action().index(), 3);
        assert_eq!(Direction::Down.discrete_action(), DiscreteAction::NegY);
        assert_eq!(Direction::Down.discrete_action().index(), 4);
    }

    #[test]
    fn units_sum_to_zero() {
        let sum = DIRECTIONS
            .iter()
            .fold(Vec2::ZERO, |acc, direction| acc + direction.unit());
        assert_eq!(sum, Vec2::ZERO);
        assert_eq!(Direction::Up.unit(), Vec2::new(0., 1.));
    }
}
