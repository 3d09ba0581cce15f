/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// One of the five discrete movement actions.
///
/// The indices are shared with externally trained discrete policies and must not change.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscreteAction {
    NoOp = 0,
    PosX = 1,
    NegX = 2,
    PosY = 3,
    NegY = 4,
}

/// All discrete actions, in index order.
pub const DISCRETE_ACTIONS: [DiscreteAction; 5] = [
    DiscreteAction::NoOp,
    DiscreteAction::PosX,
    DiscreteAction::NegX,
    DiscreteAction::PosY,
    DiscreteAction::NegY,
];

impl DiscreteAction {
    pub const fn index(self) -> usize {
        self as usize
    }
    pub fn from_index(index: usize) -> Option<Self> {
        DISCRETE_ACTIONS.get(index).copied()
    }
    /// Returns the unit displacement of this action, zero for no-op.
    pub const fn direction(self) -> Vec2 {
        match self {
            DiscreteAction::NoOp => Vec2::ZERO,
            DiscreteAction::PosX => Vec2::new(1., 0.),
            DiscreteAction::NegX => Vec2::new(-1., 0.),
            DiscreteAction::PosY => Vec2::new(0., 1.),
            DiscreteAction::NegY => Vec2::new(0., -1.),
        }
    }
}

impl fmt::Display for DiscreteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscreteAction::NoOp => write!(f, "NoOp"),
            DiscreteAction::PosX => write!(f, "+x"),
            DiscreteAction::NegX => write!(f, "-x"),
            DiscreteAction::PosY => write!(f, "+y"),
            DiscreteAction::NegY => write!(f, "-y"),
        }
    }
}

/// A movement command.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Movement {
    Continuous(Vec2),
    Discrete(DiscreteAction),
}
impl Default for Movement {
    fn default() -> Self {
        Movement::Continuous(Vec2::ZERO)
    }
}

/// The action of one agent for one tick, consumed by the physics integrator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Action {
    /// physical action
    pub u: Movement,
    /// communication action
    pub c: Vec<f32>,
}
impl Action {
    pub fn continuous(force: Vec2) -> Self {
        Self {
            u: Movement::Continuous(force),
            c: Vec::new(),
        }
    }
    pub fn discrete(action: DiscreteAction) -> Self {
        Self {
            u: Movement::Discrete(action),
            c: Vec::new(),
        }
    }
    /// Returns the movement as a force vector, discrete actions mapping to unit directions.
    pub fn force(&self) -> Vec2 {
        match self.u {
            Movement::Continuous(force) => force,
            Movement::Discrete(action) => action.direction(),
        }
    }
}
