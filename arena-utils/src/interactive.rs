/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::sync::atomic::{AtomicBool, Ordering};

use arena_core::{Action, Agent, DiscreteAction, Policy, Vec2, World};

use crate::Direction;

/// Magnitude of the force per pressed key in continuous mode.
pub const INTERACTIVE_FORCE: f32 = 0.4;

/// A policy driven by keyboard input.
///
/// Only produces movement, not communication.
/// The input front-end forwards key events through [key_press](Self::key_press) and [key_release](Self::key_release).
#[derive(Debug, Default)]
pub struct InteractivePolicy {
    /// emit discrete actions instead of continuous forces
    discrete: bool,
    // right, left, down, up
    keys: [AtomicBool; 4],
}
impl InteractivePolicy {
    pub fn new(discrete: bool) -> Self {
        Self {
            discrete,
            keys: Default::default(),
        }
    }

    fn slot(direction: Direction) -> usize {
        match direction {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Up => 3,
        }
    }

    fn is_pressed(&self, direction: Direction) -> bool {
        self.keys[Self::slot(direction)].load(Ordering::Relaxed)
    }

    pub fn key_press(&self, direction: Direction) {
        log::debug!("key {direction} pressed");
        self.keys[Self::slot(direction)].store(true, Ordering::Relaxed);
    }

    pub fn key_release(&self, direction: Direction) {
        log::debug!("key {direction} released");
        self.keys[Self::slot(direction)].store(false, Ordering::Relaxed);
    }

    /// Returns the discrete action of the currently pressed keys.
    ///
    /// When several keys are pressed, the last one in the order right, left, down, up wins.
    pub fn discrete_action(&self) -> DiscreteAction {
        [
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
        ]
        .into_iter()
        .filter(|direction| self.is_pressed(*direction))
        .last()
        .map_or(DiscreteAction::NoOp, Direction::discrete_action)
    }

    /// Returns the continuous force of the currently pressed keys, opposite keys cancelling out.
    pub fn force(&self) -> Vec2 {
        let mut force = Vec2::ZERO;
        if self.is_pressed(Direction::Right) {
            force.x += INTERACTIVE_FORCE;
        }
        if self.is_pressed(Direction::Left) {
            force.x -= INTERACTIVE_FORCE;
        }
        if self.is_pressed(Direction::Up) {
            force.y += INTERACTIVE_FORCE;
        }
        if self.is_pressed(Direction::Down) {
            force.y -= INTERACTIVE_FORCE;
        }
        force
    }
}

impl Policy for InteractivePolicy {
    /// Ignores the agent and the world, the action only depends on the keyboard.
    fn action(&self, _agent: &Agent, _world: &World) -> Action {
        if self.discrete {
            Action::discrete(self.discrete_action())
        } else {
            Action::continuous(self.force())
        }
    }
}
