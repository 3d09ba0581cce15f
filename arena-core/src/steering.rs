/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::ptr;

use crate::{clamp_force, inverse_square, inverse_square_force, Action, Agent, Policy, Vec2, World};

/// Limit of the arena on each axis, in both directions.
pub const ARENA_LIMIT: f32 = 1.;

/// Policy for prey: runs away from the adversaries and the limits of the arena.
///
/// Driven by repulsive forces inversely proportional to the distance to those entities.
/// Only creates movement actions, not communication.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunnerPolicy {
    pub max_force: f32,
}
impl Default for RunnerPolicy {
    fn default() -> Self {
        Self { max_force: 1. }
    }
}
impl RunnerPolicy {
    pub const fn new(max_force: f32) -> Self {
        Self { max_force }
    }

    /// Returns the summed repulsive force, before clamping.
    pub fn raw_force(&self, agent: &Agent, world: &World) -> Vec2 {
        let pos = agent.pos();
        let mut force = Vec2::ZERO;

        // Forces from adversaries
        for other in world.adversaries() {
            if !ptr::eq(agent, other) {
                force += inverse_square_force(pos - other.pos());
            }
        }

        // Forces from the limits of the arena
        force.x += inverse_square(pos.x - ARENA_LIMIT);
        force.x += inverse_square(pos.x + ARENA_LIMIT);
        force.y += inverse_square(pos.y - ARENA_LIMIT);
        force.y += inverse_square(pos.y + ARENA_LIMIT);

        force
    }
}
impl Policy for RunnerPolicy {
    fn action(&self, agent: &Agent, world: &World) -> Action {
        let force = clamp_force(self.raw_force(agent, world), self.max_force);
        log::trace!("{} runs with force {}", agent.name(), force);
        Action::continuous(force)
    }
}

/// Policy for predators: rushes towards the prey.
///
/// Driven by attractive forces inversely proportional to the distance to the prey.
/// Only creates movement actions, not communication.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RusherPolicy {
    pub max_force: f32,
}
impl Default for RusherPolicy {
    fn default() -> Self {
        Self { max_force: 1. }
    }
}
impl RusherPolicy {
    pub const fn new(max_force: f32) -> Self {
        Self { max_force }
    }

    /// Returns the summed attractive force, before clamping.
    pub fn raw_force(&self, agent: &Agent, world: &World) -> Vec2 {
        let pos = agent.pos();
        world
            .good_agents()
            .filter(|other| !ptr::eq(agent, *other))
            .fold(Vec2::ZERO, |force, other| {
                force + inverse_square_force(other.pos() - pos)
            })
    }
}
impl Policy for RusherPolicy {
    fn action(&self, agent: &Agent, world: &World) -> Action {
        let force = clamp_force(self.raw_force(agent, world), self.max_force);
        log::trace!("{} rushes with force {}", agent.name(), force);
        Action::continuous(force)
    }
}
