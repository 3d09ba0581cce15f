/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use rand::RngCore;
use serde::Serialize;

use crate::{AgentId, ScenarioError, World};

/// Auxiliary diagnostic values of an agent, not used for training.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkData {
    /// A single counter, for instance the number of collisions with prey.
    Count(usize),
    /// Coverage statistics of a navigation task.
    Coverage {
        reward: f32,
        collisions: usize,
        min_dists: f32,
        occupied_landmarks: usize,
    },
}

/// A scenario builds worlds and evaluates agents in them.
///
/// You need to implement at least [make_world](Self::make_world), [reset_world](Self::reset_world),
/// [reward](Self::reward) and [observation](Self::observation).
///
/// Preconditions: agent sets are non-empty and entity sizes are non-negative.
pub trait Scenario {
    /// Creates the entities of the world and sets its initial conditions.
    fn make_world(&self, rng: &mut dyn RngCore) -> Result<World, ScenarioError>;

    /// Draws new initial conditions for an existing world.
    fn reset_world(&self, world: &mut World, rng: &mut dyn RngCore) -> Result<(), ScenarioError>;

    /// Returns the reward of `agent` for the current state of `world`.
    ///
    /// May update collision bookkeeping (flags, colors) in `world`.
    fn reward(&self, agent: AgentId, world: &mut World) -> f32;

    /// Returns the observation vector of `agent`.
    ///
    /// The layout of the vector only depends on the topology of the world.
    fn observation(&self, agent: AgentId, world: &World) -> Vec<f32>;

    /// Returns diagnostic data for `agent`.
    fn benchmark_data(&self, _agent: AgentId, _world: &mut World) -> BenchmarkData {
        BenchmarkData::Count(0)
    }

    /// Called after each physics step, for instance to move landmarks (by default do nothing).
    fn post_step(&self, _world: &mut World) {}
}

/// Repeats `attempt` until it returns true, at most `max_attempts` times.
///
/// Returns the number of attempts used, or [ScenarioError::InfeasibleInitialization]
/// if none succeeded.
pub fn sample_until(
    max_attempts: u32,
    mut attempt: impl FnMut() -> bool,
) -> Result<u32, ScenarioError> {
    for i in 1..=max_attempts {
        if attempt() {
            return Ok(i);
        }
    }
    Err(ScenarioError::InfeasibleInitialization {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn sample_until_counts_attempts() {
        let mut calls = 0;
        let attempts = sample_until(10, || {
            calls += 1;
            calls == 3
        });
        assert_eq!(attempts, Ok(3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn sample_until_gives_up() {
        let mut calls = 0;
        let result = sample_until(5, || {
            calls += 1;
            false
        });
        assert_eq!(
            result,
            Err(ScenarioError::InfeasibleInitialization { attempts: 5 })
        );
        assert_eq!(calls, 5);
        assert!(sample_until(0, || true).is_err());
    }
}
