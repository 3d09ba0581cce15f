/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::io;

use arena_core::{Action, BenchmarkData, Role, Scenario, Vec2, World};
use serde::Serialize;

/// The state of an agent as seen by the scenario, at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AgentSnapshot {
    pub name: String,
    pub role: Role,
    pub position: Vec2,
    pub velocity: Vec2,
    pub scripted: bool,
    /// action of the built-in policy, for scripted agents only
    pub action: Option<Action>,
    pub observation: Vec<f32>,
    pub reward: f32,
    pub benchmark: BenchmarkData,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LandmarkSnapshot {
    pub name: String,
    pub position: Vec2,
}

/// A serializable record of a world and of what the scenario makes of it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorldSnapshot {
    pub seed: u64,
    pub agents: Vec<AgentSnapshot>,
    pub landmarks: Vec<LandmarkSnapshot>,
}

/// Records the observations, rewards and scripted actions of all agents of `world`.
///
/// Scripted actions and observations are computed before rewards and benchmarks,
/// as the latter may update the collision states of the agents.
pub fn snapshot_world(scenario: &dyn Scenario, world: &mut World, seed: u64) -> WorldSnapshot {
    let mut actions = world.scripted_actions().into_iter().peekable();
    let mut agents = Vec::with_capacity(world.agents.len());
    let view = &*world;
    for (id, agent) in view.agent_ids().zip(&view.agents) {
        let action = actions
            .next_if(|(action_id, _)| *action_id == id)
            .map(|(_, action)| action);
        agents.push(AgentSnapshot {
            name: agent.name().to_owned(),
            role: agent.role,
            position: agent.pos(),
            velocity: agent.vel(),
            scripted: agent.steering.is_scripted(),
            action,
            observation: scenario.observation(id, view),
            reward: 0.,
            benchmark: BenchmarkData::Count(0),
        });
    }
    for (id, snapshot) in world.agent_ids().collect::<Vec<_>>().into_iter().zip(&mut agents) {
        snapshot.reward = scenario.reward(id, world);
        snapshot.benchmark = scenario.benchmark_data(id, world);
    }
    let landmarks = world
        .landmarks
        .iter()
        .filter(|landmark| !landmark.boundary)
        .map(|landmark| LandmarkSnapshot {
            name: landmark.entity.name.clone(),
            position: landmark.pos(),
        })
        .collect();
    WorldSnapshot {
        seed,
        agents,
        landmarks,
    }
}

/// Writes `snapshot` as pretty-printed JSON.
pub fn write_snapshot(writer: impl io::Write, snapshot: &WorldSnapshot) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, snapshot)
}
