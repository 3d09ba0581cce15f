/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use crate::{Action, Agent, AgentId, Landmark, Wall};

/// The physical world, shared between the scenario, the policies and the physics integrator.
///
/// The number of agents, landmarks and walls is fixed for the duration of an episode,
/// only their state changes.
#[derive(Clone, Debug)]
pub struct World {
    pub agents: Vec<Agent>,
    pub landmarks: Vec<Landmark>,
    pub walls: Vec<Wall>,
    /// position dimensionality
    pub dim_p: usize,
    /// communication channel dimensionality
    pub dim_c: usize,
    /// whether the integrator clips positions to the arena
    pub clip_positions: bool,
}
impl Default for World {
    fn default() -> Self {
        Self {
            agents: Vec::new(),
            landmarks: Vec::new(),
            walls: Vec::new(),
            dim_p: 2,
            dim_c: 0,
            clip_positions: false,
        }
    }
}
impl World {
    /// Returns the agent with the given id, panics if there is none.
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }
    /// Returns the agent with the given id mutably, panics if there is none.
    pub fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> {
        (0..self.agents.len() as u32).map(AgentId)
    }
    /// Returns all agents that are not adversaries.
    pub fn good_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| !agent.is_adversary())
    }
    /// Returns all adversarial agents.
    pub fn adversaries(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| agent.is_adversary())
    }
    /// Returns all agents controlled by external learned policies.
    pub fn policy_agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agent_ids()
            .zip(&self.agents)
            .filter(|(_, agent)| !agent.steering.is_scripted())
    }
    /// Returns all agents controlled by built-in policies.
    pub fn scripted_agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agent_ids()
            .zip(&self.agents)
            .filter(|(_, agent)| agent.steering.is_scripted())
    }
    /// Queries the policy of every scripted agent, in agent order.
    ///
    /// All policies see the same world state, so the order does not affect the result.
    pub fn scripted_actions(&self) -> Vec<(AgentId, Action)> {
        self.scripted_agents()
            .filter_map(|(id, agent)| {
                agent
                    .steering
                    .policy()
                    .map(|policy| (id, policy.action(agent, self)))
            })
            .collect()
    }
}
