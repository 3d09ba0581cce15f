/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use arena_core::{
    is_collision, Agent, AgentId, BenchmarkData, Color, Landmark, Role, Scenario, ScenarioError,
    Vec2, World,
};
use rand::RngCore;

use crate::NavigationConfig;

pub const AGENT_COLOR: Color = [0.54, 0.82, 0.98];
pub const COLLIDING_AGENT_COLOR: Color = [0.27, 0.44, 0.55];
pub const LANDMARK_COLOR: Color = [0.75, 0.75, 0.75];

/// Spawn range of agents and landmarks, on both axes.
pub const SPAWN: (f32, f32) = (-1., 1.);
/// A landmark is occupied if an agent is closer than this.
pub const OCCUPIED_DISTANCE: f32 = 0.1;

/// Penalty per colliding pair.
const COLLISION_PENALTY: f32 = 1.;

/// Cooperating agents spread over landmarks while avoiding each other.
#[derive(Debug, Default)]
pub struct Navigation {
    config: NavigationConfig,
}

impl Navigation {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Returns whether agents `a` and `b` collide, recording it in both their collision states.
    ///
    /// The collision states are left untouched if `a` and `b` are the same agent or one of them does not collide.
    pub fn is_collision(&self, a: AgentId, b: AgentId, world: &mut World) -> bool {
        if a == b {
            return false;
        }
        let (first, second) = (world.agent(a), world.agent(b));
        if !first.entity.collide || !second.entity.collide {
            return false;
        }
        let colliding = is_collision(&first.entity, &second.entity);
        let (first_name, second_name) = (first.entity.name.clone(), second.entity.name.clone());
        world.agent_mut(a).is_colliding.insert(second_name, colliding);
        world.agent_mut(b).is_colliding.insert(first_name, colliding);
        colliding
    }

    /// Counts the agents colliding with `agent`, and colors it accordingly.
    pub fn count_collisions(&self, agent: AgentId, world: &mut World) -> usize {
        let n_collisions = world
            .agent_ids()
            .collect::<Vec<_>>()
            .into_iter()
            .filter(|other| self.is_collision(agent, *other, world))
            .count();

        let agent = world.agent_mut(agent);
        agent.entity.color = if agent.is_colliding_any() {
            COLLIDING_AGENT_COLOR
        } else {
            AGENT_COLOR
        };

        n_collisions
    }

    /// Sum over landmarks of the distances of all agents to them.
    fn total_landmark_distance(world: &World) -> f32 {
        world
            .landmarks
            .iter()
            .map(|landmark| {
                world
                    .agents
                    .iter()
                    .map(|agent| agent.pos().distance(landmark.pos()))
                    .sum::<f32>()
            })
            .sum()
    }
}

impl Scenario for Navigation {
    fn make_world(&self, rng: &mut dyn RngCore) -> Result<World, ScenarioError> {
        let mut world = World {
            clip_positions: true,
            dim_c: 0,
            ..Default::default()
        };
        world.agents = (0..self.config.n_agents)
            .map(|i| {
                let mut agent = Agent::new(format!("agent {i}"), Role::Cooperator);
                agent.silent = true;
                agent.entity.collide = true;
                agent.entity.size = 0.05;
                agent.accel = Some(0.5);
                agent.max_speed = Some(0.25);
                agent
            })
            .collect();
        let names = world
            .agents
            .iter()
            .map(|agent| agent.entity.name.clone())
            .collect::<Vec<_>>();
        for agent in &mut world.agents {
            agent.is_colliding = names
                .iter()
                .filter(|name| **name != agent.entity.name)
                .map(|name| (name.clone(), false))
                .collect();
        }
        world.landmarks = (0..self.config.n_landmarks)
            .map(|i| {
                let mut landmark = Landmark::new(format!("landmark {i}"));
                landmark.entity.collide = false;
                landmark.entity.movable = false;
                landmark.entity.size = 0.1;
                landmark
            })
            .collect();
        log::info!(
            "navigation world with {} agents and {} landmarks",
            world.agents.len(),
            world.landmarks.len()
        );
        self.reset_world(&mut world, rng)?;
        Ok(world)
    }

    fn reset_world(&self, world: &mut World, rng: &mut dyn RngCore) -> Result<(), ScenarioError> {
        let (low, high) = SPAWN;
        let dim_c = world.dim_c;
        for agent in &mut world.agents {
            agent.entity.color = AGENT_COLOR;
        }
        for landmark in &mut world.landmarks {
            landmark.entity.color = LANDMARK_COLOR;
        }
        for agent in &mut world.agents {
            let pos = Vec2::rand_uniform(&mut *rng, low, high);
            agent.entity.state.reset(pos, dim_c);
        }
        for landmark in &mut world.landmarks {
            let pos = Vec2::rand_uniform(&mut *rng, low, high);
            landmark.entity.state.reset(pos, dim_c);
        }
        Ok(())
    }

    /// Agents are rewarded based on the sum of all agents' distances to the landmarks, and penalized for collisions.
    fn reward(&self, agent: AgentId, world: &mut World) -> f32 {
        let mut rew = -Self::total_landmark_distance(world);
        if world.agent(agent).entity.collide {
            rew -= COLLISION_PENALTY * self.count_collisions(agent, world) as f32;
        }
        rew
    }

    fn observation(&self, agent: AgentId, world: &World) -> Vec<f32> {
        let agent = world.agent(agent);
        let pos = agent.pos();
        let mut obs = Vec::with_capacity(4 + 2 * world.landmarks.len() + 2 * world.agents.len());
        obs.extend(agent.vel().to_array());
        obs.extend(pos.to_array());
        for landmark in &world.landmarks {
            obs.extend((landmark.pos() - pos).to_array());
        }
        for other in world.agents.iter().filter(|other| !std::ptr::eq(*other, agent)) {
            obs.extend((other.pos() - pos).to_array());
        }
        obs
    }

    fn benchmark_data(&self, agent: AgentId, world: &mut World) -> BenchmarkData {
        let mut reward = 0.;
        let mut min_dists = 0.;
        let mut occupied_landmarks = 0;
        for landmark in &world.landmarks {
            let closest = world
                .agents
                .iter()
                .map(|agent| agent.pos().distance(landmark.pos()))
                .fold(f32::INFINITY, f32::min);
            min_dists += closest;
            reward -= closest;
            if closest < OCCUPIED_DISTANCE {
                occupied_landmarks += 1;
            }
        }
        let mut collisions = 0;
        if world.agent(agent).entity.collide {
            collisions = self.count_collisions(agent, world);
            reward -= COLLISION_PENALTY * collisions as f32;
        }
        BenchmarkData::Coverage {
            reward,
            collisions,
            min_dists,
            occupied_landmarks,
        }
    }
}
