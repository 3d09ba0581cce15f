/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::sync::Arc;

use arena_core::{
    is_collision, sample_until, Agent, AgentId, BenchmarkData, Color, Landmark, PolicyHandle,
    Role, RunnerPolicy, RusherPolicy, Scenario, ScenarioError, SteeringMode, Vec2, World,
};
use rand::RngCore;

use crate::PredatorPreyConfig;

pub const PREY_COLOR: Color = [0.35, 0.85, 0.35];
pub const PREDATOR_COLOR: Color = [0.85, 0.35, 0.35];
pub const OBSTACLE_COLOR: Color = [0.25, 0.25, 0.25];

/// Spawn range of prey, on both axes.
pub const PREY_SPAWN: (f32, f32) = (-0.8, 0.8);
/// Spawn range of predators, on both axes.
pub const PREDATOR_SPAWN: (f32, f32) = (-1., 1.);
/// Spawn range of landmarks, on both axes.
pub const LANDMARK_SPAWN: (f32, f32) = (-0.9, 0.9);
/// Prey and predators must spawn further apart than this factor times the sum of their sizes.
pub const SPAWN_MARGIN: f32 = 1.5;

/// Scale of the distance-based reward terms.
const SHAPING: f32 = 0.1;
/// Reward for catching, penalty for being caught.
const CATCH_REWARD: f32 = 10.;

/// Predators chase scripted prey that flee from them and from the limits of the arena.
///
/// Prey are driven by a [RunnerPolicy], predators by a learned policy
/// unless [PredatorPreyConfig::scripted_predators] is set, in which case
/// they use a [RusherPolicy].
#[derive(Debug)]
pub struct PredatorPrey {
    config: PredatorPreyConfig,
    runner: PolicyHandle,
    rusher: PolicyHandle,
}

impl Default for PredatorPrey {
    fn default() -> Self {
        Self::new(PredatorPreyConfig::default())
    }
}

impl PredatorPrey {
    pub fn new(config: PredatorPreyConfig) -> Self {
        let runner = Arc::new(RunnerPolicy::new(config.max_force));
        let rusher = Arc::new(RusherPolicy::new(config.max_force));
        Self {
            config,
            runner,
            rusher,
        }
    }

    pub fn config(&self) -> &PredatorPreyConfig {
        &self.config
    }

    fn create_agent(&self, i: usize) -> Agent {
        let role = if i < self.config.n_preds {
            Role::Adversary
        } else {
            Role::Cooperator
        };
        let mut agent = Agent::new(format!("agent {i}"), role);
        agent.entity.collide = true;
        agent.silent = true;
        match role {
            Role::Adversary => {
                agent.entity.size = 0.05;
                agent.accel = Some(1.);
                agent.max_speed = Some(1.);
                agent.always_scripted = self.config.scripted_predators;
            }
            Role::Cooperator => {
                agent.entity.size = 0.04;
                agent.accel = Some(1.5);
                agent.max_speed = Some(1.5);
                agent.always_scripted = true;
            }
        }
        if agent.always_scripted {
            let policy = match role {
                Role::Adversary => &self.rusher,
                Role::Cooperator => &self.runner,
            };
            log::debug!("binding {:?} to {}", policy, agent.name());
            agent.steering = SteeringMode::Scripted(policy.clone());
        }
        agent
    }

    /// Counts the (prey, predator) pairs closer than the spawn margin.
    pub fn spawn_overlaps(world: &World) -> usize {
        world
            .good_agents()
            .map(|prey| {
                world
                    .adversaries()
                    .filter(|predator| {
                        prey.pos().distance(predator.pos())
                            < SPAWN_MARGIN * (prey.entity.size + predator.entity.size)
                    })
                    .count()
            })
            .sum()
    }

    /// Prey are rewarded for staying away from the predators and penalized when caught.
    fn agent_reward(&self, agent: &Agent, world: &World) -> f32 {
        let mut rew = world
            .adversaries()
            .map(|adversary| SHAPING * agent.pos().distance(adversary.pos()))
            .sum::<f32>();
        if agent.entity.collide {
            for adversary in world.adversaries() {
                if is_collision(&adversary.entity, &agent.entity) {
                    rew -= CATCH_REWARD;
                }
            }
        }
        rew
    }

    /// Predators are rewarded for closing in on the prey and for every catch of their team.
    fn adversary_reward(&self, agent: &Agent, world: &World) -> f32 {
        let mut rew = 0.;
        let closest_prey = world
            .good_agents()
            .map(|prey| prey.pos().distance(agent.pos()))
            .fold(f32::INFINITY, f32::min);
        if closest_prey.is_finite() {
            rew -= SHAPING * closest_prey;
        }
        if agent.entity.collide {
            // Catches are shared by the whole team, not only the catching predator
            for prey in world.good_agents() {
                for adversary in world.adversaries() {
                    if is_collision(&prey.entity, &adversary.entity) {
                        rew += CATCH_REWARD;
                    }
                }
            }
        }
        rew
    }
}

impl Scenario for PredatorPrey {
    fn make_world(&self, rng: &mut dyn RngCore) -> Result<World, ScenarioError> {
        let n_agents = self.config.n_preds + self.config.n_preys;
        let mut world = World {
            clip_positions: true,
            dim_c: 0,
            ..Default::default()
        };
        world.agents = (0..n_agents).map(|i| self.create_agent(i)).collect();
        // No landmark by default, to avoid lucky catches since the prey cannot avoid them
        world.landmarks = (0..self.config.n_landmarks)
            .map(|i| {
                let mut landmark = Landmark::new(format!("landmark {i}"));
                landmark.entity.collide = true;
                landmark.entity.movable = false;
                landmark.entity.size = 0.1;
                landmark
            })
            .collect();
        world.walls = self.config.walls.clone();
        log::info!(
            "predator-prey world with {} predators, {} prey, {} landmarks and {} walls",
            self.config.n_preds,
            self.config.n_preys,
            world.landmarks.len(),
            world.walls.len()
        );
        self.reset_world(&mut world, rng)?;
        Ok(world)
    }

    fn reset_world(&self, world: &mut World, rng: &mut dyn RngCore) -> Result<(), ScenarioError> {
        for agent in &mut world.agents {
            agent.entity.color = match agent.role {
                Role::Adversary => PREDATOR_COLOR,
                Role::Cooperator => PREY_COLOR,
            };
        }
        for landmark in &mut world.landmarks {
            landmark.entity.color = OBSTACLE_COLOR;
        }

        let dim_c = world.dim_c;
        let attempts = sample_until(self.config.max_attempts, || {
            for agent in &mut world.agents {
                let (low, high) = match agent.role {
                    Role::Adversary => PREDATOR_SPAWN,
                    Role::Cooperator => PREY_SPAWN,
                };
                let pos = Vec2::rand_uniform(&mut *rng, low, high);
                agent.entity.state.reset(pos, dim_c);
            }
            for landmark in world.landmarks.iter_mut().filter(|l| !l.boundary) {
                let (low, high) = LANDMARK_SPAWN;
                let pos = Vec2::rand_uniform(&mut *rng, low, high);
                landmark.entity.state.reset(pos, dim_c);
            }
            Self::spawn_overlaps(world) == 0
        })
        .map_err(|e| {
            log::warn!("cannot place prey away from predators: {e}");
            e
        })?;
        log::debug!("initial state found after {attempts} draws");
        Ok(())
    }

    fn reward(&self, agent: AgentId, world: &mut World) -> f32 {
        let world = &*world;
        let agent = world.agent(agent);
        match agent.role {
            Role::Adversary => self.adversary_reward(agent, world),
            Role::Cooperator => self.agent_reward(agent, world),
        }
    }

    fn observation(&self, agent: AgentId, world: &World) -> Vec<f32> {
        let agent = world.agent(agent);
        let pos = agent.pos();
        let mut obs = Vec::with_capacity(observation_len(world, agent));
        obs.extend(agent.vel().to_array());
        obs.extend(pos.to_array());
        // Positions of all entities in this agent's reference frame
        for landmark in world.landmarks.iter().filter(|l| !l.boundary) {
            obs.extend((landmark.pos() - pos).to_array());
        }
        let others = || world.agents.iter().filter(|other| !std::ptr::eq(*other, agent));
        for other in others() {
            obs.extend((other.pos() - pos).to_array());
        }
        for other in others().filter(|other| !other.is_adversary()) {
            obs.extend(other.vel().to_array());
        }
        obs.extend(world.walls.iter().map(|wall| wall.relative_distance(pos)));
        obs
    }

    fn benchmark_data(&self, agent: AgentId, world: &mut World) -> BenchmarkData {
        let agent = world.agent(agent);
        match agent.role {
            Role::Adversary => BenchmarkData::Count(
                world
                    .good_agents()
                    .filter(|prey| is_collision(&prey.entity, &agent.entity))
                    .count(),
            ),
            Role::Cooperator => BenchmarkData::Count(0),
        }
    }
}

/// Length of the observation vector of `agent`, see [PredatorPrey::observation](Scenario::observation).
pub fn observation_len(world: &World, agent: &Agent) -> usize {
    let landmarks = world.landmarks.iter().filter(|l| !l.boundary).count();
    let others = world.agents.len() - 1;
    let good_others = world
        .good_agents()
        .filter(|other| !std::ptr::eq(*other, agent))
        .count();
    2 + 2 + 2 * landmarks + 2 * others + 2 * good_others + world.walls.len()
}
