/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use arena_core::{
    Action, Agent, AgentId, Movement, Policy, Role, RunnerPolicy, RusherPolicy, SteeringMode,
    Vec2, World, FORCE_EPSILON,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn agent_at(i: usize, role: Role, pos: Vec2) -> Agent {
    let mut agent = Agent::new(format!("agent {i}"), role);
    agent.entity.state.p_pos = pos;
    agent
}

fn world_with(agents: &[(Role, Vec2)]) -> World {
    World {
        agents: agents
            .iter()
            .enumerate()
            .map(|(i, (role, pos))| agent_at(i, *role, *pos))
            .collect(),
        ..Default::default()
    }
}

fn force_of(action: &Action) -> Vec2 {
    match action.u {
        Movement::Continuous(force) => force,
        Movement::Discrete(_) => panic!("scripted policies only emit continuous forces"),
    }
}

#[test]
fn runner_is_balanced_at_center() {
    let world = world_with(&[(Role::Cooperator, Vec2::ZERO)]);
    let force = RunnerPolicy::default().raw_force(world.agent(AgentId(0)), &world);
    assert!(approx_equal(force.x, 0.));
    assert!(approx_equal(force.y, 0.));
}

#[test]
fn runner_flees_adversary_and_walls() {
    let world = world_with(&[
        (Role::Adversary, Vec2::new(0.5, 0.)),
        (Role::Cooperator, Vec2::new(0.4, 0.)),
    ]);
    let prey = world.agent(AgentId(1));
    let raw = RunnerPolicy::default().raw_force(prey, &world);
    // 1 / -0.1 from the adversary, plus the two vertical limits
    let expected_x = -10. + (-0.6f32).recip() + (1.4f32).recip();
    assert!(approx_equal(raw.x, expected_x));
    assert!(approx_equal(raw.y, 0.));

    let force = force_of(&RunnerPolicy::default().action(prey, &world));
    assert!(approx_equal(force.norm(), 1.));
    assert!(force.x < 0.);
}

#[test]
fn runner_is_pushed_back_from_arena_limit() {
    let world = world_with(&[(Role::Cooperator, Vec2::new(0.9, -0.95))]);
    let force = force_of(&RunnerPolicy::default().action(world.agent(AgentId(0)), &world));
    assert!(force.x < 0.);
    assert!(force.y > 0.);
    assert!(approx_equal(force.norm(), 1.));
}

#[test]
fn rusher_chases_prey_only() {
    let world = world_with(&[
        (Role::Adversary, Vec2::ZERO),
        (Role::Adversary, Vec2::new(-0.5, 0.)),
        (Role::Cooperator, Vec2::new(0., 2.)),
    ]);
    let raw = RusherPolicy::new(10.).raw_force(world.agent(AgentId(0)), &world);
    assert_eq!(raw, Vec2::new(0., 0.5));
    let force = force_of(&RusherPolicy::new(10.).action(world.agent(AgentId(0)), &world));
    assert_eq!(force, raw);
}

#[test]
fn singularity_is_finite_then_clamped() {
    let world = world_with(&[
        (Role::Adversary, Vec2::ZERO),
        (Role::Cooperator, Vec2::new(0.01, 0.02)),
    ]);
    let rusher = RusherPolicy::default();
    let predator = world.agent(AgentId(0));
    let raw = rusher.raw_force(predator, &world);
    assert_eq!(raw, Vec2::new(0.01, 0.02) / FORCE_EPSILON);
    assert!(raw.is_finite());
    let force = force_of(&rusher.action(predator, &world));
    assert!(approx_equal(force.norm(), 1.));

    let coincident = world_with(&[(Role::Adversary, Vec2::ZERO), (Role::Cooperator, Vec2::ZERO)]);
    let force = force_of(&rusher.action(coincident.agent(AgentId(0)), &coincident));
    assert!(force.is_finite());
    let force = force_of(&RunnerPolicy::default().action(coincident.agent(AgentId(1)), &coincident));
    assert!(force.is_finite());
}

#[test]
fn clamped_forces_keep_direction() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let max_force = rng.gen_range(0.1..3.);
        let agents = (0..4)
            .map(|i| {
                let role = if i < 2 { Role::Adversary } else { Role::Cooperator };
                (role, Vec2::rand_uniform(&mut rng, -1., 1.))
            })
            .collect::<Vec<_>>();
        let world = world_with(&agents);
        let runner = RunnerPolicy::new(max_force);
        let rusher = RusherPolicy::new(max_force);
        for (id, agent) in world.agent_ids().zip(&world.agents) {
            let (raw, force) = if agent.is_adversary() {
                (rusher.raw_force(agent, &world), force_of(&rusher.action(agent, &world)))
            } else {
                (runner.raw_force(agent, &world), force_of(&runner.action(agent, &world)))
            };
            assert!(force.norm() <= max_force * (1. + 1e-5), "{id} exceeds max force");
            if raw.norm() > max_force {
                let cross = raw.x * force.y - raw.y * force.x;
                assert!(cross.abs() <= 1e-3 * raw.norm() * force.norm());
                assert!(raw.dot(force) > 0.);
            } else {
                assert_eq!(raw, force);
            }
        }
    }
}

#[test]
fn policies_are_deterministic() {
    let world = world_with(&[
        (Role::Adversary, Vec2::new(0.3, -0.2)),
        (Role::Cooperator, Vec2::new(-0.1, 0.4)),
    ]);
    let prey = world.agent(AgentId(1));
    let runner = RunnerPolicy::default();
    assert_eq!(runner.action(prey, &world), runner.action(prey, &world));
}

#[test]
fn scripted_actions_follow_steering_mode() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = world_with(&[
        (Role::Adversary, Vec2::new(0.3, -0.2)),
        (Role::Cooperator, Vec2::new(-0.1, 0.4)),
        (Role::Cooperator, Vec2::new(0.5, 0.5)),
    ]);
    world.agents[1].steering = SteeringMode::scripted(RunnerPolicy::default());
    world.agents[2].steering = SteeringMode::scripted(RunnerPolicy::default());
    let actions = world.scripted_actions();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].0, AgentId(1));
    assert_eq!(actions[1].0, AgentId(2));
    assert_eq!(
        actions[0].1,
        RunnerPolicy::default().action(world.agent(AgentId(1)), &world)
    );
    assert_eq!(world.policy_agents().count(), 1);
}
