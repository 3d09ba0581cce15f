/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use arena_core::{seeded_rng, AgentId, BenchmarkData, Role, Scenario, Vec2, World};
use arena_scenarios::{
    Navigation, NavigationConfig, AGENT_COLOR, COLLIDING_AGENT_COLOR, LANDMARK_COLOR,
};

fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn make_world(scenario: &Navigation, seed: u64) -> World {
    let (mut rng, _) = seeded_rng(Some(seed));
    scenario.make_world(&mut rng).unwrap()
}

/// Five agents spread along the top of the arena, the landmark at the center.
fn spread_world(scenario: &Navigation) -> World {
    let mut world = make_world(scenario, 0);
    for (i, agent) in world.agents.iter_mut().enumerate() {
        agent.entity.state.p_pos = Vec2::new(-0.8 + 0.4 * i as f32, 0.9);
    }
    world.landmarks[0].entity.state.p_pos = Vec2::ZERO;
    world
}

fn total_distance(world: &World) -> f32 {
    world
        .agents
        .iter()
        .map(|agent| agent.pos().distance(world.landmarks[0].pos()))
        .sum()
}

#[test]
fn default_world() {
    let scenario = Navigation::default();
    let world = make_world(&scenario, 1);
    assert_eq!(world.agents.len(), 5);
    assert_eq!(world.landmarks.len(), 1);
    assert!(world.clip_positions);
    for agent in &world.agents {
        assert_eq!(agent.role, Role::Cooperator);
        assert!(agent.silent);
        assert!(agent.entity.collide);
        assert_eq!(agent.accel, Some(0.5));
        assert_eq!(agent.max_speed, Some(0.25));
        assert_eq!(agent.entity.color, AGENT_COLOR);
        assert!(!agent.steering.is_scripted());
        // One entry per other agent, all clear
        assert_eq!(agent.is_colliding.len(), 4);
        assert!(!agent.is_colliding.contains_key(agent.name()));
        assert!(!agent.is_colliding_any());
        let pos = agent.pos();
        assert!(pos.x.abs() <= 1. && pos.y.abs() <= 1.);
    }
    let landmark = &world.landmarks[0];
    assert!(!landmark.entity.collide);
    assert!(!landmark.entity.movable);
    assert_eq!(landmark.entity.color, LANDMARK_COLOR);
    assert!(world.scripted_actions().is_empty());
}

#[test]
fn observation_length() {
    let scenario = Navigation::new(NavigationConfig {
        n_agents: 3,
        n_landmarks: 3,
    });
    let world = make_world(&scenario, 2);
    // vel, pos, 3 landmarks, 2 other agents
    for id in world.agent_ids() {
        assert_eq!(scenario.observation(id, &world).len(), 4 + 6 + 4);
    }
    let scenario = Navigation::default();
    let world = make_world(&scenario, 3);
    assert_eq!(scenario.observation(AgentId(0), &world).len(), 14);
}

#[test]
fn reward_without_collision() {
    let scenario = Navigation::default();
    let mut world = spread_world(&scenario);
    let expected = -total_distance(&world);
    for id in world.agent_ids().collect::<Vec<_>>() {
        assert!(approx_equal(scenario.reward(id, &mut world), expected));
    }
    assert!(world.agents.iter().all(|agent| !agent.is_colliding_any()));
}

#[test]
fn coincident_agents_collide() {
    let scenario = Navigation::default();
    let mut world = spread_world(&scenario);
    world.agents[1].entity.state.p_pos = world.agents[0].pos();
    let distance = total_distance(&world);

    assert!(approx_equal(
        scenario.reward(AgentId(0), &mut world),
        -distance - 1.
    ));
    // Recorded on both sides
    assert_eq!(world.agents[0].is_colliding.get("agent 1"), Some(&true));
    assert_eq!(world.agents[1].is_colliding.get("agent 0"), Some(&true));
    assert_eq!(world.agents[0].entity.color, COLLIDING_AGENT_COLOR);

    assert!(approx_equal(
        scenario.reward(AgentId(1), &mut world),
        -distance - 1.
    ));
    assert!(approx_equal(scenario.reward(AgentId(2), &mut world), -distance));
    assert_eq!(world.agents[2].entity.color, AGENT_COLOR);

    // Moving away clears the collision state and the color
    world.agents[1].entity.state.p_pos = Vec2::new(-0.4, 0.9);
    assert_eq!(scenario.count_collisions(AgentId(0), &mut world), 0);
    assert_eq!(world.agents[0].is_colliding.get("agent 1"), Some(&false));
    assert_eq!(world.agents[1].is_colliding.get("agent 0"), Some(&false));
    assert_eq!(world.agents[0].entity.color, AGENT_COLOR);
}

#[test]
fn self_and_non_colliding_pairs_are_ignored() {
    let scenario = Navigation::default();
    let mut world = spread_world(&scenario);
    assert!(!scenario.is_collision(AgentId(0), AgentId(0), &mut world));

    world.agents[1].entity.state.p_pos = world.agents[0].pos();
    world.agents[1].entity.collide = false;
    assert!(!scenario.is_collision(AgentId(0), AgentId(1), &mut world));
    assert_eq!(world.agents[0].is_colliding.get("agent 1"), Some(&false));
    assert!(!scenario.is_collision(AgentId(1), AgentId(0), &mut world));
}

#[test]
fn benchmark_coverage() {
    let scenario = Navigation::default();
    let mut world = spread_world(&scenario);
    world.agents[2].entity.state.p_pos = Vec2::new(0.05, 0.);

    match scenario.benchmark_data(AgentId(2), &mut world) {
        BenchmarkData::Coverage {
            reward,
            collisions,
            min_dists,
            occupied_landmarks,
        } => {
            assert!(approx_equal(reward, -0.05));
            assert_eq!(collisions, 0);
            assert!(approx_equal(min_dists, 0.05));
            assert_eq!(occupied_landmarks, 1);
        }
        data => panic!("unexpected benchmark data {data:?}"),
    }

    world.agents[3].entity.state.p_pos = world.agents[4].pos();
    match scenario.benchmark_data(AgentId(3), &mut world) {
        BenchmarkData::Coverage {
            reward,
            collisions,
            ..
        } => {
            assert_eq!(collisions, 1);
            assert!(approx_equal(reward, -0.05 - 1.));
        }
        data => panic!("unexpected benchmark data {data:?}"),
    }
}
