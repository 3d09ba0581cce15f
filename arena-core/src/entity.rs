/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SteeringMode, Vec2};

/// An RGB display color, each component in `[0, 1]`.
pub type Color = [f32; 3];

/// The physical state of an entity, updated by the physics integrator.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EntityState {
    /// position
    pub p_pos: Vec2,
    /// velocity
    pub p_vel: Vec2,
    /// communication utterance
    pub c: Vec<f32>,
}
impl EntityState {
    /// Places the entity at `p_pos` with zero velocity and a silent communication channel of width `dim_c`.
    pub fn reset(&mut self, p_pos: Vec2, dim_c: usize) {
        self.p_pos = p_pos;
        self.p_vel = Vec2::ZERO;
        self.c.clear();
        self.c.resize(dim_c, 0.);
    }
}

/// The properties shared by agents and landmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub name: String,
    /// collision radius, non-negative
    pub size: f32,
    /// whether the integrator moves this entity
    pub movable: bool,
    /// whether this entity takes part in collisions
    pub collide: bool,
    pub color: Color,
    pub state: EntityState,
}
impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0.05,
            movable: false,
            collide: true,
            color: [0., 0., 0.],
            state: EntityState::default(),
        }
    }
}

/// The role of an agent.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// predator
    Adversary,
    /// prey, or any agent of a cooperative team
    Cooperator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Adversary => write!(f, "adversary"),
            Role::Cooperator => write!(f, "cooperator"),
        }
    }
}

/// A movable entity that acts in the world.
#[derive(Clone, Debug)]
pub struct Agent {
    pub entity: Entity,
    pub role: Role,
    /// cannot send communication signals
    pub silent: bool,
    /// driven by a scripted policy even when learned policies are available
    pub always_scripted: bool,
    pub max_speed: Option<f32>,
    /// acceleration scale
    pub accel: Option<f32>,
    /// collision state with respect to every other agent, by name
    pub is_colliding: BTreeMap<String, bool>,
    /// how this agent's actions are produced, fixed once the world is built
    pub steering: SteeringMode,
}
impl Agent {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let mut entity = Entity::new(name);
        entity.movable = true;
        Self {
            entity,
            role,
            silent: false,
            always_scripted: false,
            max_speed: None,
            accel: None,
            is_colliding: BTreeMap::new(),
            steering: SteeringMode::Learned,
        }
    }
    pub fn is_adversary(&self) -> bool {
        self.role == Role::Adversary
    }
    pub fn name(&self) -> &str {
        &self.entity.name
    }
    pub fn pos(&self) -> Vec2 {
        self.entity.state.p_pos
    }
    pub fn vel(&self) -> Vec2 {
        self.entity.state.p_vel
    }
    /// Returns whether any entry of the collision state is set.
    pub fn is_colliding_any(&self) -> bool {
        self.is_colliding.values().any(|colliding| *colliding)
    }
}

/// A static or semi-static marker, either a goal or an obstacle.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub entity: Entity,
    /// marks the limits of the arena rather than an interactive landmark
    pub boundary: bool,
}
impl Landmark {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(name),
            boundary: false,
        }
    }
    pub fn pos(&self) -> Vec2 {
        self.entity.state.p_pos
    }
}

/// The orientation of a wall.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// along the x axis, at a fixed y
    #[default]
    Horizontal,
    /// along the y axis, at a fixed x
    Vertical,
}

/// An axis-aligned linear obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Wall {
    pub orient: Orientation,
    /// the fixed coordinate of the wall on its normal axis
    pub axis_pos: f32,
    /// extent of the wall along its own axis
    pub endpoints: (f32, f32),
    pub width: f32,
    /// whether entities bounce on it or can pass through
    pub hard: bool,
    pub color: Color,
}
impl Default for Wall {
    fn default() -> Self {
        Self::new(Orientation::Horizontal, 0.)
    }
}
impl Wall {
    pub fn new(orient: Orientation, axis_pos: f32) -> Self {
        Self {
            orient,
            axis_pos,
            endpoints: (-1., 1.),
            width: 0.1,
            hard: true,
            color: [0., 0., 0.],
        }
    }
    /// Signed distance from `pos` to the wall along its normal axis.
    pub fn relative_distance(&self, pos: Vec2) -> f32 {
        match self.orient {
            Orientation::Horizontal => pos.y - self.axis_pos,
            Orientation::Vertical => pos.x - self.axis_pos,
        }
    }
}
