/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the core of the particle arena, the decision-and-evaluation layer of a
//! continuous 2-D multi-agent particle simulation.
//!
//! It contains:
//! - The world model ([World], [Agent], [Landmark], [Wall]) that an external physics integrator reads and updates.
//! - The [Action] contract, either a continuous force or one of the [DiscreteAction]s.
//! - The [Policy] trait and the scripted force-field controllers [RunnerPolicy] and [RusherPolicy].
//! - The [Scenario] trait, implemented by concrete scenarios to build worlds, observe and reward agents.
//!
//! Concrete scenarios are available in the `arena-scenarios` crate.

mod action;
mod entity;
mod error;
mod geometry;
mod policy;
mod scenario;
mod steering;
mod util;
mod vec2;
mod world;

pub use action::*;
pub use entity::*;
pub use error::*;
pub use geometry::*;
pub use policy::*;
pub use scenario::*;
pub use steering::*;
pub use util::*;
pub use vec2::*;
pub use world::*;

/// The identifier of an agent, its index in [World::agents].
#[derive(
    Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub struct AgentId(pub u32);
impl AgentId {
    /// Returns the index of this agent in [World::agents].
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A{}", self.0)
    }
}
