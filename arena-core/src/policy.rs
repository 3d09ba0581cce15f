/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::fmt;
use std::sync::Arc;

use crate::{Action, Agent, World};

/// A producer of actions for a single agent.
///
/// Policies are called once per tick for every scripted agent, with the agent
/// and the world state before that tick's physics update.
pub trait Policy: fmt::Debug + Send + Sync + 'static {
    /// Returns the action of `agent` in `world`.
    fn action(&self, agent: &Agent, world: &World) -> Action;
}

/// A shared handle to a policy, several agents may share the same one.
pub type PolicyHandle = Arc<dyn Policy>;

/// How the actions of an agent are produced.
#[derive(Clone, Debug, Default)]
pub enum SteeringMode {
    /// by an external learned policy
    #[default]
    Learned,
    /// by a built-in policy
    Scripted(PolicyHandle),
}
impl SteeringMode {
    /// Wraps `policy` into a scripted steering mode.
    pub fn scripted(policy: impl Policy) -> Self {
        SteeringMode::Scripted(Arc::new(policy))
    }
    pub fn is_scripted(&self) -> bool {
        matches!(self, SteeringMode::Scripted(_))
    }
    /// Returns the policy if scripted.
    pub fn policy(&self) -> Option<&dyn Policy> {
        match self {
            SteeringMode::Learned => None,
            SteeringMode::Scripted(policy) => Some(policy.as_ref()),
        }
    }
}
