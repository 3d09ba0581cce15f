/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use thiserror::Error;

/// Errors raised while building or resetting a world.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Rejection sampling found no valid initial state, the parameters are likely geometrically infeasible.
    #[error("no valid initial state found after {attempts} attempts")]
    InfeasibleInitialization { attempts: u32 },
}
