/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! Concrete scenarios of the particle arena.
//!
//! - [PredatorPrey]: predators chase prey that flee using a scripted force field.
//! - [Navigation]: cooperating agents cover landmarks while avoiding each other.
//!
//! Scenarios are configured through [Config], loaded from JSON with optional overrides.

use arena_core::Scenario;

mod config;
mod navigation;
mod predator_prey;
mod serialization;

pub use config::*;
pub use navigation::*;
pub use predator_prey::*;
pub use serialization::*;

/// Instantiates the scenario described by `config`.
pub fn build_scenario(config: &ScenarioConfig) -> Box<dyn Scenario> {
    match config {
        ScenarioConfig::PredatorPrey(config) => Box::new(PredatorPrey::new(config.clone())),
        ScenarioConfig::Navigation(config) => Box::new(Navigation::new(config.clone())),
    }
}
