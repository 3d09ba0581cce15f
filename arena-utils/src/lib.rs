/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! This is the utility module of the particle arena, containing support code outside of the core.
//!
//! It contains the following features:
//! - Keyboard directions ([Direction]) and their mapping to [DiscreteAction]s.
//! - An [InteractivePolicy] that turns key events into actions, usable wherever a scripted [Policy] is.

#[cfg(doc)]
use arena_core::{DiscreteAction, Policy};

mod direction;
mod interactive;

pub use direction::*;
pub use interactive::*;
