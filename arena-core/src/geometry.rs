/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::ptr;

use crate::{Entity, Vec2};

/// Floor applied to squared distances in inverse-square force laws.
pub const FORCE_EPSILON: f32 = 0.001;

/// Scalar inverse-square law `d / max(d², ε)`.
pub fn inverse_square(distance: f32) -> f32 {
    let distance_squared = distance * distance;
    if distance_squared > FORCE_EPSILON {
        distance / distance_squared
    } else {
        distance / FORCE_EPSILON
    }
}

/// Vector inverse-square law `d / max(‖d‖², ε)`.
///
/// The force points along `displacement` and its magnitude decays as the inverse
/// of the distance. Near zero separation, the squared norm is floored at
/// [FORCE_EPSILON] so the result stays finite.
pub fn inverse_square_force(displacement: Vec2) -> Vec2 {
    let norm_squared = displacement.norm_squared();
    if norm_squared > FORCE_EPSILON {
        displacement / norm_squared
    } else {
        displacement / FORCE_EPSILON
    }
}

/// Rescales `force` to `max_force` if its norm exceeds it.
pub fn clamp_force(force: Vec2, max_force: f32) -> Vec2 {
    force.clamp_norm(max_force)
}

/// Euclidean distance between the centers of two entities.
pub fn distance(a: &Entity, b: &Entity) -> f32 {
    a.state.p_pos.distance(b.state.p_pos)
}

/// Returns whether two distinct collidable entities overlap.
///
/// Overlap is strict: entities exactly at the sum of their radii do not collide.
pub fn is_collision(a: &Entity, b: &Entity) -> bool {
    !ptr::eq(a, b) && a.collide && b.collide && distance(a, b) < a.size + b.size
}
