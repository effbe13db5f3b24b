// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Potential and force evaluation over a [`Part`].
//!
//! The free functions [`total_potential`] and [`accumulate_forces`] are the evaluation
//! contract: each starts its own pass on the [`EvaluationContext`] it is given, so bond
//! geometry computed by one is never reused by the other.  [`Evaluator`] bundles a context
//! with a set of flags for callers that drive a simulation through the [`ForceField`] trait.

mod gradient;
mod potential;

pub use gradient::accumulate_forces;
pub use potential::{PotentialBreakdown, potential_breakdown, total_potential};

use crate::config::EvaluationFlags;
use crate::geometry::EvaluationContext;
use crate::part::Part;
use glam::DVec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Position array holds {len} atoms but the part has {atoms}")]
    PositionsTooShort { len: usize, atoms: usize },

    #[error("Force array holds {len} atoms but the part has {atoms}")]
    ForcesTooShort { len: usize, atoms: usize },
}

/// Every atom index stored in a part is below its atom count, so checking the array length
/// once covers every access of the pass.
pub(crate) fn check_positions(part: &Part, positions: &[DVec3]) -> Result<(), EvalError> {
    if positions.len() < part.atom_count() {
        return Err(EvalError::PositionsTooShort {
            len: positions.len(),
            atoms: part.atom_count(),
        });
    }
    Ok(())
}

/// Trait for force field implementations.
///
/// Positions are in pm, potentials in aJ, and forces in pN.
pub trait ForceField {
    /// Total potential energy of `part` at `positions`.
    fn potential(&mut self, part: &mut Part, positions: &[DVec3]) -> Result<f64, EvalError>;

    /// Overwrites `forces` with the force on every atom of `part` at `positions`.
    fn forces(
        &mut self,
        part: &mut Part,
        positions: &[DVec3],
        forces: &mut [DVec3],
    ) -> Result<(), EvalError>;
}

/// A force field evaluator that owns its pass bookkeeping.
#[derive(Debug, Default)]
pub struct Evaluator {
    ctx: EvaluationContext,
    pub flags: EvaluationFlags,
}

impl Evaluator {
    pub fn new(flags: EvaluationFlags) -> Self {
        Self {
            ctx: EvaluationContext::new(),
            flags,
        }
    }

    pub fn context(&self) -> &EvaluationContext {
        &self.ctx
    }

    pub fn potential_breakdown(
        &mut self,
        part: &mut Part,
        positions: &[DVec3],
    ) -> Result<PotentialBreakdown, EvalError> {
        potential_breakdown(part, &mut self.ctx, &self.flags, positions)
    }
}

impl ForceField for Evaluator {
    fn potential(&mut self, part: &mut Part, positions: &[DVec3]) -> Result<f64, EvalError> {
        total_potential(part, &mut self.ctx, &self.flags, positions)
    }

    fn forces(
        &mut self,
        part: &mut Part,
        positions: &[DVec3],
        forces: &mut [DVec3],
    ) -> Result<(), EvalError> {
        accumulate_forces(part, &mut self.ctx, &self.flags, positions, forces)
    }
}
