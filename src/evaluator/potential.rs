// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::{EvalError, check_positions};
use crate::config::EvaluationFlags;
use crate::diagnostics::{Reported, check_table_bounds};
use crate::geometry::{EvaluationContext, bend_angle};
use crate::part::Part;
use glam::DVec3;

/// Potential energy per interaction kind, in aJ.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PotentialBreakdown {
    pub stretch: f64,
    pub bend: f64,
    pub vdw: f64,
}

impl PotentialBreakdown {
    pub fn total(&self) -> f64 {
        self.stretch + self.bend + self.vdw
    }
}

/// Total potential energy of `part` at `positions`, in aJ.
pub fn total_potential(
    part: &mut Part,
    ctx: &mut EvaluationContext,
    flags: &EvaluationFlags,
    positions: &[DVec3],
) -> Result<f64, EvalError> {
    Ok(potential_breakdown(part, ctx, flags, positions)?.total())
}

/// Potential energy of `part` at `positions`, summed separately per interaction kind.
///
/// Starts a new pass on `ctx`. Interaction kinds disabled in `flags` contribute zero.
pub fn potential_breakdown(
    part: &mut Part,
    ctx: &mut EvaluationContext,
    flags: &EvaluationFlags,
    positions: &[DVec3],
) -> Result<PotentialBreakdown, EvalError> {
    check_positions(part, positions)?;
    ctx.begin_pass();
    let mode = flags.lookup_mode();
    let mut sum = PotentialBreakdown::default();

    if !flags.skip_stretch {
        for stretch in &part.stretches {
            let r = part.bonds[stretch.bond.index()].refresh(positions, ctx);
            let result = stretch.params.potential(r, mode);
            check_table_bounds(
                ctx,
                flags,
                Reported::BelowAndAbove,
                stretch,
                &stretch.params.potential_table,
                result.bucket,
                r,
            );
            sum.stretch += result.value;
        }
    }

    if !flags.skip_bend {
        for bend in &part.bends {
            part.bonds[bend.bond1.index()].ensure_fresh(positions, ctx);
            part.bonds[bend.bond2.index()].ensure_fresh(positions, ctx);
            let v1 = part.bonds[bend.bond1.index()].outward(bend.flip1);
            let v2 = part.bonds[bend.bond2.index()].outward(bend.flip2);
            sum.bend += bend.params.potential(bend_angle(v1, v2));
        }
    }

    if !flags.skip_vdw {
        for (_, vdw) in part.van_der_waals.iter() {
            let r = positions[vdw.a1].distance(positions[vdw.a2]);
            let result = vdw.params.potential(r, mode);
            check_table_bounds(
                ctx,
                flags,
                Reported::BelowOnly,
                vdw,
                &vdw.params.potential_table,
                result.bucket,
                r,
            );
            sum.vdw += result.value;
        }
    }

    Ok(sum)
}
