// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use super::{EvalError, check_positions};
use crate::config::EvaluationFlags;
use crate::diagnostics::{Reported, check_table_bounds};
use crate::geometry::{EvaluationContext, bend_angle, bend_directions};
use crate::part::Part;
use glam::DVec3;

/// Overwrites `forces` with the force on every atom of `part` at `positions`, in pN.
///
/// Starts a new pass on `ctx`; entries of `forces` past the part's atom count are zeroed
/// too. Interaction kinds disabled in `flags` contribute nothing.
pub fn accumulate_forces(
    part: &mut Part,
    ctx: &mut EvaluationContext,
    flags: &EvaluationFlags,
    positions: &[DVec3],
    forces: &mut [DVec3],
) -> Result<(), EvalError> {
    check_positions(part, positions)?;
    if forces.len() < part.atom_count() {
        return Err(EvalError::ForcesTooShort {
            len: forces.len(),
            atoms: part.atom_count(),
        });
    }
    ctx.begin_pass();
    let mode = flags.lookup_mode();
    forces.fill(DVec3::ZERO);

    if !flags.skip_stretch {
        for stretch in &part.stretches {
            let bond = &mut part.bonds[stretch.bond.index()];
            let r = bond.refresh(positions, ctx);
            let result = stretch.params.gradient(r, mode);
            check_table_bounds(
                ctx,
                flags,
                Reported::BelowAndAbove,
                stretch,
                &stretch.params.gradient_table,
                result.bucket,
                r,
            );
            // dV/dr > 0 for a stretched bond, pulling a1 toward a2.
            let f = bond.geometry().unit * result.value;
            forces[bond.a1] += f;
            forces[bond.a2] -= f;
        }
    }

    if !flags.skip_bend {
        for bend in &part.bends {
            part.bonds[bend.bond1.index()].ensure_fresh(positions, ctx);
            part.bonds[bend.bond2.index()].ensure_fresh(positions, ctx);
            let bond1 = &part.bonds[bend.bond1.index()];
            let bond2 = &part.bonds[bend.bond2.index()];
            let v1 = bond1.outward(bend.flip1);
            let v2 = bond2.outward(bend.flip2);

            let torque = bend.params.torque(bend_angle(v1, v2));
            let (q1, q2) = bend_directions(v1, v2);
            // q points the way an opening angle moves each outer atom, so a positive
            // torque pushes the outer atoms back along -q.
            let f1 = q1 * (torque * bond1.geometry().inverse_length);
            let f2 = q2 * (torque * bond2.geometry().inverse_length);
            forces[bend.central] += f1 + f2;
            forces[bend.a1] -= f1;
            forces[bend.a2] -= f2;
        }
    }

    if !flags.skip_vdw {
        for (_, vdw) in part.van_der_waals.iter() {
            let rv = positions[vdw.a1] - positions[vdw.a2];
            let r = rv.length();
            let result = vdw.params.gradient(r, mode);
            check_table_bounds(
                ctx,
                flags,
                Reported::BelowOnly,
                vdw,
                &vdw.params.gradient_table,
                result.bucket,
                r,
            );
            let f = rv * result.value;
            forces[vdw.a1] += f;
            forces[vdw.a2] -= f;
        }
    }

    Ok(())
}
