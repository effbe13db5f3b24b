// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Per-bond geometry cache and bend geometry helpers.
//
// A bond caches the unit vector from a1 to a2 and its inverse length, stamped with the
// epoch of the pass that computed it. The cache is valid iff the stamp equals the current
// epoch of the EvaluationContext, so starting a pass invalidates every bond at once without
// touching them. Bends are the reason for the cache: a bond shared by several bends is
// refreshed once per pass.

use glam::DVec3;

/// Below this length (pm) a bond is treated as two coincident atoms.
pub const DEGENERATE_LENGTH: f64 = 0.001;

/// Inverse length reported for coincident atoms.
pub const DEGENERATE_INVERSE_LENGTH: f64 = 1000.0;

/// Direction reported for coincident atoms.  Deliberately not normalized.
pub const DEGENERATE_DIRECTION: DVec3 = DVec3::ONE;

/// Cross products shorter than this are treated as zero when picking a bend axis.
pub const COLINEAR: f64 = 1e-8;

// Polynomial stand-in for acos: theta = pi + z*(D + z*(C + z*(B + z*A))) with z = |v1 + v2|
// for the unit bond vectors v1, v2 of a bend. Within a few milliradians of the true angle
// from 90 to 180 degrees; it drifts badly toward small angles, which bonded geometry does
// not reach.
const ACOS_POLY_A: f64 = -0.0820599;
const ACOS_POLY_B: f64 = 0.142376;
const ACOS_POLY_C: f64 = -0.137239;
const ACOS_POLY_D: f64 = -0.969476;

/// Pass bookkeeping threaded through every call that may touch the bond cache.
///
/// The epoch starts at zero, is advanced exactly once at the start of each potential or
/// gradient pass, and is never reset.
#[derive(Debug, Default)]
pub struct EvaluationContext {
    epoch: u64,
    refreshes: u64,
    off_table_reports: u64,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new pass, invalidating every cached bond geometry.
    pub fn begin_pass(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Total number of bond geometry recomputations performed under this context.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// Total number of off-table diagnostics emitted under this context.
    pub fn off_table_reports(&self) -> u64 {
        self.off_table_reports
    }

    pub(crate) fn note_off_table_report(&mut self) {
        self.off_table_reports += 1;
    }
}

/// Cached derived state of a bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGeometry {
    /// Unit vector from a1 to a2, or [`DEGENERATE_DIRECTION`] for coincident atoms.
    pub unit: DVec3,
    /// 1 / |a2 - a1| in 1/pm, or [`DEGENERATE_INVERSE_LENGTH`] for coincident atoms.
    pub inverse_length: f64,
    epoch: u64,
}

/// An ordered pair of atoms; the direction a1 -> a2 fixes the sign conventions of every
/// interaction built on it.
#[derive(Debug, Clone)]
pub struct Bond {
    pub a1: usize,
    pub a2: usize,
    geometry: BondGeometry,
}

impl Bond {
    /// A bond whose cache is stale under every context.
    pub fn new(a1: usize, a2: usize) -> Self {
        Self {
            a1,
            a2,
            geometry: BondGeometry {
                unit: DVec3::ZERO,
                inverse_length: 0.0,
                epoch: 0,
            },
        }
    }

    /// The cached geometry.  Only meaningful when [`Bond::is_fresh`] holds.
    pub fn geometry(&self) -> &BondGeometry {
        &self.geometry
    }

    pub fn cache_epoch(&self) -> u64 {
        self.geometry.epoch
    }

    pub fn is_fresh(&self, ctx: &EvaluationContext) -> bool {
        self.geometry.epoch == ctx.epoch && ctx.epoch != 0
    }

    /// Recomputes the cached geometry from `positions` and stamps it with the current
    /// epoch.  Returns the bond length in pm.
    ///
    /// Panics if either atom index is out of bounds for `positions`; bonds owned by a
    /// [`Part`](crate::part::Part) are checked once per pass before this is reached.
    ///
    /// Callers that do not need the length should use [`Bond::ensure_fresh`] so that a bond
    /// shared between bends is computed once per pass.
    pub fn refresh(&mut self, positions: &[DVec3], ctx: &mut EvaluationContext) -> f64 {
        let rv = positions[self.a2] - positions[self.a1];
        let r = rv.length();
        if r < DEGENERATE_LENGTH {
            self.geometry.inverse_length = DEGENERATE_INVERSE_LENGTH;
            self.geometry.unit = DEGENERATE_DIRECTION;
        } else {
            self.geometry.inverse_length = 1.0 / r;
            self.geometry.unit = rv * self.geometry.inverse_length;
        }
        self.geometry.epoch = ctx.epoch;
        ctx.refreshes += 1;
        r
    }

    /// Refreshes the cached geometry only if it is stale for this pass.
    pub fn ensure_fresh(&mut self, positions: &[DVec3], ctx: &mut EvaluationContext) {
        if !self.is_fresh(ctx) {
            self.refresh(positions, ctx);
        }
    }

    /// The cached unit vector, pointing away from `center` when `flip` says the bond's
    /// a2 is the center.
    #[inline]
    pub(crate) fn outward(&self, flip: bool) -> DVec3 {
        if flip { -self.geometry.unit } else { self.geometry.unit }
    }
}

/// Bend angle for outward unit bond vectors `v1`, `v2`, from a polynomial in `|v1 + v2|`.
#[inline]
pub fn bend_angle(v1: DVec3, v2: DVec3) -> f64 {
    let z = (v1 + v2).length();
    std::f64::consts::PI + z * (ACOS_POLY_D + z * (ACOS_POLY_C + z * (ACOS_POLY_B + z * ACOS_POLY_A)))
}

/// An axis perpendicular to the plane of `v1` and `v2`.
///
/// When the two bonds are colinear their cross product carries no direction, so any axis
/// perpendicular to `v1` will do: `v1 × x̂`, or `v1 × ŷ` when `v1` itself lies along x.
pub fn bend_axis(v1: DVec3, v2: DVec3) -> DVec3 {
    let axis = v1.cross(v2);
    if axis.length() >= COLINEAR {
        return axis;
    }
    let axis = v1.cross(DVec3::X);
    if axis.length() >= COLINEAR {
        return axis;
    }
    v1.cross(DVec3::Y)
}

/// Unit directions in which a growing bend angle moves the two outer atoms.
///
/// `q1` is perpendicular to `v1` and `q2` to `v2`; both lie in the bend plane (or, for a
/// colinear bend, in the plane normal to the axis chosen by [`bend_axis`]).
pub fn bend_directions(v1: DVec3, v2: DVec3) -> (DVec3, DVec3) {
    let axis = bend_axis(v1, v2);
    let q1 = v1.cross(axis).normalize_or_zero();
    let q2 = axis.cross(v2).normalize_or_zero();
    (q1, q2)
}
