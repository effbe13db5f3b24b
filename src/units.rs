// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Unit scales shared by the evaluators.
//!
//! Distances are in picometers (pm), potentials in attojoules (aJ, 1e-18 J), and gradients
//! and forces in piconewtons (pN, 1e-12 J/m).  Bend stiffness is carried in yoctojoules per
//! square radian (yJ/rad², 1e-24 J/rad²), so a bend torque comes out in yJ/rad and has to be
//! rescaled before it is folded into an aJ sum.

/// Converts yoctojoules into attojoules.
pub const YJ_TO_AJ: f64 = 1e-6;

/// Converts attojoules into yoctojoules.
pub const AJ_TO_YJ: f64 = 1e6;

/// Converts a potential slope in aJ/pm into a force in pN.
///
/// 1 aJ/pm = 1e-18 J / 1e-12 m = 1e-6 N = 1e6 pN.
pub const DR: f64 = 1e6;

/// Converts zeptojoules (the unit of the per-element van der Waals well depth) into attojoules.
pub const ZJ_TO_AJ: f64 = 1e-3;

/// Picometers per Ångström, for parameters tabulated per Ångström (e.g. Morse `beta`).
pub const PM_PER_ANGSTROM: f64 = 100.0;

/// Scale applied to `ks·r0·t²/r` (N/m · pm) to express it in aJ.
pub const LIPPINCOTT_SCALE: f64 = 1e-6;
