// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Force field evaluation core for molecular mechanics.
//!
//! Given atom positions, computes the total potential energy and the per-atom forces of a
//! fixed set of bond stretch, bond angle bend, and van der Waals interactions.  Stretch and
//! van der Waals curves are read from piecewise-linear interpolation tables; bends use a
//! harmonic potential over a polynomial approximation of the bend angle.
//!
//! ```no_run
//! use glam::DVec3;
//! use nanoforce::{Evaluator, EvaluationFlags, ForceField, ParameterTable, Part};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ParameterTable::builtin()?;
//! let mut part = Part::new(2);
//! let bond = part.add_bond(0, 1)?;
//! part.add_stretch(bond, params.stretch("C-1-C")?)?;
//!
//! let positions = [DVec3::ZERO, DVec3::new(160.0, 0.0, 0.0)];
//! let mut forces = [DVec3::ZERO; 2];
//! let mut evaluator = Evaluator::new(EvaluationFlags::default());
//! let energy = evaluator.potential(&mut part, &positions)?;
//! evaluator.forces(&mut part, &positions, &mut forces)?;
//! # let _ = energy;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod diagnostics;
pub mod evaluator;
pub mod geometry;
pub mod interpolation;
pub mod params;
pub mod part;
pub mod units;
pub mod vdw_list;

pub use config::{ConfigError, EvaluationFlags, ForceFieldConfig, TableResolution};
pub use evaluator::{
    EvalError, Evaluator, ForceField, PotentialBreakdown, accumulate_forces, potential_breakdown,
    total_potential,
};
pub use geometry::{Bond, EvaluationContext};
pub use interpolation::{InterpolationTable, LookupMode};
pub use params::ParameterTable;
pub use part::{BondId, Part, PartError};
pub use vdw_list::{VdwId, VdwList};
