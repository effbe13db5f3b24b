// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Van der Waals (Buckingham, MM3 form) parameters.
//
// For a pair with combined radius rv = rvdw_a + rvdw_b and well depth e = sqrt(e_a * e_b):
//
//   V(r) = e * (2.48e5 * exp(-12.5 * r / rv) - 1.924 * (rv / r)^6)
//
// The minimum sits at r ~= rv with depth ~= -e. The curve turns over and collapses toward
// -inf well inside 0.3 * rv, which is why the table never starts below that and queries
// below the table clamp to its first bucket.
//
// The gradient table stores -dV/dr / r, in pN per pm of separation, so callers project it
// along the raw separation vector a1 - a2 to get the force on a1.

use crate::config::{ConfigError, TableResolution};
use crate::interpolation::{InterpolationTable, Lookup, LookupMode, LookupPolicy, lookup};
use crate::params::label::is_element;
use crate::units::{DR, ZJ_TO_AJ};
use serde::{Deserialize, Serialize};

const REPULSION_PREFACTOR: f64 = 2.48e5;
const REPULSION_EXPONENT: f64 = 12.5;
const DISPERSION_PREFACTOR: f64 = 1.924;

/// Per-element van der Waals record, as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdwElementRecord {
    pub element: String,
    /// Radius, pm.
    pub rvdw: f64,
    /// Well depth, zJ.
    pub evdw: f64,
}

impl VdwElementRecord {
    pub fn new(element: &str, rvdw: f64, evdw: f64) -> Self {
        Self {
            element: element.to_string(),
            rvdw,
            evdw,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !is_element(&self.element) {
            return Err(ConfigError::MalformedLabel(self.element.clone()));
        }
        if !(self.rvdw.is_finite() && self.rvdw > 0.0 && self.evdw.is_finite() && self.evdw >= 0.0) {
            return Err(ConfigError::InvalidRecord {
                label: self.element.clone(),
                reason: format!("rvdw {} / evdw {} out of range", self.rvdw, self.evdw),
            });
        }
        Ok(())
    }
}

/// Immutable parameters for one element pair.
#[derive(Debug, Clone)]
pub struct VdwParameters {
    /// Pair label, e.g. "C-v-H".
    pub label: String,
    /// Combined radius, pm.
    pub rvdw: f64,
    /// Combined well depth, zJ.
    pub evdw: f64,
    pub potential_table: InterpolationTable,
    pub gradient_table: InterpolationTable,
}

impl VdwParameters {
    pub fn for_pair(
        a: &VdwElementRecord,
        b: &VdwElementRecord,
        resolution: &TableResolution,
    ) -> Result<Self, ConfigError> {
        a.validate()?;
        b.validate()?;
        let rvdw = a.rvdw + b.rvdw;
        let evdw = (a.evdw * b.evdw).sqrt();
        let label = format!("{}-v-{}", a.element, b.element);

        let start = resolution.vdw_start_factor * rvdw;
        let end = resolution.vdw_cutoff_factor * rvdw;
        let len = resolution.table_length;
        let potential_table =
            InterpolationTable::fit(start, end, len, |r| buckingham_potential(rvdw, evdw, r))?;
        let gradient_table =
            InterpolationTable::fit(start, end, len, |r| buckingham_gradient(rvdw, evdw, r))?;

        log::debug!(
            target: "nanoforce::params",
            "vdW {label}: rv {rvdw:.2} pm, e {evdw:.4} zJ, cutoff {end:.2} pm"
        );

        Ok(Self {
            label,
            rvdw,
            evdw,
            potential_table,
            gradient_table,
        })
    }

    /// Distance past which the interaction is zero.
    pub fn cutoff(&self) -> f64 {
        self.potential_table.end()
    }

    /// Closed-form potential at `r` pm, in aJ.
    pub fn exact_potential(&self, r: f64) -> f64 {
        buckingham_potential(self.rvdw, self.evdw, r)
    }

    /// Closed-form `-dV/dr / r`, in pN/pm.
    pub fn exact_gradient(&self, r: f64) -> f64 {
        buckingham_gradient(self.rvdw, self.evdw, r)
    }

    /// Van der Waals potential at `r` pm, in aJ.
    pub fn potential(&self, r: f64, mode: LookupMode) -> Lookup {
        let policy = LookupPolicy::clamped(|r| self.exact_potential(r));
        lookup(&self.potential_table, &policy, mode, r)
    }

    /// Van der Waals gradient at `r` pm, in pN per pm of separation.
    pub fn gradient(&self, r: f64, mode: LookupMode) -> Lookup {
        let policy = LookupPolicy::clamped(|r| self.exact_gradient(r));
        lookup(&self.gradient_table, &policy, mode, r)
    }
}

fn buckingham_potential(rvdw: f64, evdw: f64, r: f64) -> f64 {
    let ratio = rvdw / r;
    let ratio6 = ratio * ratio * ratio * ratio * ratio * ratio;
    evdw * ZJ_TO_AJ
        * (REPULSION_PREFACTOR * (-REPULSION_EXPONENT * r / rvdw).exp() - DISPERSION_PREFACTOR * ratio6)
}

fn buckingham_gradient(rvdw: f64, evdw: f64, r: f64) -> f64 {
    let ratio = rvdw / r;
    let ratio6 = ratio * ratio * ratio * ratio * ratio * ratio;
    let dv_dr = evdw
        * ZJ_TO_AJ
        * (-REPULSION_PREFACTOR * REPULSION_EXPONENT / rvdw * (-REPULSION_EXPONENT * r / rvdw).exp()
            + 6.0 * DISPERSION_PREFACTOR * ratio6 / r);
    -dv_dr * DR / r
}
