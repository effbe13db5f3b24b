// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Bond stretch parameters.
//
// The stretch curve is a Lippincott-Morse hybrid. With t = r - r0:
//
//   r <  r0:  V = De * ((1 - exp(-beta' * t))^2 - 1)          (Morse)
//   r >= r0:  V = -De * exp(-1e-6 * ks * r0 * t^2 / (2*De*r))  (Lippincott)
//
// Both branches are -De at r0 with curvature ks there, so the curve is C2 at the seam.
// beta is tabulated per Ångström; beta' = beta / 100 is per picometer.
//
// The gradient is dV/dr in pN. It is positive for a stretched bond: projected along the
// bond direction a1 -> a2 it pulls a1 toward a2.

use crate::config::{ConfigError, TableResolution};
use crate::interpolation::{InterpolationTable, Lookup, LookupMode, LookupPolicy, lookup};
use crate::units::{DR, LIPPINCOTT_SCALE, PM_PER_ANGSTROM};
use serde::{Deserialize, Serialize};

/// One stretch parameter record, as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StretchRecord {
    /// Bond type, e.g. "C-1-C".
    pub label: String,
    /// Stiffness at the equilibrium length, N/m.
    pub ks: f64,
    /// Equilibrium length, pm.
    pub r0: f64,
    /// Well depth, aJ.
    pub de: f64,
    /// Morse steepness, 1/Å.
    pub beta: f64,
    /// Inflection radius of the curve, pm.
    pub inflection_r: f64,
    /// Cubic tail `[A, B, C, D]` used past the end of the table while minimizing.
    #[serde(default)]
    pub extension: Option<[f64; 4]>,
    /// Precomputed potential table; fitted from the closed form when absent.
    #[serde(default)]
    pub potential_table: Option<InterpolationTable>,
    /// Precomputed gradient table; fitted from the closed form when absent.
    #[serde(default)]
    pub gradient_table: Option<InterpolationTable>,
}

impl StretchRecord {
    pub fn new(ks: f64, r0: f64, de: f64, beta: f64, inflection_r: f64, label: &str) -> Self {
        Self {
            label: label.to_string(),
            ks,
            r0,
            de,
            beta,
            inflection_r,
            extension: None,
            potential_table: None,
            gradient_table: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("ks", self.ks),
            ("r0", self.r0),
            ("de", self.de),
            ("beta", self.beta),
            ("inflection_r", self.inflection_r),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidRecord {
                    label: self.label.clone(),
                    reason: format!("{name} must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    fn beta_per_pm(&self) -> f64 {
        self.beta / PM_PER_ANGSTROM
    }

    /// Closed-form potential at `r` pm, in aJ.
    pub fn potential(&self, r: f64) -> f64 {
        let t = r - self.r0;
        if t < 0.0 {
            let m = 1.0 - (-self.beta_per_pm() * t).exp();
            self.de * (m * m - 1.0)
        } else {
            -self.de * (-self.lippincott_exponent(r)).exp()
        }
    }

    /// Closed-form gradient `dV/dr` at `r` pm, in pN.
    pub fn gradient(&self, r: f64) -> f64 {
        let t = r - self.r0;
        let slope = if t < 0.0 {
            let b = self.beta_per_pm();
            let ex = (-b * t).exp();
            2.0 * self.de * b * ex * (1.0 - ex)
        } else {
            let c = self.lippincott_coefficient();
            let da_dr = c * (2.0 * t * r - t * t) / (r * r);
            self.de * (-self.lippincott_exponent(r)).exp() * da_dr
        };
        slope * DR
    }

    // 1e-6 * ks * r0 / (2 * De), so that the exponent is c * t^2 / r.
    fn lippincott_coefficient(&self) -> f64 {
        LIPPINCOTT_SCALE * self.ks * self.r0 / (2.0 * self.de)
    }

    fn lippincott_exponent(&self, r: f64) -> f64 {
        let t = r - self.r0;
        self.lippincott_coefficient() * t * t / r
    }
}

/// Cubic continuation `A + B r + C r² + D r³` (aJ, r in pm) of the stretch curve past the
/// end of its table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicTail {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicTail {
    pub fn from_coefficients([a, b, c, d]: [f64; 4]) -> Self {
        Self { a, b, c, d }
    }

    /// Harmonic continuation anchored at the end of the table: it matches the curve's value
    /// and slope at `r_end` and stiffens beyond it at the bond stiffness `ks`.
    pub fn harmonic(record: &StretchRecord, r_end: f64) -> Self {
        let k = 0.5 * LIPPINCOTT_SCALE * record.ks;
        let v_end = record.potential(r_end);
        // aJ/pm
        let slope_end = record.gradient(r_end) / DR;
        Self {
            a: v_end - slope_end * r_end + k * r_end * r_end,
            b: slope_end - 2.0 * k * r_end,
            c: k,
            d: 0.0,
        }
    }

    /// Potential in aJ.
    pub fn potential(&self, r: f64) -> f64 {
        self.a + r * (self.b + r * (self.c + r * self.d))
    }

    /// Gradient in pN.
    pub fn gradient(&self, r: f64) -> f64 {
        (self.b + r * (2.0 * self.c + r * 3.0 * self.d)) * DR
    }
}

/// Immutable stretch parameter set shared by every stretch of one bond type.
#[derive(Debug, Clone)]
pub struct StretchParameters {
    pub record: StretchRecord,
    pub potential_table: InterpolationTable,
    pub gradient_table: InterpolationTable,
    pub tail: CubicTail,
}

impl StretchParameters {
    /// Builds the parameter set, fitting any table the record does not supply.
    pub fn build(record: StretchRecord, resolution: &TableResolution) -> Result<Self, ConfigError> {
        record.validate()?;
        let start = resolution.stretch_start_factor * record.r0;
        let end = resolution.stretch_end_factor * record.r0;
        let len = resolution.table_length;

        let potential_table = match &record.potential_table {
            Some(table) => table.clone(),
            None => InterpolationTable::fit(start, end, len, |r| record.potential(r))?,
        };
        let gradient_table = match &record.gradient_table {
            Some(table) => table.clone(),
            None => InterpolationTable::fit(start, end, len, |r| record.gradient(r))?,
        };
        let tail = match record.extension {
            Some(coefficients) => CubicTail::from_coefficients(coefficients),
            None => CubicTail::harmonic(&record, potential_table.end()),
        };

        log::debug!(
            target: "nanoforce::params",
            "stretch {}: table [{:.2}, {:.2}) pm in {} buckets",
            record.label,
            potential_table.start(),
            potential_table.end(),
            potential_table.len()
        );

        Ok(Self {
            record,
            potential_table,
            gradient_table,
            tail,
        })
    }

    pub fn label(&self) -> &str {
        &self.record.label
    }

    /// Stretch potential at `r` pm, in aJ.
    pub fn potential(&self, r: f64, mode: LookupMode) -> Lookup {
        let policy = LookupPolicy::extrapolating(
            |r| self.record.potential(r),
            |r| self.tail.potential(r),
        );
        lookup(&self.potential_table, &policy, mode, r)
    }

    /// Stretch gradient at `r` pm, in pN.
    pub fn gradient(&self, r: f64, mode: LookupMode) -> Lookup {
        let policy = LookupPolicy::extrapolating(
            |r| self.record.gradient(r),
            |r| self.tail.gradient(r),
        );
        lookup(&self.gradient_table, &policy, mode, r)
    }
}
