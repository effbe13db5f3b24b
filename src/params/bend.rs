// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::config::ConfigError;
use crate::units::{AJ_TO_YJ, YJ_TO_AJ};
use serde::{Deserialize, Serialize};

/// One bend parameter record, as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendRecord {
    /// Bend type, e.g. "C-1-C-1-H"; the middle element is the central atom.
    pub label: String,
    /// Stiffness, aJ/rad².
    pub kb: f64,
    /// Equilibrium angle, radians.
    pub theta0: f64,
}

impl BendRecord {
    pub fn new(kb: f64, theta0: f64, label: &str) -> Self {
        Self {
            label: label.to_string(),
            kb,
            theta0,
        }
    }
}

/// Immutable harmonic bend parameters shared by every bend of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct BendParameters {
    pub label: String,
    /// Stiffness, yJ/rad².
    pub kb: f64,
    /// Equilibrium angle, radians.
    pub theta0: f64,
}

impl BendParameters {
    pub fn build(record: BendRecord) -> Result<Self, ConfigError> {
        if !(record.kb.is_finite() && record.kb >= 0.0) {
            return Err(ConfigError::InvalidRecord {
                label: record.label,
                reason: format!("kb must be non-negative, got {}", record.kb),
            });
        }
        if !(0.0..=std::f64::consts::PI).contains(&record.theta0) {
            return Err(ConfigError::InvalidRecord {
                label: record.label,
                reason: format!("theta0 must lie in [0, pi], got {}", record.theta0),
            });
        }
        Ok(Self {
            label: record.label,
            kb: record.kb * AJ_TO_YJ,
            theta0: record.theta0,
        })
    }

    /// Torque `kb * (theta - theta0)` in yJ/rad.
    #[inline]
    pub fn torque(&self, theta: f64) -> f64 {
        (theta - self.theta0) * self.kb
    }

    /// Harmonic bend energy at `theta`, in aJ.
    #[inline]
    pub fn potential(&self, theta: f64) -> f64 {
        let d_theta = theta - self.theta0;
        0.5 * d_theta * d_theta * self.kb * YJ_TO_AJ
    }
}
