// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Force field configuration: evaluation switches, table resolution, and parameter records.
//!
//! Everything here deserializes from TOML.  A minimal file only needs the switches it
//! changes; every field has a default, and the built-in parameter data is used unless
//! `use_builtin_parameters = false`:
//!
//! ```toml
//! [flags]
//! minimize = true
//!
//! [resolution]
//! table_length = 2048
//!
//! [[stretch]]
//! label = "C-1-C"
//! ks = 440.0
//! r0 = 154.0
//! de = 0.76
//! beta = 1.7
//! inflection_r = 196.0
//! ```

use crate::interpolation::LookupMode;
use crate::params::bend::BendRecord;
use crate::params::stretch::StretchRecord;
use crate::params::vdw::VdwElementRecord;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Malformed interaction label: {0}")]
    MalformedLabel(String),

    #[error("No {kind} parameters for {label}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Invalid interpolation table: {0}")]
    InvalidTable(String),

    #[error("Invalid parameter record {label}: {reason}")]
    InvalidRecord { label: String, reason: String },
}

/// Boolean switches read on every evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationFlags {
    /// Leave stretch interactions out of both evaluators.
    pub skip_stretch: bool,
    /// Leave bend interactions out of both evaluators.
    pub skip_bend: bool,
    /// Leave van der Waals interactions out of both evaluators.
    pub skip_vdw: bool,
    /// Evaluate the closed-form curves instead of the interpolation tables for in-range
    /// queries.
    pub direct_evaluate: bool,
    /// The caller is minimizing rather than integrating dynamics.  Stretches then follow
    /// their polynomial tail past the end of the table instead of vanishing, and off-table
    /// diagnostics are suppressed.
    pub minimize: bool,
    /// Report queries that fall outside a table's domain.
    pub table_bounds_diagnostics: bool,
}

impl EvaluationFlags {
    pub(crate) fn lookup_mode(&self) -> LookupMode {
        LookupMode {
            direct: self.direct_evaluate,
            minimizing: self.minimize,
        }
    }

    /// Whether an off-table query should be reported on this pass.
    pub(crate) fn reports_table_bounds(&self) -> bool {
        self.table_bounds_diagnostics && !self.minimize
    }
}

/// Size and domain of the interpolation tables fitted at load time.
///
/// Stretch tables span `[stretch_start_factor * r0, stretch_end_factor * r0)`; van der
/// Waals tables span `[vdw_start_factor * rv, vdw_cutoff_factor * rv)` where `rv` is the
/// pair's combined radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableResolution {
    pub table_length: usize,
    pub stretch_start_factor: f64,
    pub stretch_end_factor: f64,
    pub vdw_start_factor: f64,
    pub vdw_cutoff_factor: f64,
}

impl Default for TableResolution {
    fn default() -> Self {
        Self {
            table_length: 4096,
            stretch_start_factor: 0.5,
            stretch_end_factor: 2.5,
            vdw_start_factor: 0.35,
            vdw_cutoff_factor: 1.7,
        }
    }
}

/// Complete force field configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceFieldConfig {
    pub flags: EvaluationFlags,
    pub resolution: TableResolution,
    /// Merge the built-in parameter data underneath the records below.
    pub use_builtin_parameters: bool,
    pub stretch: Vec<StretchRecord>,
    pub bend: Vec<BendRecord>,
    pub vdw: Vec<VdwElementRecord>,
}

impl Default for ForceFieldConfig {
    fn default() -> Self {
        Self {
            flags: EvaluationFlags::default(),
            resolution: TableResolution::default(),
            use_builtin_parameters: true,
            stretch: Vec::new(),
            bend: Vec::new(),
            vdw: Vec::new(),
        }
    }
}

impl ForceFieldConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
