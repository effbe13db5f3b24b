// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Interaction parameter sets and the registry that hands them out by label.
//!
//! Parameter sets are immutable once built and shared between interactions through [`Arc`].
//! Stretch and bend sets are built when the registry is loaded; van der Waals pair sets are
//! built on first request and cached, since most element pairs never meet in a given part.

pub mod bend;
pub mod defaults;
pub mod label;
pub mod stretch;
pub mod vdw;

use crate::config::{ConfigError, ForceFieldConfig, TableResolution};
use bend::{BendParameters, BendRecord};
use label::{BendLabel, StretchLabel};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use stretch::{StretchParameters, StretchRecord};
use vdw::{VdwElementRecord, VdwParameters};

/// Lookup-by-label registry of every parameter set known to a force field.
pub struct ParameterTable {
    resolution: TableResolution,
    stretch: FxHashMap<String, Arc<StretchParameters>>,
    bend: FxHashMap<String, Arc<BendParameters>>,
    vdw_elements: FxHashMap<String, VdwElementRecord>,
    vdw_pairs: FxHashMap<(String, String), Arc<VdwParameters>>,
}

impl ParameterTable {
    /// Loads the built-in parameter data at the default table resolution.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_config(&ForceFieldConfig::default())
    }

    /// Loads the parameter records of `config`, layered over the built-in data when
    /// `use_builtin_parameters` is set.  A configured record replaces a built-in record
    /// with the same label in either element order.
    pub fn from_config(config: &ForceFieldConfig) -> Result<Self, ConfigError> {
        let mut table = Self {
            resolution: config.resolution,
            stretch: FxHashMap::default(),
            bend: FxHashMap::default(),
            vdw_elements: FxHashMap::default(),
            vdw_pairs: FxHashMap::default(),
        };

        if config.use_builtin_parameters {
            for record in defaults::stretch_records() {
                table.insert_stretch(record)?;
            }
            for record in defaults::bend_records() {
                table.insert_bend(record)?;
            }
            for record in defaults::vdw_records() {
                table.insert_vdw_element(record)?;
            }
        }
        for record in &config.stretch {
            table.insert_stretch(record.clone())?;
        }
        for record in &config.bend {
            table.insert_bend(record.clone())?;
        }
        for record in &config.vdw {
            table.insert_vdw_element(record.clone())?;
        }

        log::debug!(
            target: "nanoforce::params",
            "loaded {} stretch, {} bend and {} van der Waals element records",
            table.stretch.len(),
            table.bend.len(),
            table.vdw_elements.len()
        );
        Ok(table)
    }

    pub fn resolution(&self) -> &TableResolution {
        &self.resolution
    }

    /// Adds or replaces a stretch parameter set.
    pub fn insert_stretch(&mut self, record: StretchRecord) -> Result<Arc<StretchParameters>, ConfigError> {
        let label = StretchLabel::parse(&record.label)?;
        let params = Arc::new(StretchParameters::build(record, &self.resolution)?);
        self.stretch.remove(&label.reversed().to_string());
        self.stretch.insert(label.to_string(), params.clone());
        Ok(params)
    }

    /// Adds or replaces a bend parameter set.
    pub fn insert_bend(&mut self, record: BendRecord) -> Result<Arc<BendParameters>, ConfigError> {
        let label = BendLabel::parse(&record.label)?;
        let params = Arc::new(BendParameters::build(record)?);
        self.bend.remove(&label.reversed().to_string());
        self.bend.insert(label.to_string(), params.clone());
        Ok(params)
    }

    /// Adds or replaces a per-element van der Waals record, dropping any cached pair built
    /// from the previous record.
    pub fn insert_vdw_element(&mut self, record: VdwElementRecord) -> Result<(), ConfigError> {
        record.validate()?;
        self.vdw_pairs
            .retain(|(a, b), _| *a != record.element && *b != record.element);
        self.vdw_elements.insert(record.element.clone(), record);
        Ok(())
    }

    /// Stretch parameters for a label such as "C-1-C", in either element order.
    pub fn stretch(&self, label: &str) -> Result<Arc<StretchParameters>, ConfigError> {
        let parsed = StretchLabel::parse(label)?;
        self.stretch
            .get(label)
            .or_else(|| self.stretch.get(&parsed.reversed().to_string()))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownLabel {
                kind: "stretch",
                label: label.to_string(),
            })
    }

    /// Stretch parameters for a bond between `first` and `second` of the given order.
    pub fn stretch_for(
        &self,
        first: &str,
        order: &str,
        second: &str,
    ) -> Result<Arc<StretchParameters>, ConfigError> {
        self.stretch(&StretchLabel::new(first, order, second).to_string())
    }

    /// Bend parameters for a label such as "C-1-C-1-H", in either direction.
    pub fn bend(&self, label: &str) -> Result<Arc<BendParameters>, ConfigError> {
        let parsed = BendLabel::parse(label)?;
        self.bend
            .get(label)
            .or_else(|| self.bend.get(&parsed.reversed().to_string()))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownLabel {
                kind: "bend",
                label: label.to_string(),
            })
    }

    /// Van der Waals parameters for an element pair, building and caching them on first use.
    pub fn vdw_for(&mut self, first: &str, second: &str) -> Result<Arc<VdwParameters>, ConfigError> {
        let key = if first <= second {
            (first.to_string(), second.to_string())
        } else {
            (second.to_string(), first.to_string())
        };
        if let Some(params) = self.vdw_pairs.get(&key) {
            return Ok(params.clone());
        }

        let params = Arc::new(VdwParameters::for_pair(
            self.vdw_element(&key.0)?,
            self.vdw_element(&key.1)?,
            &self.resolution,
        )?);
        self.vdw_pairs.insert(key, params.clone());
        Ok(params)
    }

    fn vdw_element(&self, element: &str) -> Result<&VdwElementRecord, ConfigError> {
        self.vdw_elements
            .get(element)
            .ok_or_else(|| ConfigError::UnknownLabel {
                kind: "van der Waals",
                label: element.to_string(),
            })
    }

    /// Labels of every stretch parameter set, in no particular order.
    pub fn stretch_labels(&self) -> impl Iterator<Item = &str> {
        self.stretch.keys().map(String::as_str)
    }
}
