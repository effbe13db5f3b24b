// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Interaction labels.
//
// Stretch parameters are keyed by "<element>-<order>-<element>" (e.g. "C-1-C", "H-1-Si"),
// bend parameters by "<element>-<order>-<center>-<order>-<element>" (e.g. "C-1-C-1-H").
// The data does not fix an element ordering, so lookups try the label as given and then
// reversed.

use crate::config::ConfigError;
use std::fmt;

/// Parsed "<element>-<order>-<element>" label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StretchLabel {
    pub first: String,
    pub order: String,
    pub second: String,
}

impl StretchLabel {
    pub fn new(first: &str, order: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            order: order.to_string(),
            second: second.to_string(),
        }
    }

    pub fn parse(label: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = label.split('-').collect();
        match parts.as_slice() {
            [first, order, second]
                if is_element(first) && is_order(order) && is_element(second) =>
            {
                Ok(Self::new(first, order, second))
            }
            _ => Err(ConfigError::MalformedLabel(label.to_string())),
        }
    }

    pub fn reversed(&self) -> Self {
        Self::new(&self.second, &self.order, &self.first)
    }
}

impl fmt::Display for StretchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.first, self.order, self.second)
    }
}

/// Parsed "<element>-<order>-<center>-<order>-<element>" label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BendLabel {
    pub first: String,
    pub first_order: String,
    pub center: String,
    pub second_order: String,
    pub second: String,
}

impl BendLabel {
    pub fn parse(label: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = label.split('-').collect();
        match parts.as_slice() {
            [first, first_order, center, second_order, second]
                if is_element(first)
                    && is_order(first_order)
                    && is_element(center)
                    && is_order(second_order)
                    && is_element(second) =>
            {
                Ok(Self {
                    first: first.to_string(),
                    first_order: first_order.to_string(),
                    center: center.to_string(),
                    second_order: second_order.to_string(),
                    second: second.to_string(),
                })
            }
            _ => Err(ConfigError::MalformedLabel(label.to_string())),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            first_order: self.second_order.clone(),
            center: self.center.clone(),
            second_order: self.first_order.clone(),
            second: self.first.clone(),
        }
    }
}

impl fmt::Display for BendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.first, self.first_order, self.center, self.second_order, self.second
        )
    }
}

/// An element symbol: one uppercase letter, optionally followed by lowercase letters.
pub fn is_element(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_lowercase()),
        _ => false,
    }
}

// Bond orders are "1", "2", "3", or a letter code such as "a" (aromatic) or "g" (graphitic).
fn is_order(order: &str) -> bool {
    !order.is_empty() && order.chars().all(|c| c.is_ascii_alphanumeric())
}
