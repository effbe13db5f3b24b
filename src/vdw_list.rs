// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Van der Waals interaction list.
//
// Non-bonded neighbour lists change as atoms move, so entries are tombstoned rather than
// removed: a removed entry leaves an empty slot behind and every other entry keeps its id.
// Empty slots are recycled by later insertions, most recently freed first.

use crate::params::vdw::VdwParameters;
use std::fmt;
use std::sync::Arc;

/// Stable handle to an entry of a [`VdwList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VdwId(pub(crate) usize);

impl VdwId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A non-bonded atom pair and its parameters.
#[derive(Debug, Clone)]
pub struct VanDerWaals {
    pub a1: usize,
    pub a2: usize,
    pub params: Arc<VdwParameters>,
}

impl fmt::Display for VanDerWaals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vdW({} {} {})", self.a1, self.params.label, self.a2)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VdwList {
    slots: Vec<Option<VanDerWaals>>,
    free: Vec<usize>,
}

impl VdwList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry: VanDerWaals) -> VdwId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(entry);
                VdwId(index)
            }
            None => {
                self.slots.push(Some(entry));
                VdwId(self.slots.len() - 1)
            }
        }
    }

    /// Tombstones an entry.  Returns the removed entry, or `None` if the slot was already
    /// empty or never existed.
    pub fn remove(&mut self, id: VdwId) -> Option<VanDerWaals> {
        let removed = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(removed)
    }

    pub fn get(&self, id: VdwId) -> Option<&VanDerWaals> {
        self.slots.get(id.0)?.as_ref()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots, live or tombstoned.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (VdwId, &VanDerWaals)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|entry| (VdwId(index), entry)))
    }

    /// Tombstones every entry for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&VanDerWaals) -> bool) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.as_ref().is_some_and(|entry| !keep(entry)) {
                *slot = None;
                self.free.push(index);
            }
        }
    }
}
