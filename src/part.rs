// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The molecular system being evaluated: its bonds and interaction lists.
//!
//! A [`Part`] never owns atom positions.  Atoms are indices into caller-owned position and
//! force arrays, and every index stored in a part is checked against the part's atom count
//! when the interaction is added, so the evaluators only need to check the array lengths.

use crate::geometry::Bond;
use crate::params::bend::BendParameters;
use crate::params::stretch::StretchParameters;
use crate::params::vdw::VdwParameters;
use crate::vdw_list::{VanDerWaals, VdwId, VdwList};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartError {
    #[error("Atom index {index} out of range for a part with {atom_count} atoms")]
    AtomOutOfRange { index: usize, atom_count: usize },

    #[error("Bond {0} does not exist")]
    UnknownBond(usize),

    #[error("A bond needs two distinct atoms, got {0} twice")]
    SelfBond(usize),

    #[error("Bonds {0} and {1} do not share exactly one atom")]
    DisjointBend(usize, usize),
}

/// Handle to a bond of a [`Part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondId(usize);

impl BondId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Two-body bonded interaction.
#[derive(Debug, Clone)]
pub struct Stretch {
    pub bond: BondId,
    pub params: Arc<StretchParameters>,
}

/// Three-body bonded interaction over two bonds sharing `central`.
///
/// `flip1` (`flip2`) is set when bond 1's (bond 2's) cached a1 -> a2 direction points
/// toward the central atom and has to be negated to point outward.
#[derive(Debug, Clone)]
pub struct Bend {
    pub bond1: BondId,
    pub bond2: BondId,
    pub flip1: bool,
    pub flip2: bool,
    pub central: usize,
    pub a1: usize,
    pub a2: usize,
    pub params: Arc<BendParameters>,
}

impl fmt::Display for Bend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bend({} {} {} {})",
            self.a1, self.central, self.a2, self.params.label
        )
    }
}

#[derive(Debug, Clone)]
pub struct Part {
    atom_count: usize,
    pub(crate) bonds: Vec<Bond>,
    pub(crate) stretches: Vec<Stretch>,
    pub(crate) bends: Vec<Bend>,
    pub(crate) van_der_waals: VdwList,
}

impl Part {
    pub fn new(atom_count: usize) -> Self {
        Self {
            atom_count,
            bonds: Vec::new(),
            stretches: Vec::new(),
            bends: Vec::new(),
            van_der_waals: VdwList::new(),
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    fn check_atom(&self, index: usize) -> Result<(), PartError> {
        if index < self.atom_count {
            Ok(())
        } else {
            Err(PartError::AtomOutOfRange {
                index,
                atom_count: self.atom_count,
            })
        }
    }

    /// Adds a bond directed from `a1` to `a2`.
    pub fn add_bond(&mut self, a1: usize, a2: usize) -> Result<BondId, PartError> {
        self.check_atom(a1)?;
        self.check_atom(a2)?;
        if a1 == a2 {
            return Err(PartError::SelfBond(a1));
        }
        self.bonds.push(Bond::new(a1, a2));
        Ok(BondId(self.bonds.len() - 1))
    }

    pub fn bond(&self, id: BondId) -> Result<&Bond, PartError> {
        self.bonds.get(id.0).ok_or(PartError::UnknownBond(id.0))
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn add_stretch(&mut self, bond: BondId, params: Arc<StretchParameters>) -> Result<(), PartError> {
        self.bond(bond)?;
        self.stretches.push(Stretch { bond, params });
        Ok(())
    }

    pub fn stretches(&self) -> &[Stretch] {
        &self.stretches
    }

    /// Adds a bend over two bonds that share exactly one atom, which becomes the central
    /// atom.  The orientation flags are derived from which end of each bond is central.
    pub fn add_bend(
        &mut self,
        bond1: BondId,
        bond2: BondId,
        params: Arc<BendParameters>,
    ) -> Result<(), PartError> {
        let b1 = self.bond(bond1)?;
        let b2 = self.bond(bond2)?;
        let (b1_ends, b2_ends) = ([b1.a1, b1.a2], [b2.a1, b2.a2]);

        let shared: Vec<usize> = b1_ends
            .iter()
            .copied()
            .filter(|atom| b2_ends.contains(atom))
            .collect();
        let [central] = shared.as_slice() else {
            return Err(PartError::DisjointBend(bond1.0, bond2.0));
        };
        let central = *central;

        let flip1 = b1.a2 == central;
        let flip2 = b2.a2 == central;
        let a1 = if flip1 { b1.a1 } else { b1.a2 };
        let a2 = if flip2 { b2.a1 } else { b2.a2 };

        self.bends.push(Bend {
            bond1,
            bond2,
            flip1,
            flip2,
            central,
            a1,
            a2,
            params,
        });
        Ok(())
    }

    pub fn bends(&self) -> &[Bend] {
        &self.bends
    }

    pub fn add_vdw(&mut self, a1: usize, a2: usize, params: Arc<VdwParameters>) -> Result<VdwId, PartError> {
        self.check_atom(a1)?;
        self.check_atom(a2)?;
        Ok(self.van_der_waals.insert(VanDerWaals { a1, a2, params }))
    }

    /// Tombstones a van der Waals entry; the ids of all other entries are unchanged.
    pub fn remove_vdw(&mut self, id: VdwId) -> Option<VanDerWaals> {
        self.van_der_waals.remove(id)
    }

    pub fn vdw(&self, id: VdwId) -> Option<&VanDerWaals> {
        self.van_der_waals.get(id)
    }

    pub fn van_der_waals(&self) -> &VdwList {
        &self.van_der_waals
    }

    pub fn van_der_waals_mut(&mut self) -> &mut VdwList {
        &mut self.van_der_waals
    }
}

impl fmt::Display for Stretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stretch(bond {} {})", self.bond.0, self.params.label())
    }
}
