//! The occupant container.
//!
//! # Inverted dependency
//!
//! The house depends on the [`Resident`] capability, never on a concrete
//! occupant type. Occupant types depend on the capability in turn, so the
//! arrows point from the variants toward the abstraction and the container
//! stays untouched as variants accumulate.

use crate::resident::Resident;

/// An ordered household of residents.
///
/// Holds a heterogeneous sequence behind the [`Resident`] capability,
/// preserving arrival order. The sequence is unbounded and supports no
/// removal; occupants only move in.
pub struct House {
    residents: Vec<Box<dyn Resident>>,
}

impl House {
    /// Creates a house with its initial occupants.
    pub fn new(residents: Vec<Box<dyn Resident>>) -> Self {
        Self { residents }
    }

    /// Creates a house with nobody home.
    pub fn empty() -> Self {
        Self {
            residents: Vec::new(),
        }
    }

    /// Moves one occupant in, appending at the end of the sequence.
    pub fn add(&mut self, resident: impl Resident) {
        self.residents.push(Box::new(resident));
        #[cfg(feature = "tracing")]
        tracing::debug!(occupancy = self.residents.len(), "resident moved in");
    }

    /// Number of current occupants.
    pub fn occupancy(&self) -> usize {
        self.residents.len()
    }

    /// Whether anyone lives here.
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// The occupants in arrival order.
    pub fn residents(&self) -> &[Box<dyn Resident>] {
        &self.residents
    }
}

impl Default for House {
    fn default() -> Self {
        Self::empty()
    }
}
