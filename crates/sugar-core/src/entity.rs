//! The closed set of entity variants living on the grid.
//!
//! The simulation has exactly two kinds of entity: immobile sugar patches
//! (one per cell) and mobile foragers.  [`Entity`] is the tagged union used
//! wherever the grid or scheduler must hold either kind; the stores holding
//! the actual per-entity state are indexed by the wrapped ID.

use std::fmt;

use crate::{ForagerId, PatchId};

// ── EntityKind ────────────────────────────────────────────────────────────────

/// Type tag used by the scheduler to group entities for activation and to
/// answer per-type population queries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    SugarPatch,
    Forager,
}

impl EntityKind {
    /// `true` for entities that can move between cells.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, EntityKind::Forager)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::SugarPatch => write!(f, "sugar patch"),
            EntityKind::Forager => write!(f, "forager"),
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// A reference to one entity: its kind plus the index into that kind's store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Patch(PatchId),
    Forager(ForagerId),
}

impl Entity {
    #[inline]
    pub fn kind(self) -> EntityKind {
        match self {
            Entity::Patch(_) => EntityKind::SugarPatch,
            Entity::Forager(_) => EntityKind::Forager,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Patch(id) => write!(f, "patch {}", id.0),
            Entity::Forager(id) => write!(f, "forager {}", id.0),
        }
    }
}
