use crate::geometry::Offset;
use serde::{Deserialize, Serialize};

/// A pairwise interaction term connecting a source site to a target site,
/// possibly in a neighboring copy of the unit cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Index of the source site within the owning cell.
    pub source: usize,
    /// Index of the target site within the owning cell.
    pub target: usize,
    /// Lattice translation from the cell containing `source` to the cell
    /// containing `target`, in units of the cell's basis vectors. All-zero
    /// means both endpoints live in the same cell instance.
    pub target_offset: Offset,
    /// Integer tag identifying the bond's interaction class.
    pub type_id: i32,
}

impl Bond {
    pub fn new(source: usize, target: usize, target_offset: Offset, type_id: i32) -> Self {
        Self {
            source,
            target,
            target_offset,
            type_id,
        }
    }

    /// Returns `true` if the given site index is one of the bond's endpoints.
    pub fn contains(&self, site: usize) -> bool {
        self.source == site || self.target == site
    }
}

/// A multi-site interaction term generalizing a [`Bond`] to three or more
/// participating sites: one anchor plus an ordered list of targets, each with
/// its own lattice-translation offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBond {
    /// Index of the anchor site within the owning cell.
    pub source: usize,
    /// Indices of the remaining participants, in order.
    pub targets: Vec<usize>,
    /// One lattice-translation offset per entry in `targets`.
    pub target_offsets: Vec<Offset>,
    /// Integer tag identifying the interaction class.
    pub type_id: i32,
}

impl MultiBond {
    pub fn new(
        source: usize,
        targets: Vec<usize>,
        target_offsets: Vec<Offset>,
        type_id: i32,
    ) -> Self {
        Self {
            source,
            targets,
            target_offsets,
            type_id,
        }
    }

    /// Number of sites participating in the term: the anchor plus all
    /// targets. Always at least 3 for terms admitted by a cell.
    pub fn arity(&self) -> usize {
        self.targets.len() + 1
    }
}
