use super::bond::{Bond, MultiBond};
use super::error::CellError;
use super::site::Site;
use crate::geometry::{self, Coordinate, Offset};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::trace;

/// The minimal repeating geometric pattern of a lattice: a validated,
/// append-only collection of sites, pairwise bonds, and multi-site
/// interaction terms, parameterized by a fixed spatial dimension.
///
/// A `UnitCell` is built once (all `add_*` calls from one builder context)
/// and then treated as immutable; no method mutates state after insertion, so
/// a finished cell can be shared across threads for reading without locking.
/// Lattice-generation code consumes it by tiling the cell across a finite or
/// periodic domain.
///
/// # Index spaces
///
/// There are two distinct index spaces, and confusing them is the most common
/// caller mistake:
///
/// - `add_bond` and `add_multi` return a single **combined** counter spanning
///   both kinds, assigned in insertion order regardless of kind: the value is
///   `num_bonds() + num_multis()` as measured immediately before the call.
/// - [`bond`](Self::bond) and [`multi`](Self::multi) index the **per-kind**
///   sequences. The combined index is *not* a valid argument to either.
///
/// # Type-tag partition
///
/// The integer type tags used by ordinary bonds and those used by multi-bonds
/// must stay disjoint: once a bond of type `t` exists no multi-bond may use
/// `t`, and vice versa. Downstream code can therefore dispatch on the tag
/// alone to decide whether a term is pairwise or multi-site.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UnitCell {
    /// Number of spatial dimensions; every coordinate and offset in the cell
    /// has exactly this many components.
    dim: usize,
    /// Sites in insertion order; indices are stable and never reused.
    sites: Vec<Site>,
    /// Ordinary bonds in insertion order.
    bonds: Vec<Bond>,
    /// Multi-site terms in insertion order.
    multis: Vec<MultiBond>,
    /// Type tags already used by ordinary bonds.
    bond_types: BTreeSet<i32>,
    /// Type tags already used by multi-bonds.
    multi_types: BTreeSet<i32>,
}

impl UnitCell {
    /// Creates an empty cell of the given spatial dimension.
    ///
    /// `dim = 0` is accepted and yields the degenerate cell that only empty
    /// coordinates and offsets validate against; callers are expected to
    /// supply a real dimension before adding geometry.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Self::default()
        }
    }

    /// Builds the most basic hypercubic cell of the given dimension: one
    /// type-0 site at the origin plus `dim` type-0 self-bonds, where bond `m`
    /// steps by one unit cell along axis `m`.
    ///
    /// This is the reference cell used when no explicit geometry is supplied.
    /// Its `max_neighbors()` is `2 * dim`.
    pub fn simple(dim: usize) -> Self {
        let mut cell = Self::new(dim);
        cell.add_site(geometry::origin(dim), 0)
            .expect("origin coordinate is valid for any dimension");
        for axis in 0..dim {
            cell.add_bond(0, 0, geometry::unit_offset(dim, axis), 0)
                .expect("unit-axis self-bond on site 0 is valid");
        }
        cell
    }

    /// Returns the number of spatial dimensions, fixed at construction.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Returns the number of sites in the cell.
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// Returns the number of ordinary bonds in the cell.
    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// Returns the number of multi-site terms in the cell.
    pub fn num_multis(&self) -> usize {
        self.multis.len()
    }

    /// Returns the site at index `s` in the site sequence.
    ///
    /// # Panics
    ///
    /// Panics if `s >= num_sites()`.
    pub fn site(&self, s: usize) -> &Site {
        &self.sites[s]
    }

    /// Returns the bond at index `b` in the *per-kind* bond sequence.
    ///
    /// The combined index returned by [`add_bond`](Self::add_bond) is not a
    /// valid argument here once any multi-bond has been inserted.
    ///
    /// # Panics
    ///
    /// Panics if `b >= num_bonds()`.
    pub fn bond(&self, b: usize) -> &Bond {
        &self.bonds[b]
    }

    /// Returns the multi-bond at index `m` in the *per-kind* multi sequence.
    ///
    /// The combined index returned by [`add_multi`](Self::add_multi) is not a
    /// valid argument here once any ordinary bond has been inserted.
    ///
    /// # Panics
    ///
    /// Panics if `m >= num_multis()`.
    pub fn multi(&self, m: usize) -> &MultiBond {
        &self.multis[m]
    }

    /// Returns a slice of all sites in insertion order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Returns a slice of all ordinary bonds in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns a slice of all multi-site terms in insertion order.
    pub fn multis(&self) -> &[MultiBond] {
        &self.multis
    }

    /// Returns the set of type tags registered by ordinary bonds.
    pub fn bond_types(&self) -> &BTreeSet<i32> {
        &self.bond_types
    }

    /// Returns the set of type tags registered by multi-bonds.
    pub fn multi_types(&self) -> &BTreeSet<i32> {
        &self.multi_types
    }

    /// Computes the maximum degree of any site over *ordinary bonds only*.
    ///
    /// Each bond contributes once to its source's degree and once to its
    /// target's, so a self-bond contributes 2 to one site. Multi-site terms
    /// are not counted. Returns 0 for a cell with no sites.
    pub fn max_neighbors(&self) -> usize {
        let mut degrees = vec![0usize; self.num_sites()];
        for bond in &self.bonds {
            degrees[bond.source] += 1;
            degrees[bond.target] += 1;
        }
        degrees.into_iter().max().unwrap_or(0)
    }

    /// Appends a site and returns its newly assigned index, equal to the site
    /// count before the call.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - Fractional position of the site.
    /// * `type_id` - Species/sublattice tag.
    ///
    /// # Errors
    ///
    /// Fails if the coordinate does not have exactly `dimension()` components
    /// or any component lies outside `[0, 1)`. On failure the cell is
    /// unchanged.
    pub fn add_site(&mut self, coordinate: Coordinate, type_id: i32) -> Result<usize, CellError> {
        if coordinate.len() != self.dim {
            return Err(CellError::CoordinateDimension {
                expected: self.dim,
                found: coordinate.len(),
            });
        }
        for (axis, &value) in coordinate.iter().enumerate() {
            if !(0.0..1.0).contains(&value) {
                return Err(CellError::CoordinateOutOfRange { axis, value });
            }
        }
        let index = self.sites.len();
        self.sites.push(Site::new(coordinate, type_id));
        trace!(index, type_id, "site added");
        Ok(index)
    }

    /// Appends a pairwise bond and returns its index in the **combined**
    /// bond/multi index space: `num_bonds() + num_multis()` as measured
    /// immediately before this call. See the type-level docs for why this is
    /// not an argument for [`bond`](Self::bond).
    ///
    /// # Arguments
    ///
    /// * `source`, `target` - Site indices of the endpoints.
    /// * `offset` - Lattice translation from the source's cell instance to
    ///   the target's.
    /// * `type_id` - Interaction-class tag; registered as an ordinary-bond
    ///   type on success.
    ///
    /// # Errors
    ///
    /// Fails if `type_id` is already registered for multi-bonds, either site
    /// index is out of range, or the offset does not have exactly
    /// `dimension()` components. On failure the cell is unchanged.
    pub fn add_bond(
        &mut self,
        source: usize,
        target: usize,
        offset: Offset,
        type_id: i32,
    ) -> Result<usize, CellError> {
        if self.multi_types.contains(&type_id) {
            return Err(CellError::TypeRegisteredAsMulti { type_id });
        }
        self.check_site_index(source)?;
        self.check_site_index(target)?;
        self.check_offset(&offset)?;
        let index = self.bonds.len() + self.multis.len();
        self.bonds.push(Bond::new(source, target, offset, type_id));
        self.bond_types.insert(type_id);
        trace!(index, source, target, type_id, "bond added");
        Ok(index)
    }

    /// Appends a multi-site term and returns its index in the **combined**
    /// bond/multi index space, exactly as [`add_bond`](Self::add_bond) does.
    ///
    /// # Arguments
    ///
    /// * `source` - Anchor site index.
    /// * `targets` - Remaining participant site indices; at least 2.
    /// * `offsets` - One lattice-translation offset per target.
    /// * `type_id` - Interaction-class tag; registered as a multi-bond type
    ///   on success.
    ///
    /// # Errors
    ///
    /// Fails if `targets` and `offsets` differ in length, `targets` has
    /// exactly one entry (a degenerate ordinary bond), `type_id` is already
    /// registered for ordinary bonds, any site index is out of range, or any
    /// offset does not have exactly `dimension()` components. All checks run
    /// before any mutation, so on failure the cell is unchanged.
    pub fn add_multi(
        &mut self,
        source: usize,
        targets: Vec<usize>,
        offsets: Vec<Offset>,
        type_id: i32,
    ) -> Result<usize, CellError> {
        if targets.len() != offsets.len() {
            return Err(CellError::TargetOffsetCountMismatch {
                targets: targets.len(),
                offsets: offsets.len(),
            });
        }
        if targets.len() == 1 {
            return Err(CellError::DegenerateMultiBond);
        }
        if self.bond_types.contains(&type_id) {
            return Err(CellError::TypeRegisteredAsBond { type_id });
        }
        for (&target, offset) in targets.iter().zip(&offsets) {
            self.check_site_index(source)?;
            self.check_site_index(target)?;
            self.check_offset(offset)?;
        }
        let index = self.bonds.len() + self.multis.len();
        let arity = targets.len() + 1;
        self.multis
            .push(MultiBond::new(source, targets, offsets, type_id));
        self.multi_types.insert(type_id);
        trace!(index, source, arity, type_id, "multi-bond added");
        Ok(index)
    }

    fn check_site_index(&self, index: usize) -> Result<(), CellError> {
        if index >= self.num_sites() {
            return Err(CellError::SiteIndexOutOfRange {
                index,
                num_sites: self.num_sites(),
            });
        }
        Ok(())
    }

    fn check_offset(&self, offset: &Offset) -> Result<(), CellError> {
        if offset.len() != self.dim {
            return Err(CellError::OffsetDimension {
                expected: self.dim,
                found: offset.len(),
            });
        }
        Ok(())
    }
}
