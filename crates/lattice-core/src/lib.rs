//! # Lattice Core
//!
//! A validated in-memory model of a crystallographic **unit cell**: the
//! minimal repeating pattern of sites, pairwise bonds, and multi-site
//! interaction terms from which lattice-generation code tiles a full lattice
//! across a finite or periodic domain.
//!
//! ## Overview
//!
//! The central type is [`UnitCell`], an append-only container with a fixed
//! spatial dimension. Its `add_*` operations validate every insertion
//! (coordinate normalization to `[0, 1)`, dimensionality of coordinates and
//! offsets, site-index bounds, and the disjointness of bond and multi-bond
//! type tags) so that downstream consumers can trust the cell without
//! re-checking it.
//!
//! Construction is exclusive-write, reading is lock-free: populate the cell
//! from one builder context, then share it immutably across threads.
//!
//! ## Caveat: two index spaces
//!
//! [`UnitCell::add_bond`] and [`UnitCell::add_multi`] return indices from one
//! *combined* counter spanning both kinds, while [`UnitCell::bond`] and
//! [`UnitCell::multi`] index the per-kind sequences. See the [`UnitCell`]
//! docs before mixing the two.
//!
//! ```
//! use lattice_core::UnitCell;
//!
//! // A square-lattice cell: one site, one self-bond per axis.
//! let cell = UnitCell::simple(2);
//! assert_eq!(cell.num_sites(), 1);
//! assert_eq!(cell.num_bonds(), 2);
//! assert_eq!(cell.max_neighbors(), 4);
//! ```

pub mod geometry;
pub mod models;

pub use geometry::{Coordinate, Offset};
pub use models::bond::{Bond, MultiBond};
pub use models::cell::UnitCell;
pub use models::error::CellError;
pub use models::site::Site;
