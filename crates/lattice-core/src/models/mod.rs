//! # Unit-Cell Model
//!
//! Data structures describing one cell's worth of lattice geometry and
//! connectivity: the entities ([`site`], [`bond`]), the validation errors
//! ([`error`]), and the owning container ([`cell`]).
//!
//! All three entity kinds are append-only. They are created through the
//! `add_*` operations of [`cell::UnitCell`], never mutated or removed after
//! insertion, and have no identity outside their owning cell; correcting a
//! mistake means rebuilding a new cell.

pub mod bond;
pub mod cell;
pub mod error;
pub mod site;
