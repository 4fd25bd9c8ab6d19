//! Fixed-dimension numeric vector types consumed by the unit-cell model.
//!
//! The model treats positions and translations as opaque dynamic vectors: a
//! [`Coordinate`] is a length-`dim` vector of reals in fractional (reduced)
//! form, and an [`Offset`] is a length-`dim` vector of integer
//! lattice-translation steps in units of the cell's basis vectors. The cell
//! itself only ever inspects their length and, for coordinates, their range.

use nalgebra::DVector;

/// A fractional coordinate: one real component per spatial axis, each
/// normalized to the half-open interval `[0, 1)` relative to the unit cell's
/// own basis vectors.
pub type Coordinate = DVector<f64>;

/// A lattice-translation offset: one integer component per spatial axis,
/// counting whole unit-cell steps from one cell instance to another. The
/// all-zero offset denotes "same cell instance".
pub type Offset = DVector<i64>;

/// Returns the all-zero coordinate of the given dimension.
pub fn origin(dim: usize) -> Coordinate {
    Coordinate::zeros(dim)
}

/// Returns the all-zero offset of the given dimension.
pub fn zero_offset(dim: usize) -> Offset {
    Offset::zeros(dim)
}

/// Returns the offset that steps by one unit cell along `axis` and is zero
/// everywhere else.
///
/// # Panics
///
/// Panics if `axis >= dim`.
pub fn unit_offset(dim: usize, axis: usize) -> Offset {
    let mut offset = zero_offset(dim);
    offset[axis] = 1;
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_has_requested_length_and_zero_components() {
        let c = origin(3);
        assert_eq!(c.len(), 3);
        assert!(c.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zero_offset_has_requested_length_and_zero_components() {
        let os = zero_offset(2);
        assert_eq!(os.len(), 2);
        assert!(os.iter().all(|&x| x == 0));
    }

    #[test]
    fn unit_offset_steps_along_a_single_axis() {
        let os = unit_offset(3, 1);
        assert_eq!(os.len(), 3);
        assert_eq!(os[0], 0);
        assert_eq!(os[1], 1);
        assert_eq!(os[2], 0);
    }

    #[test]
    fn zero_dimension_vectors_are_empty() {
        assert_eq!(origin(0).len(), 0);
        assert_eq!(zero_offset(0).len(), 0);
    }
}
