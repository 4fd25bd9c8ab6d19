use crate::geometry::Coordinate;
use serde::{Deserialize, Serialize};

/// Represents one sublattice point within a unit cell.
///
/// A site has no identity of its own: elsewhere in the model it is referenced
/// only by its 0-based insertion index within the owning cell's site
/// sequence. Indices are stable and never reused or reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Fractional position relative to the cell's basis vectors, each
    /// component in `[0, 1)`.
    pub coordinate: Coordinate,
    /// Integer tag grouping sites into species/sublattices. No uniqueness
    /// constraint.
    pub type_id: i32,
}

impl Site {
    pub fn new(coordinate: Coordinate, type_id: i32) -> Self {
        Self {
            coordinate,
            type_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::origin;
    use nalgebra::dvector;

    #[test]
    fn site_new_initializes_fields_correctly() {
        let site = Site::new(dvector![0.5, 0.25], 3);
        assert_eq!(site.coordinate, dvector![0.5, 0.25]);
        assert_eq!(site.type_id, 3);
    }

    #[test]
    fn sites_with_equal_fields_compare_equal() {
        assert_eq!(Site::new(origin(2), 0), Site::new(origin(2), 0));
        assert_ne!(Site::new(origin(2), 0), Site::new(origin(2), 1));
    }
}
