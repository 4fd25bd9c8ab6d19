use thiserror::Error;

/// Validation failure raised by the `add_*` operations of a unit cell.
///
/// Every variant is an invalid-argument failure: the offending call is
/// rejected before any state changes, and the cell is left exactly as it was.
/// There are no recoverable intermediate states and no fatal errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    #[error("site coordinate has {found} components, expected {expected}")]
    CoordinateDimension { expected: usize, found: usize },

    #[error("site coordinate component {value} at axis {axis} is outside [0, 1)")]
    CoordinateOutOfRange { axis: usize, value: f64 },

    #[error("offset has {found} components, expected {expected}")]
    OffsetDimension { expected: usize, found: usize },

    #[error("site index {index} out of range for cell with {num_sites} sites")]
    SiteIndexOutOfRange { index: usize, num_sites: usize },

    #[error("multi-bond has {targets} targets but {offsets} offsets")]
    TargetOffsetCountMismatch { targets: usize, offsets: usize },

    #[error("multi-bond with a single target is a degenerate ordinary bond")]
    DegenerateMultiBond,

    #[error("type {type_id} is already registered for multi-bonds")]
    TypeRegisteredAsMulti { type_id: i32 },

    #[error("type {type_id} is already registered for ordinary bonds")]
    TypeRegisteredAsBond { type_id: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_values() {
        let err = CellError::CoordinateDimension {
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "site coordinate has 3 components, expected 2"
        );

        let err = CellError::SiteIndexOutOfRange {
            index: 99,
            num_sites: 1,
        };
        assert_eq!(
            err.to_string(),
            "site index 99 out of range for cell with 1 sites"
        );

        let err = CellError::TypeRegisteredAsMulti { type_id: 5 };
        assert_eq!(
            err.to_string(),
            "type 5 is already registered for multi-bonds"
        );
    }
}
