//! Error type used by the crate.

use thiserror::Error;

use crate::axis::AxisKind;
use crate::position::PositionKind;

/// Error enum.
///
/// Every variant describes a contract violation by the caller. None of them is transient, so retrying the same call
/// always gives the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A position was constructed from a wrong number of ordinates.
    #[error("{kind:?} position needs {expected} ordinates, got {actual}")]
    InvalidOrdinateCount {
        /// Variant that was being constructed.
        kind: PositionKind,
        /// Number of ordinates of the variant.
        expected: usize,
        /// Number of ordinates given.
        actual: usize,
    },
    /// An ordinate was requested for an axis the position does not have.
    #[error("{kind:?} position has no {axis:?} axis")]
    UnsupportedAxis {
        /// Variant of the position.
        kind: PositionKind,
        /// Requested axis.
        axis: AxisKind,
    },
    /// A position variant does not match the variant of the CRS (or target type).
    #[error("expected {expected:?} position, got {actual:?}")]
    VariantMismatch {
        /// Variant required by the CRS.
        expected: PositionKind,
        /// Variant that was given.
        actual: PositionKind,
    },
    /// An axis of this kind is already present in the CRS.
    #[error("coordinate reference system already has {0:?} axis")]
    AxisAlreadyPresent(AxisKind),
    /// Axes given to a CRS constructor do not match the position variant of the CRS.
    #[error("axes {actual:?} do not match {kind:?} layout")]
    AxisLayoutMismatch {
        /// Variant of the CRS.
        kind: PositionKind,
        /// Axis kinds that were given.
        actual: Vec<AxisKind>,
    },
    /// Position of an empty geometry was requested.
    #[error("geometry is empty")]
    EmptyGeometryAccess,
    /// The operation is not supported for this geometry.
    #[error("operation is not supported: {0}")]
    UnsupportedOperation(&'static str),
    /// CRS registry has no entry for the EPSG code.
    #[error("unknown EPSG code: {0}")]
    UnknownEpsgCode(i32),
}
