//! See documentation for [`Point`].

use std::hash::{Hash, Hasher};

use crate::crs::Crs;
use crate::error::GeomError;
use crate::geometry::Geometry;
use crate::geometry_type::GeometryType;
use crate::position::{AnyPosition, Position};

const EMPTY_POINT_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

/// Point geometry: a CRS and at most one position of the CRS's variant.
///
/// A point is either empty or populated and stays that way, there are no mutators. Since the CRS and the position
/// share the variant parameter `P`, a point cannot mix a 3d position with a 2d CRS.
///
/// Equality is exact and CRS-sensitive: two points are equal if their CRSs are structurally equal and they are both
/// empty or both hold equal positions. Use [`GeometryPointEquality`](crate::equality::GeometryPointEquality) for other
/// notions of equality.
///
/// ```
/// use latte_geom::crs::Crs;
/// use latte_geom::{Geometry, Point, P2d};
///
/// let crs = Crs::undefined();
/// let point = Point::new(&crs, P2d::new(1.0, 2.0));
///
/// assert_eq!(point.coordinate_dimension(), 2);
/// assert_ne!(point, Point::empty(&crs));
/// assert_eq!(Point::empty(&crs), Point::empty(&crs));
/// ```
#[derive(Debug, Clone)]
pub struct Point<P: Position> {
    crs: Crs<P>,
    position: Option<P>,
}

impl<P: Position> Point<P> {
    /// Creates an empty point.
    pub fn empty(crs: &Crs<P>) -> Self {
        Self {
            crs: crs.clone(),
            position: None,
        }
    }

    /// Creates a point at the given position.
    pub fn new(crs: &Crs<P>, position: P) -> Self {
        Self {
            crs: crs.clone(),
            position: Some(position),
        }
    }

    /// Creates a point from ordinates in the axis order of `P`.
    ///
    /// Fails with [`GeomError::InvalidOrdinateCount`] if the number of ordinates differs from the CRS's coordinate
    /// dimension.
    pub fn from_ordinates(crs: &Crs<P>, ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(Self::new(crs, P::from_ordinates(ordinates)?))
    }

    /// Creates a point from a position whose variant is only known at runtime.
    ///
    /// Fails with [`GeomError::VariantMismatch`] if the variant of the position is not the variant of the CRS.
    pub fn try_from_any(crs: &Crs<P>, position: AnyPosition) -> Result<Self, GeomError>
    where
        P: TryFrom<AnyPosition, Error = GeomError>,
    {
        Ok(Self::new(crs, P::try_from(position)?))
    }

    /// Position of the point, or [`GeomError::EmptyGeometryAccess`] if the point is empty.
    pub fn position(&self) -> Result<&P, GeomError> {
        self.position.as_ref().ok_or(GeomError::EmptyGeometryAccess)
    }

    /// Position of the point, if any.
    pub fn as_position(&self) -> Option<&P> {
        self.position.as_ref()
    }
}

impl<P: Position> Geometry for Point<P> {
    type Position = P;
    type Boundary = Point<P>;

    fn crs(&self) -> &Crs<P> {
        &self.crs
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn dimension(&self) -> usize {
        0
    }

    fn is_empty(&self) -> bool {
        self.position.is_none()
    }

    fn is_simple(&self) -> bool {
        true
    }

    fn boundary(&self) -> Result<Self::Boundary, GeomError> {
        Err(GeomError::UnsupportedOperation("boundary of a point"))
    }
}

impl<P: Position, Q: Position> PartialEq<Point<Q>> for Point<P> {
    fn eq(&self, other: &Point<Q>) -> bool {
        if self.crs != other.crs {
            return false;
        }

        match (&self.position, &other.position) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ordinates() == b.ordinates(),
            _ => false,
        }
    }
}

// Reflexive unless an ordinate is NaN.
impl<P: Position> Eq for Point<P> {}

impl<P: Position> Hash for Point<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crs.hash(state);
        match &self.position {
            Some(position) => position.hash(state),
            None => EMPTY_POINT_HASH.hash(state),
        }
    }
}
