use geo_types::{coord, point, Coord};

use crate::error::GeomError;
use crate::point::Point;
use crate::position::{P2d, Position};

impl From<P2d> for Coord<f64> {
    fn from(value: P2d) -> Self {
        coord!(x: value.x(), y: value.y())
    }
}

impl From<Coord<f64>> for P2d {
    fn from(value: Coord<f64>) -> Self {
        P2d::new(value.x, value.y)
    }
}

impl From<P2d> for geo_types::Point<f64> {
    fn from(value: P2d) -> Self {
        point!(x: value.x(), y: value.y())
    }
}

impl From<geo_types::Point<f64>> for P2d {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

/// `geo_types::Point` has no empty state and no CRS. Empty points fail with [`GeomError::EmptyGeometryAccess`].
impl TryFrom<&Point<P2d>> for geo_types::Point<f64> {
    type Error = GeomError;

    fn try_from(value: &Point<P2d>) -> Result<Self, Self::Error> {
        Ok((*value.position()?).into())
    }
}
