//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Type tag of a geometry, as defined by the OGC Simple Features model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[non_exhaustive]
pub enum GeometryType {
    /// Single position.
    Point,
    /// Sequence of positions connected by straight segments.
    LineString,
    /// Area bounded by rings.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Set of arbitrary geometries.
    GeometryCollection,
}

impl GeometryType {
    /// OGC name of the type, as used in WKT.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
