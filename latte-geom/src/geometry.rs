use crate::crs::Crs;
use crate::error::GeomError;
use crate::geometry_type::GeometryType;
use crate::position::Position;

/// Capabilities shared by all geometries.
///
/// Every geometry is bound to a [`Crs`] whose position variant is the variant of all positions the geometry stores.
pub trait Geometry {
    /// Position variant of the geometry.
    type Position: Position;
    /// Type of the geometry returned by [`Geometry::boundary`].
    type Boundary;

    /// Coordinate reference system of the geometry.
    fn crs(&self) -> &Crs<Self::Position>;

    /// Type tag of the geometry.
    fn geometry_type(&self) -> GeometryType;

    /// Topological dimension: 0 for points, 1 for curves, 2 for surfaces.
    fn dimension(&self) -> usize;

    /// Whether the geometry stores no positions.
    fn is_empty(&self) -> bool;

    /// Whether the geometry has no anomalous points such as self-intersections.
    fn is_simple(&self) -> bool;

    /// Topological boundary of the geometry.
    fn boundary(&self) -> Result<Self::Boundary, GeomError>;

    /// Number of ordinates of each position. Determined by the CRS, so it is defined for empty geometries as well.
    fn coordinate_dimension(&self) -> usize {
        self.crs().coordinate_dimension()
    }

    /// SRID of the CRS.
    fn srid(&self) -> i32 {
        self.crs().srid()
    }
}
