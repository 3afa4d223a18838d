//! Geometric data model: positions typed by their dimensionality, coordinate reference systems whose axes always
//! agree with the positions they accept, and the [`Point`] geometry.
//!
//! * [`position`] - the four position variants ([`P2d`], [`P3d`], [`P2dm`], [`P3dm`]).
//! * [`crs`] - [`Crs`](crs::Crs) and the EPSG [registry](crs::registry).
//! * [`point`] - the [`Point`] geometry implementing [`Geometry`].
//! * [`equality`] - pluggable equality strategies for points.

pub mod axis;
pub mod crs;
pub mod equality;
pub mod error;
mod geometry;
pub mod geometry_type;
mod interop;
pub mod point;
pub mod position;
pub mod unit;

pub use error::GeomError;
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use point::Point;
pub use position::{AnyPosition, P2d, P2dm, P3d, P3dm, Position, PositionKind};
