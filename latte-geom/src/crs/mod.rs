//! Coordinate reference systems: an identity plus an ordered list of axes, typed by the position variant they accept.

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisKind};
use crate::error::GeomError;
use crate::position::{P2d, Position, PositionKind};
use crate::unit::LengthUnit;

pub mod registry;

/// SRID of a CRS that is not registered in any authority.
pub const UNDEFINED_SRID: i32 = -1;

/// Identity of a coordinate reference system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CrsId {
    name: String,
    srid: i32,
}

impl CrsId {
    /// Creates a new identity.
    pub fn new(name: impl Into<String>, srid: i32) -> Self {
        Self {
            name: name.into(),
            srid,
        }
    }

    /// Identity of the undefined CRS.
    pub fn undefined() -> Self {
        Self::new("undefined", UNDEFINED_SRID)
    }

    /// Human readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered numeric identifier, or [`UNDEFINED_SRID`].
    pub fn srid(&self) -> i32 {
        self.srid
    }
}

impl Display for CrsId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.srid == UNDEFINED_SRID {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (EPSG:{})", self.name, self.srid)
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct CrsRecord {
    id: CrsId,
    axes: Vec<Axis>,
}

/// Coordinate reference system accepting positions of type `P`.
///
/// The value is a cheap handle to an immutable shared record, so it can be cloned into any number of geometries and
/// sent across threads. Operations that add an axis return a new CRS and never touch the original.
///
/// Axis kinds always match the variant `P`: a `Crs<P3d>` has exactly the X, Y and altitude axes. Axes are listed in
/// the order they were added.
///
/// ```
/// use latte_geom::crs::Crs;
/// use latte_geom::unit::LengthUnit;
///
/// let crs = Crs::undefined();
/// let crs_zm = crs
///     .add_vertical_axis(LengthUnit::Meter)
///     .and_then(|crs| crs.add_measure_axis(LengthUnit::Meter))
///     .unwrap();
///
/// assert_eq!(crs_zm.coordinate_dimension(), 4);
/// assert_eq!(crs.coordinate_dimension(), 2);
/// ```
pub struct Crs<P> {
    record: Arc<CrsRecord>,
    position: PhantomData<fn() -> P>,
}

impl<P: Position> Crs<P> {
    /// Creates a new CRS.
    ///
    /// Fails with [`GeomError::AxisLayoutMismatch`] unless every axis kind of `P` is present exactly once.
    pub fn new(id: CrsId, axes: Vec<Axis>) -> Result<Self, GeomError> {
        let required = P::KIND.axis_kinds();
        let matches = axes.len() == required.len()
            && required
                .iter()
                .all(|kind| axes.iter().filter(|axis| axis.kind() == *kind).count() == 1);

        if !matches {
            return Err(GeomError::AxisLayoutMismatch {
                kind: P::KIND,
                actual: axes.iter().map(Axis::kind).collect(),
            });
        }

        Ok(Self::from_record(CrsRecord { id, axes }))
    }

    fn from_record(record: CrsRecord) -> Self {
        Self {
            record: Arc::new(record),
            position: PhantomData,
        }
    }

    /// Identity of the CRS.
    pub fn id(&self) -> &CrsId {
        &self.record.id
    }

    /// Human readable name.
    pub fn name(&self) -> &str {
        self.record.id.name()
    }

    /// Registered numeric identifier, or `-1` for an undefined CRS.
    pub fn srid(&self) -> i32 {
        self.record.id.srid()
    }

    /// Whether the CRS is not registered in any authority.
    pub fn is_undefined(&self) -> bool {
        self.srid() == UNDEFINED_SRID
    }

    /// Axes in the order they were added.
    pub fn axes(&self) -> &[Axis] {
        &self.record.axes
    }

    /// Axis at the given index.
    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.record.axes.get(index)
    }

    /// Axis of the given kind.
    pub fn axis_of_kind(&self, kind: AxisKind) -> Option<&Axis> {
        self.record.axes.iter().find(|axis| axis.kind() == kind)
    }

    /// Position variant accepted by the CRS.
    pub fn kind(&self) -> PositionKind {
        P::KIND
    }

    /// Number of ordinates of positions in this CRS.
    pub fn coordinate_dimension(&self) -> usize {
        P::KIND.coordinate_dimension()
    }

    /// Returns a new CRS with a vertical axis appended.
    ///
    /// Fails with [`GeomError::AxisAlreadyPresent`] if the CRS already has an altitude axis.
    pub fn add_vertical_axis(&self, unit: LengthUnit) -> Result<Crs<P::WithZ>, GeomError> {
        if P::KIND.has_z() {
            return Err(GeomError::AxisAlreadyPresent(AxisKind::Altitude));
        }

        Ok(self.derive(Axis::altitude(unit)))
    }

    /// Returns a new CRS with a measure axis appended.
    ///
    /// Fails with [`GeomError::AxisAlreadyPresent`] if the CRS already has a measure axis.
    pub fn add_measure_axis(&self, unit: LengthUnit) -> Result<Crs<P::WithM>, GeomError> {
        if P::KIND.has_m() {
            return Err(GeomError::AxisAlreadyPresent(AxisKind::Measure));
        }

        Ok(self.derive(Axis::measure(unit)))
    }

    // Callers guarantee that `axis` turns the layout of `P` into the layout of `Q`.
    fn derive<Q: Position>(&self, axis: Axis) -> Crs<Q> {
        let mut axes = self.record.axes.clone();
        axes.push(axis);

        log::debug!(
            "Derived {:?} CRS from {} by adding {:?} axis in {}",
            Q::KIND,
            self.record.id,
            axis.kind(),
            axis.unit()
        );

        Crs::from_record(CrsRecord {
            id: self.record.id.clone(),
            axes,
        })
    }
}

impl Crs<P2d> {
    /// Creates a projected planar CRS with X and Y axes in the given unit.
    pub fn projected(id: CrsId, unit: LengthUnit) -> Self {
        Self::from_record(CrsRecord {
            id,
            axes: vec![Axis::x(unit), Axis::y(unit)],
        })
    }

    /// The undefined projected CRS (SRID `-1`, metric axes). Geometries without an explicit CRS use this one.
    pub fn undefined() -> Self {
        Self::projected(CrsId::undefined(), LengthUnit::Meter)
    }
}

impl<P> Clone for Crs<P> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            position: PhantomData,
        }
    }
}

impl<P: Position> Debug for Crs<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crs")
            .field("kind", &P::KIND)
            .field("id", &self.record.id)
            .field("axes", &self.record.axes)
            .finish()
    }
}

impl<P: Position, Q: Position> PartialEq<Crs<Q>> for Crs<P> {
    fn eq(&self, other: &Crs<Q>) -> bool {
        if P::KIND != Q::KIND {
            return false;
        }

        std::ptr::eq(Arc::as_ptr(&self.record), Arc::as_ptr(&other.record))
            || self.record == other.record
    }
}

impl<P: Position> Eq for Crs<P> {}

impl<P: Position> Hash for Crs<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.hash(state);
    }
}
