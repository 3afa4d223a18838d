//! Positions: fixed-size ordinate tuples of one of four dimensional variants.
//!
//! Each variant is its own type ([`P2d`], [`P3d`], [`P2dm`], [`P3dm`]) implementing the sealed [`Position`] trait.
//! Generic containers ([`Crs`](crate::crs::Crs), [`Point`](crate::point::Point)) are parameterized over the variant,
//! so a 2d position can never be used where a 3dm one is required.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::axis::AxisKind;
use crate::error::GeomError;

/// Dimensional variant of a position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PositionKind {
    /// X and Y.
    Planar,
    /// X, Y and altitude.
    PlanarZ,
    /// X, Y and measure.
    PlanarM,
    /// X, Y, altitude and measure.
    PlanarZM,
}

impl PositionKind {
    /// Number of ordinates of the variant.
    pub const fn coordinate_dimension(&self) -> usize {
        match self {
            PositionKind::Planar => 2,
            PositionKind::PlanarZ | PositionKind::PlanarM => 3,
            PositionKind::PlanarZM => 4,
        }
    }

    /// Whether the variant has an altitude ordinate.
    pub const fn has_z(&self) -> bool {
        matches!(self, PositionKind::PlanarZ | PositionKind::PlanarZM)
    }

    /// Whether the variant has a measure ordinate.
    pub const fn has_m(&self) -> bool {
        matches!(self, PositionKind::PlanarM | PositionKind::PlanarZM)
    }

    /// Variant with an altitude ordinate added. Returns `self` if altitude is already present.
    pub const fn with_z(&self) -> PositionKind {
        match self {
            PositionKind::Planar | PositionKind::PlanarZ => PositionKind::PlanarZ,
            PositionKind::PlanarM | PositionKind::PlanarZM => PositionKind::PlanarZM,
        }
    }

    /// Variant with a measure ordinate added. Returns `self` if measure is already present.
    pub const fn with_m(&self) -> PositionKind {
        match self {
            PositionKind::Planar | PositionKind::PlanarM => PositionKind::PlanarM,
            PositionKind::PlanarZ | PositionKind::PlanarZM => PositionKind::PlanarZM,
        }
    }

    /// Axis kinds in ordinate order: X, Y, then altitude and measure if present.
    pub const fn axis_kinds(&self) -> &'static [AxisKind] {
        match self {
            PositionKind::Planar => &[AxisKind::X, AxisKind::Y],
            PositionKind::PlanarZ => &[AxisKind::X, AxisKind::Y, AxisKind::Altitude],
            PositionKind::PlanarM => &[AxisKind::X, AxisKind::Y, AxisKind::Measure],
            PositionKind::PlanarZM => &[
                AxisKind::X,
                AxisKind::Y,
                AxisKind::Altitude,
                AxisKind::Measure,
            ],
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::P2d {}
    impl Sealed for super::P3d {}
    impl Sealed for super::P2dm {}
    impl Sealed for super::P3dm {}
}

/// Common interface of the four position variants.
///
/// Positions are plain values: they have no identity and are compared by ordinate equality (IEEE-754, no tolerance).
/// The trait is sealed, the set of variants is closed.
pub trait Position:
    private::Sealed + Debug + Copy + PartialEq + Hash + Send + Sync + 'static
{
    /// Dimensional variant of the type.
    const KIND: PositionKind;

    /// Variant obtained by adding an altitude ordinate (`Self` if already present).
    type WithZ: Position;
    /// Variant obtained by adding a measure ordinate (`Self` if already present).
    type WithM: Position;

    /// Creates a position from a slice of ordinates in axis order.
    ///
    /// Fails with [`GeomError::InvalidOrdinateCount`] if the slice length differs from the coordinate dimension of
    /// the variant.
    fn from_ordinates(ordinates: &[f64]) -> Result<Self, GeomError>;

    /// All ordinates in axis order.
    fn ordinates(&self) -> &[f64];

    /// Ordinate at the given index, if the variant has one.
    fn ordinate(&self, index: usize) -> Option<f64> {
        self.ordinates().get(index).copied()
    }

    /// X ordinate.
    fn x(&self) -> f64 {
        self.ordinates()[0]
    }

    /// Y ordinate.
    fn y(&self) -> f64 {
        self.ordinates()[1]
    }

    /// Altitude ordinate, or [`GeomError::UnsupportedAxis`] for variants without one.
    fn altitude(&self) -> Result<f64, GeomError> {
        if Self::KIND.has_z() {
            Ok(self.ordinates()[2])
        } else {
            Err(GeomError::UnsupportedAxis {
                kind: Self::KIND,
                axis: AxisKind::Altitude,
            })
        }
    }

    /// Measure ordinate, or [`GeomError::UnsupportedAxis`] for variants without one.
    fn m(&self) -> Result<f64, GeomError> {
        if Self::KIND.has_m() {
            Ok(self.ordinates()[Self::KIND.coordinate_dimension() - 1])
        } else {
            Err(GeomError::UnsupportedAxis {
                kind: Self::KIND,
                axis: AxisKind::Measure,
            })
        }
    }

    /// Dimensional variant of the position.
    fn kind(&self) -> PositionKind {
        Self::KIND
    }

    /// Number of ordinates.
    fn coordinate_dimension(&self) -> usize {
        Self::KIND.coordinate_dimension()
    }
}

fn ordinates_array<const N: usize>(
    kind: PositionKind,
    ordinates: &[f64],
) -> Result<[f64; N], GeomError> {
    ordinates
        .try_into()
        .map_err(|_| GeomError::InvalidOrdinateCount {
            kind,
            expected: N,
            actual: ordinates.len(),
        })
}

// `0.0 == -0.0`, so both must produce the same hash.
fn hash_ordinates<H: Hasher>(kind: PositionKind, ordinates: &[f64], state: &mut H) {
    kind.hash(state);
    for v in ordinates {
        let bits = if *v == 0.0 { 0 } else { v.to_bits() };
        bits.hash(state);
    }
}

/// Planar position (x, y).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct P2d {
    coords: [f64; 2],
}

impl P2d {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { coords: [x, y] }
    }
}

impl Position for P2d {
    const KIND: PositionKind = PositionKind::Planar;
    type WithZ = P3d;
    type WithM = P2dm;

    fn from_ordinates(ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(Self {
            coords: ordinates_array(Self::KIND, ordinates)?,
        })
    }

    fn ordinates(&self) -> &[f64] {
        &self.coords
    }
}

/// Planar position with altitude (x, y, z).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct P3d {
    coords: [f64; 3],
}

impl P3d {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { coords: [x, y, z] }
    }

    /// Altitude ordinate.
    pub fn z(&self) -> f64 {
        self.coords[2]
    }
}

impl Position for P3d {
    const KIND: PositionKind = PositionKind::PlanarZ;
    type WithZ = P3d;
    type WithM = P3dm;

    fn from_ordinates(ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(Self {
            coords: ordinates_array(Self::KIND, ordinates)?,
        })
    }

    fn ordinates(&self) -> &[f64] {
        &self.coords
    }
}

/// Planar position with measure (x, y, m).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct P2dm {
    coords: [f64; 3],
}

impl P2dm {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64, m: f64) -> Self {
        Self { coords: [x, y, m] }
    }

    /// Measure ordinate.
    pub fn measure(&self) -> f64 {
        self.coords[2]
    }
}

impl Position for P2dm {
    const KIND: PositionKind = PositionKind::PlanarM;
    type WithZ = P3dm;
    type WithM = P2dm;

    fn from_ordinates(ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(Self {
            coords: ordinates_array(Self::KIND, ordinates)?,
        })
    }

    fn ordinates(&self) -> &[f64] {
        &self.coords
    }
}

/// Planar position with altitude and measure (x, y, z, m).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct P3dm {
    coords: [f64; 4],
}

impl P3dm {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            coords: [x, y, z, m],
        }
    }

    /// Altitude ordinate.
    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Measure ordinate.
    pub fn measure(&self) -> f64 {
        self.coords[3]
    }
}

impl Position for P3dm {
    const KIND: PositionKind = PositionKind::PlanarZM;
    type WithZ = P3dm;
    type WithM = P3dm;

    fn from_ordinates(ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(Self {
            coords: ordinates_array(Self::KIND, ordinates)?,
        })
    }

    fn ordinates(&self) -> &[f64] {
        &self.coords
    }
}

macro_rules! impl_hash_and_any {
    ($($ty:ident),*) => {
        $(
            impl Hash for $ty {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    hash_ordinates(Self::KIND, &self.coords, state);
                }
            }

            impl From<$ty> for AnyPosition {
                fn from(value: $ty) -> Self {
                    AnyPosition::$ty(value)
                }
            }

            impl TryFrom<AnyPosition> for $ty {
                type Error = GeomError;

                fn try_from(value: AnyPosition) -> Result<Self, Self::Error> {
                    match value {
                        AnyPosition::$ty(v) => Ok(v),
                        other => Err(GeomError::VariantMismatch {
                            expected: $ty::KIND,
                            actual: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_hash_and_any!(P2d, P3d, P2dm, P3dm);

/// Position whose variant is only known at runtime, e.g. when read from an external source.
///
/// Converting it into a concrete variant (or a [`Point`](crate::point::Point)) is the single place where a
/// [`GeomError::VariantMismatch`] can occur.
#[derive(Debug, Copy, Clone, PartialEq, Hash)]
pub enum AnyPosition {
    /// Planar position.
    P2d(P2d),
    /// Planar position with altitude.
    P3d(P3d),
    /// Planar position with measure.
    P2dm(P2dm),
    /// Planar position with altitude and measure.
    P3dm(P3dm),
}

impl AnyPosition {
    /// Creates a position of the given variant.
    pub fn from_ordinates(kind: PositionKind, ordinates: &[f64]) -> Result<Self, GeomError> {
        Ok(match kind {
            PositionKind::Planar => P2d::from_ordinates(ordinates)?.into(),
            PositionKind::PlanarZ => P3d::from_ordinates(ordinates)?.into(),
            PositionKind::PlanarM => P2dm::from_ordinates(ordinates)?.into(),
            PositionKind::PlanarZM => P3dm::from_ordinates(ordinates)?.into(),
        })
    }

    /// Variant of the position.
    pub fn kind(&self) -> PositionKind {
        match self {
            AnyPosition::P2d(_) => P2d::KIND,
            AnyPosition::P3d(_) => P3d::KIND,
            AnyPosition::P2dm(_) => P2dm::KIND,
            AnyPosition::P3dm(_) => P3dm::KIND,
        }
    }

    /// All ordinates in axis order.
    pub fn ordinates(&self) -> &[f64] {
        match self {
            AnyPosition::P2d(p) => p.ordinates(),
            AnyPosition::P3d(p) => p.ordinates(),
            AnyPosition::P2dm(p) => p.ordinates(),
            AnyPosition::P3dm(p) => p.ordinates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use assert_matches::assert_matches;

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ordinates_round_trip() {
        let tuples: [&[f64]; 4] = [&[1.0, 2.0], &[1.0, 2.0, -3.0], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]];
        let kinds = [
            PositionKind::Planar,
            PositionKind::PlanarZ,
            PositionKind::PlanarM,
            PositionKind::PlanarZM,
        ];

        for (kind, ordinates) in kinds.into_iter().zip(tuples) {
            let position = AnyPosition::from_ordinates(kind, ordinates).unwrap();
            assert_eq!(position.kind(), kind);
            assert_eq!(position.ordinates(), ordinates);
            assert_eq!(kind.coordinate_dimension(), ordinates.len());
        }

        let p = P3dm::new(1.0, 2.0, 3.0, 4.0);
        for i in 0..4 {
            assert_eq!(p.ordinate(i), Some(i as f64 + 1.0));
        }
        assert_eq!(p.ordinate(4), None);
    }

    #[test]
    fn accessors() {
        let p = P2dm::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.m(), Ok(3.0));
        assert_eq!(p.measure(), 3.0);

        let p = P3dm::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.altitude(), Ok(3.0));
        assert_eq!(p.m(), Ok(4.0));

        assert_eq!(P3d::new(1.0, 2.0, -3.0).altitude(), Ok(-3.0));
    }

    #[test]
    fn missing_axis() {
        assert_matches!(
            P2d::new(1.0, 2.0).altitude(),
            Err(GeomError::UnsupportedAxis {
                kind: PositionKind::Planar,
                axis: AxisKind::Altitude
            })
        );
        assert_matches!(
            P3d::new(1.0, 2.0, 3.0).m(),
            Err(GeomError::UnsupportedAxis {
                axis: AxisKind::Measure,
                ..
            })
        );
        assert_matches!(
            P2dm::new(1.0, 2.0, 3.0).altitude(),
            Err(GeomError::UnsupportedAxis { .. })
        );
    }

    #[test]
    fn wrong_ordinate_count() {
        assert_matches!(
            P2d::from_ordinates(&[1.0, 2.0, 3.0]),
            Err(GeomError::InvalidOrdinateCount {
                kind: PositionKind::Planar,
                expected: 2,
                actual: 3
            })
        );
        assert_matches!(
            P3dm::from_ordinates(&[1.0]),
            Err(GeomError::InvalidOrdinateCount { expected: 4, .. })
        );
        assert_matches!(
            AnyPosition::from_ordinates(PositionKind::PlanarM, &[]),
            Err(GeomError::InvalidOrdinateCount { actual: 0, .. })
        );
    }

    #[test]
    fn equality_and_hash() {
        assert_eq!(P2d::new(1.0, 2.0), P2d::new(1.0, 2.0));
        assert_ne!(P2d::new(1.0, 2.0), P2d::new(1.0, 2.5));
        assert_eq!(hash_of(&P3d::new(1.0, 2.0, 3.0)), hash_of(&P3d::new(1.0, 2.0, 3.0)));

        assert_eq!(P2d::new(0.0, 1.0), P2d::new(-0.0, 1.0));
        assert_eq!(hash_of(&P2d::new(0.0, 1.0)), hash_of(&P2d::new(-0.0, 1.0)));

        assert_ne!(P2d::new(f64::NAN, 1.0), P2d::new(f64::NAN, 1.0));
    }

    #[test]
    fn variants_are_never_equal() {
        let p3d = AnyPosition::from(P3d::new(1.0, 2.0, 3.0));
        let p2dm = AnyPosition::from(P2dm::new(1.0, 2.0, 3.0));
        assert_eq!(p3d.ordinates(), p2dm.ordinates());
        assert_ne!(p3d, p2dm);
        assert_ne!(hash_of(&p3d), hash_of(&p2dm));
    }

    #[test]
    fn any_position_conversion() {
        let any = AnyPosition::from(P2dm::new(1.0, 2.0, 3.0));
        assert_eq!(P2dm::try_from(any), Ok(P2dm::new(1.0, 2.0, 3.0)));
        assert_matches!(
            P3d::try_from(any),
            Err(GeomError::VariantMismatch {
                expected: PositionKind::PlanarZ,
                actual: PositionKind::PlanarM
            })
        );
    }

    #[test]
    fn kind_upgrades() {
        assert_eq!(PositionKind::Planar.with_z(), PositionKind::PlanarZ);
        assert_eq!(PositionKind::PlanarM.with_z(), PositionKind::PlanarZM);
        assert_eq!(PositionKind::PlanarZ.with_m(), PositionKind::PlanarZM);
        assert_eq!(<P2d as Position>::WithM::KIND, PositionKind::PlanarM);
        assert_eq!(<P3d as Position>::WithM::KIND, PositionKind::PlanarZM);
        assert_eq!(
            PositionKind::PlanarZM.axis_kinds(),
            &[AxisKind::X, AxisKind::Y, AxisKind::Altitude, AxisKind::Measure]
        );
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&P3d::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");
        let p: P2d = serde_json::from_str("[4.0,5.0]").unwrap();
        assert_eq!(p, P2d::new(4.0, 5.0));
    }
}
