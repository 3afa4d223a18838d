//! Pluggable equality for positions and points.
//!
//! [`Point`]'s own `PartialEq` is exact and CRS-sensitive. The types in this module let callers compare points with a
//! different rule (e.g. with a tolerance, or ignoring altitude and measure) without changing that contract.

use approx::AbsDiffEq;

use crate::geometry::Geometry;
use crate::point::Point;
use crate::position::{P2d, Position};

/// Rule deciding whether two positions of the same variant are equal.
pub trait PositionEquality {
    /// Returns true if the positions are equal under this rule.
    fn equals<P: Position>(&self, a: &P, b: &P) -> bool;
}

/// Exact IEEE-754 ordinate equality.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ExactPositionEquality;

impl PositionEquality for ExactPositionEquality {
    fn equals<P: Position>(&self, a: &P, b: &P) -> bool {
        a.ordinates() == b.ordinates()
    }
}

/// Ordinates are equal if they differ by no more than `epsilon`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ApproxPositionEquality {
    epsilon: f64,
}

impl ApproxPositionEquality {
    /// Creates a new rule with the given absolute tolerance.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Absolute tolerance of the rule.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for ApproxPositionEquality {
    fn default() -> Self {
        Self::new(f64::default_epsilon())
    }
}

impl PositionEquality for ApproxPositionEquality {
    fn equals<P: Position>(&self, a: &P, b: &P) -> bool {
        a.ordinates().abs_diff_eq(b.ordinates(), self.epsilon)
    }
}

/// Compares only X and Y, using the inner rule. Altitude and measure are ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PlanarPositionEquality<E = ExactPositionEquality> {
    inner: E,
}

impl<E: PositionEquality> PlanarPositionEquality<E> {
    /// Creates a new rule.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: PositionEquality> PositionEquality for PlanarPositionEquality<E> {
    fn equals<P: Position>(&self, a: &P, b: &P) -> bool {
        self.inner
            .equals(&P2d::new(a.x(), a.y()), &P2d::new(b.x(), b.y()))
    }
}

/// Equality of two geometries of the same position variant.
pub trait GeometryEquality {
    /// Returns true if the points are equal under this rule.
    fn equals<P: Position>(&self, a: &Point<P>, b: &Point<P>) -> bool;
}

/// Compares points by applying a [`PositionEquality`] rule to their positions.
///
/// Empty points are equal to each other and never equal to a populated point. Unless built with
/// [`GeometryPointEquality::ignoring_crs`], points with different CRSs are never equal.
///
/// ```
/// use latte_geom::crs::Crs;
/// use latte_geom::equality::{ApproxPositionEquality, GeometryEquality, GeometryPointEquality};
/// use latte_geom::{Point, P2d};
///
/// let crs = Crs::undefined();
/// let eq = GeometryPointEquality::new(ApproxPositionEquality::new(1e-6));
///
/// assert!(eq.equals(&Point::new(&crs, P2d::new(1.0, 2.0)), &Point::new(&crs, P2d::new(1.0, 2.0000001))));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryPointEquality<E = ExactPositionEquality> {
    rule: E,
    check_crs: bool,
}

impl<E: PositionEquality> GeometryPointEquality<E> {
    /// Creates a CRS-sensitive point equality with the given position rule.
    pub fn new(rule: E) -> Self {
        Self {
            rule,
            check_crs: true,
        }
    }

    /// Creates a point equality that does not compare CRSs.
    pub fn ignoring_crs(rule: E) -> Self {
        Self {
            rule,
            check_crs: false,
        }
    }

    /// Position rule used by this equality.
    pub fn rule(&self) -> &E {
        &self.rule
    }
}

impl<E: PositionEquality + Default> Default for GeometryPointEquality<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: PositionEquality> GeometryEquality for GeometryPointEquality<E> {
    fn equals<P: Position>(&self, a: &Point<P>, b: &Point<P>) -> bool {
        if self.check_crs && a.crs() != b.crs() {
            return false;
        }

        match (a.as_position(), b.as_position()) {
            (None, None) => true,
            (Some(a), Some(b)) => self.rule.equals(a, b),
            _ => false,
        }
    }
}
