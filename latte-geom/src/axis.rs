//! See documentation for [`Axis`].

use serde::{Deserialize, Serialize};

use crate::unit::LengthUnit;

/// Role of a coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AxisKind {
    /// Horizontal X axis (easting).
    X,
    /// Horizontal Y axis (northing).
    Y,
    /// Vertical axis.
    Altitude,
    /// Non-spatial measure axis, e.g. a linear referencing value.
    Measure,
}

/// One axis of a [`Crs`](crate::crs::Crs).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Axis {
    kind: AxisKind,
    unit: LengthUnit,
}

impl Axis {
    /// Creates a new axis.
    pub const fn new(kind: AxisKind, unit: LengthUnit) -> Self {
        Self { kind, unit }
    }

    /// Horizontal X axis.
    pub const fn x(unit: LengthUnit) -> Self {
        Self::new(AxisKind::X, unit)
    }

    /// Horizontal Y axis.
    pub const fn y(unit: LengthUnit) -> Self {
        Self::new(AxisKind::Y, unit)
    }

    /// Vertical axis.
    pub const fn altitude(unit: LengthUnit) -> Self {
        Self::new(AxisKind::Altitude, unit)
    }

    /// Measure axis.
    pub const fn measure(unit: LengthUnit) -> Self {
        Self::new(AxisKind::Measure, unit)
    }

    /// Role of the axis.
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Unit of the axis.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}
