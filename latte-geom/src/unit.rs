//! Units of measure of coordinate axes.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Unit of length used by a coordinate axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[non_exhaustive]
pub enum LengthUnit {
    /// SI meter.
    #[default]
    Meter,
    /// 1000 meters.
    Kilometer,
    /// International foot.
    Foot,
    /// US survey foot.
    UsSurveyFoot,
}

impl LengthUnit {
    /// Length of one unit in meters.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Foot => 0.3048,
            LengthUnit::UsSurveyFoot => 1200.0 / 3937.0,
        }
    }

    /// Name of the unit as used in CRS definitions.
    pub fn name(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "metre",
            LengthUnit::Kilometer => "kilometre",
            LengthUnit::Foot => "foot",
            LengthUnit::UsSurveyFoot => "US survey foot",
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
