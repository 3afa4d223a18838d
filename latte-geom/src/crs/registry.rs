//! Lookup of planar coordinate reference systems by EPSG code.

use std::sync::LazyLock;

use ahash::{HashMap, HashMapExt};

use crate::crs::{Crs, CrsId, UNDEFINED_SRID};
use crate::error::GeomError;
use crate::position::P2d;
use crate::unit::LengthUnit;

static DEFAULT_REGISTRY: LazyLock<CrsRegistry> = LazyLock::new(CrsRegistry::with_well_known);

const WELL_KNOWN: [(i32, &str); 4] = [
    (3857, "WGS 84 / Pseudo-Mercator"),
    (31370, "Belge 1972 / Belgian Lambert 72"),
    (28992, "Amersfoort / RD New"),
    (2154, "RGF93 / Lambert-93"),
];

/// Set of known planar CRSs keyed by SRID.
///
/// A registry is filled once and then shared read-only. The process-wide default registry is available through
/// [`crs_for_epsg`] and [`undefined_projected_crs`].
#[derive(Debug, Clone)]
pub struct CrsRegistry {
    entries: HashMap<i32, Crs<P2d>>,
    undefined: Crs<P2d>,
}

impl CrsRegistry {
    /// Creates a registry that knows only the undefined CRS.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            undefined: Crs::undefined(),
        }
    }

    /// Creates a registry with a small set of metric projected CRSs.
    pub fn with_well_known() -> Self {
        let mut registry = Self::new();
        for (srid, name) in WELL_KNOWN {
            registry.register(Crs::projected(CrsId::new(name, srid), LengthUnit::Meter));
        }

        registry
    }

    /// Adds a CRS to the registry, returning the one previously registered with the same SRID.
    ///
    /// The undefined SRID is reserved and such CRSs are not stored.
    pub fn register(&mut self, crs: Crs<P2d>) -> Option<Crs<P2d>> {
        if crs.srid() == UNDEFINED_SRID {
            log::debug!("Ignoring registration of undefined CRS {}", crs.id());
            return None;
        }

        log::debug!("Registering CRS {}", crs.id());
        self.entries.insert(crs.srid(), crs)
    }

    /// Returns the CRS registered for the EPSG code.
    pub fn crs_for_epsg(&self, code: i32) -> Result<Crs<P2d>, GeomError> {
        log::trace!("Looking up CRS for EPSG:{code}");
        self.entries
            .get(&code)
            .cloned()
            .ok_or(GeomError::UnknownEpsgCode(code))
    }

    /// Returns the undefined projected CRS.
    pub fn undefined_projected_crs(&self) -> Crs<P2d> {
        self.undefined.clone()
    }

    /// Number of registered CRSs, not counting the undefined one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no CRS is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CrsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the CRS registered for the EPSG code in the default registry.
pub fn crs_for_epsg(code: i32) -> Result<Crs<P2d>, GeomError> {
    DEFAULT_REGISTRY.crs_for_epsg(code)
}

/// Returns the undefined projected CRS of the default registry.
pub fn undefined_projected_crs() -> Crs<P2d> {
    DEFAULT_REGISTRY.undefined_projected_crs()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_registry() {
        let l72 = crs_for_epsg(31370).unwrap();
        assert_eq!(l72.srid(), 31370);
        assert_eq!(l72.name(), "Belge 1972 / Belgian Lambert 72");
        assert_eq!(l72, crs_for_epsg(31370).unwrap());

        let undefined = undefined_projected_crs();
        assert_eq!(undefined.srid(), -1);
        assert_eq!(undefined, Crs::undefined());
        assert_ne!(undefined, l72);
    }

    #[test]
    fn unknown_code() {
        assert_matches!(crs_for_epsg(999_999), Err(GeomError::UnknownEpsgCode(999_999)));
        assert_matches!(CrsRegistry::new().crs_for_epsg(3857), Err(GeomError::UnknownEpsgCode(3857)));
    }

    #[test]
    fn register() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut registry = CrsRegistry::new();
        assert!(registry.is_empty());

        let local = Crs::projected(CrsId::new("local grid", 900_001), LengthUnit::Foot);
        assert!(registry.register(local.clone()).is_none());
        assert_eq!(registry.crs_for_epsg(900_001), Ok(local.clone()));

        let replacement = Crs::projected(CrsId::new("local grid", 900_001), LengthUnit::Meter);
        assert_eq!(registry.register(replacement), Some(local));
        assert_eq!(registry.len(), 1);

        assert!(registry.register(Crs::undefined()).is_none());
        assert_eq!(registry.len(), 1);
    }
}
