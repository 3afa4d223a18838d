//! Conversions between positions and points of this crate and types of other geometry crates.

#[cfg(feature = "geo-types")]
mod geo_impls;
mod nalgebra_impls;
