//! Feature Catalog and Taxonomy
//!
//! Mirrors the extraction engine's canonical feature definitions and
//! partitions them into named subsets for governed, reproducible runs.

mod catalog;
mod taxonomy;

pub use catalog::{FeatureCatalog, ParamSet, ParamValue};
pub use taxonomy::{distribution_features, simple_baseline, temporal_features, FeatureSet};
