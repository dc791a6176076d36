//! Long-Format Handoff to the Extraction Engine

use crate::dataset::SegmentedDataset;
use feature_catalog::{FeatureCatalog, FeatureSet};
use serde::{Deserialize, Serialize};

/// Long-format table with one (id, time, value) entry per matrix cell
///
/// `id` is the window's row index, `time` the column index inside the
/// fixed-width window. Entries are emitted column-major, the layout the
/// extraction engine ingests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongFormatTable {
    pub ids: Vec<usize>,
    pub times: Vec<usize>,
    pub values: Vec<f64>,
}

impl LongFormatTable {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SegmentedDataset {
    /// Flatten the window matrix into the extraction engine's long format
    pub fn to_long_format(&self) -> LongFormatTable {
        let n_cells = self.n_rows() * self.window_len();
        let mut table = LongFormatTable {
            ids: Vec::with_capacity(n_cells),
            times: Vec::with_capacity(n_cells),
            values: Vec::with_capacity(n_cells),
        };
        for time in 0..self.window_len() {
            for id in 0..self.n_rows() {
                table.ids.push(id);
                table.times.push(time);
                table.values.push(self.windows()[[id, time]]);
            }
        }
        table
    }
}

/// Everything the feature-extraction collaborator needs for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Long-format window data
    pub table: LongFormatTable,
    /// Catalog subset governing which features to compute
    pub features: FeatureCatalog,
    /// Parallelism hint forwarded to the engine
    pub n_jobs: usize,
}

impl ExtractionRequest {
    /// Bundle a dataset with a named feature set and a parallelism hint
    pub fn new(dataset: &SegmentedDataset, feature_set: FeatureSet, n_jobs: usize) -> Self {
        Self {
            table: dataset.to_long_format(),
            features: feature_set.catalog(),
            n_jobs,
        }
    }
}
