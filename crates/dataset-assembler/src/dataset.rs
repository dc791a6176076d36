//! Raw and Segmented Dataset Types

use crate::error::AssembleError;
use ndarray::{Array2, ArrayView1};

/// One table of raw recordings as delivered by the dataset-loading layer
///
/// Index-aligned columns: `series` holds the delimited numeric strings,
/// `groups` the recording/subject identifiers, `labels` the class labels.
#[derive(Debug, Clone, Default)]
pub struct RawDataset {
    pub series: Vec<String>,
    pub groups: Vec<String>,
    pub labels: Vec<f64>,
}

impl RawDataset {
    /// Create a raw dataset, checking column alignment
    pub fn new(
        series: Vec<String>,
        groups: Vec<String>,
        labels: Vec<f64>,
    ) -> Result<Self, AssembleError> {
        if series.len() != groups.len() || series.len() != labels.len() {
            return Err(AssembleError::MisalignedInput {
                series: series.len(),
                groups: groups.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            series,
            groups,
            labels,
        })
    }

    /// Create a raw dataset where every recording shares one class label
    pub fn labeled(series: Vec<String>, groups: Vec<String>, label: f64) -> Result<Self, AssembleError> {
        let labels = vec![label; series.len()];
        Self::new(series, groups, labels)
    }

    /// Stack two tables into one dataset, preserving column alignment
    ///
    /// Typical use: one table per class, labeled 1.0 and 0.0 via
    /// [`RawDataset::labeled`], merged before the group-aware split.
    pub fn concat(mut self, other: RawDataset) -> Self {
        self.series.extend(other.series);
        self.groups.extend(other.groups);
        self.labels.extend(other.labels);
        self
    }

    /// Number of recordings
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset holds no recordings
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Fixed-width windows stacked as rows, with parallel labels and groups
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedDataset {
    windows: Array2<f64>,
    labels: Vec<f64>,
    groups: Vec<String>,
}

impl SegmentedDataset {
    /// Stack accumulated window rows into a dataset
    ///
    /// Rows, labels, and groups must be index-aligned and rows must all
    /// share one length; either violation is an error.
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        labels: Vec<f64>,
        groups: Vec<String>,
    ) -> Result<Self, AssembleError> {
        if rows.len() != labels.len() || rows.len() != groups.len() {
            return Err(AssembleError::MisalignedRows {
                rows: rows.len(),
                groups: groups.len(),
                labels: labels.len(),
            });
        }
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let windows = Array2::from_shape_vec((n_rows, n_cols), flat)?;
        Ok(Self {
            windows,
            labels,
            groups,
        })
    }

    /// Window matrix (one window per row)
    pub fn windows(&self) -> &Array2<f64> {
        &self.windows
    }

    /// One window row
    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.windows.row(index)
    }

    /// Class label per window
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Group identifier per window
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Number of windows
    pub fn n_rows(&self) -> usize {
        self.windows.nrows()
    }

    /// Samples per window
    pub fn window_len(&self) -> usize {
        self.windows.ncols()
    }
}
