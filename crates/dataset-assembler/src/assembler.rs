//! Dataset Assembler Orchestration

use crate::dataset::{RawDataset, SegmentedDataset};
use crate::error::AssembleError;
use crate::split::GroupShuffleSplit;
use encoder::{parse_series, Encoding, SpikeCountEncoder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use segmenter::Segmenter;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for dataset assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Window length in samples
    pub window: usize,
    /// Step between consecutive window starts
    pub step: usize,
    /// Series delimiter; `None` splits on whitespace
    pub delimiter: Option<char>,
    /// Fraction of groups held out for test
    pub test_fraction: f64,
    /// Seed for group shuffling and subsampling
    pub seed: u64,
    /// Subsample each partition to exactly this many windows
    pub n_samples: Option<usize>,
    /// Output representation
    pub encoding: Encoding,
    /// Bin width for SCE encoding
    pub bin_size: f64,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            window: 200,
            step: 100,
            delimiter: None,
            test_fraction: 0.3,
            seed: 0,
            n_samples: None,
            encoding: Encoding::Isi,
            bin_size: 80.0,
        }
    }
}

/// Train/test partitions produced by assembly
#[derive(Debug, Clone)]
pub struct SplitDataset {
    pub train: SegmentedDataset,
    pub test: SegmentedDataset,
}

/// Assembles raw recordings into split, segmented, optionally re-encoded
/// datasets
pub struct DatasetAssembler {
    config: AssemblerConfig,
    segmenter: Segmenter,
    splitter: GroupShuffleSplit,
    sce_encoder: Option<SpikeCountEncoder>,
}

impl DatasetAssembler {
    /// Create an assembler, validating the whole configuration up front
    pub fn new(config: AssemblerConfig) -> Result<Self, AssembleError> {
        let segmenter = Segmenter::new(config.window, config.step)?;
        let splitter = GroupShuffleSplit::new(config.test_fraction, config.seed)?;
        let sce_encoder = match config.encoding {
            Encoding::Sce => Some(SpikeCountEncoder::new(config.bin_size)?),
            Encoding::Isi => None,
        };
        Ok(Self {
            config,
            segmenter,
            splitter,
            sce_encoder,
        })
    }

    /// Assembler configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Split, segment, subsample, and encode one raw dataset
    ///
    /// The group-aware split happens first, on whole recordings, so no group
    /// identifier appears on both sides. Each partition is then segmented
    /// independently; series too short for a single window are silently
    /// omitted, but a partition that ends up empty is an error.
    pub fn assemble(&self, raw: &RawDataset) -> Result<SplitDataset, AssembleError> {
        if raw.series.len() != raw.groups.len() || raw.series.len() != raw.labels.len() {
            return Err(AssembleError::MisalignedInput {
                series: raw.series.len(),
                groups: raw.groups.len(),
                labels: raw.labels.len(),
            });
        }

        let (train_indices, test_indices) = self.splitter.split(&raw.groups);
        let train = self.build_partition(raw, &train_indices)?;
        let test = self.build_partition(raw, &test_indices)?;
        info!(
            "Assembled dataset: {} train windows, {} test windows (window={}, step={})",
            train.n_rows(),
            test.n_rows(),
            self.config.window,
            self.config.step
        );
        Ok(SplitDataset { train, test })
    }

    fn build_partition(
        &self,
        raw: &RawDataset,
        indices: &[usize],
    ) -> Result<SegmentedDataset, AssembleError> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut labels: Vec<f64> = Vec::new();
        let mut groups: Vec<String> = Vec::new();

        for &index in indices {
            let values = parse_series(&raw.series[index], self.config.delimiter)?;
            let chunks = self.segmenter.segment(&values);
            if chunks.is_empty() {
                debug!(
                    "Series {} (group {}) too short for one window, omitted",
                    index, raw.groups[index]
                );
                continue;
            }
            for chunk in chunks {
                rows.push(chunk);
                labels.push(raw.labels[index]);
                groups.push(raw.groups[index].clone());
            }
        }

        if rows.is_empty() {
            return Err(AssembleError::InsufficientSamples {
                requested: self.config.n_samples.unwrap_or(1),
                available: 0,
            });
        }

        if let Some(n_samples) = self.config.n_samples {
            self.subsample(&mut rows, &mut labels, &mut groups, n_samples)?;
        }

        if let Some(encoder) = &self.sce_encoder {
            rows = encoder.encode_batch(&rows)?;
        }

        SegmentedDataset::from_rows(rows, labels, groups)
    }

    /// Subsample rows, labels, and groups in lockstep, without replacement
    fn subsample(
        &self,
        rows: &mut Vec<Vec<f64>>,
        labels: &mut Vec<f64>,
        groups: &mut Vec<String>,
        n_samples: usize,
    ) -> Result<(), AssembleError> {
        if n_samples > rows.len() {
            return Err(AssembleError::InsufficientSamples {
                requested: n_samples,
                available: rows.len(),
            });
        }
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut picked = rand::seq::index::sample(&mut rng, rows.len(), n_samples).into_vec();
        picked.sort_unstable();

        *rows = picked.iter().map(|&i| rows[i].clone()).collect();
        *labels = picked.iter().map(|&i| labels[i]).collect();
        *groups = picked.iter().map(|&i| groups[i].clone()).collect();
        debug!("Subsampled partition to {} windows", n_samples);
        Ok(())
    }
}
