use std::time::{Duration, Instant};

use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ClusterError;
use crate::reduce::{reduce_with, MergeStep};
use crate::store::ClusterStore;

/// Reduction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionConfig {
    /// Number of clusters to stop at
    pub target_clusters: usize,
    /// Keep one [`MergeStep`] per merge
    pub record_history: bool,
    /// Collect timing and size statistics
    pub collect_stats: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            target_clusters: 1,
            record_history: true,
            collect_stats: true,
        }
    }
}

/// Statistics for one reduction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionStats {
    pub initial_clusters: usize,
    pub final_clusters: usize,
    pub merges: usize,
    pub total_objects: usize,
    pub duration: Duration,
}

/// Reduced store together with how it got there
#[derive(Debug, Clone)]
pub struct ReductionResult {
    pub store: ClusterStore,
    pub history: Vec<MergeStep>,
    pub stats: Option<ReductionStats>,
}

impl ReductionResult {
    pub fn summary(&self) -> String {
        let mut summary = format!("Reduced to {} clusters", self.store.len());

        if let Some(stats) = &self.stats {
            summary.push_str(&format!(
                "\n{} objects, {} -> {} clusters in {} merges ({:?})",
                stats.total_objects,
                stats.initial_clusters,
                stats.final_clusters,
                stats.merges,
                stats.duration
            ));
        }

        for merge in self.history.iter().take(5) {
            summary.push_str(&format!(
                "\n  #{}: {} <- {} at {:.4}, size {}",
                merge.step, merge.absorbed_into, merge.absorbed, merge.distance, merge.merged_size
            ));
        }

        if self.history.len() > 5 {
            summary.push_str(&format!("\n  ... and {} more", self.history.len() - 5));
        }

        summary
    }
}

/// Nearest-neighbor agglomerative reduction
pub struct ReductionPipeline {
    config: ReductionConfig,
}

impl ReductionPipeline {
    pub fn builder() -> ReductionPipelineBuilder {
        ReductionPipelineBuilder::new()
    }

    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Reduce `store` to the configured size.
    ///
    /// On error the store is released and no partial result is returned.
    pub fn run(&self, mut store: ClusterStore) -> Result<ReductionResult, ClusterError> {
        let start_time = Instant::now();
        let initial_clusters = store.len();
        let total_objects = store.total_objects();
        info!(
            "[{}] Starting reduction of {} clusters to {}",
            timestamp(),
            initial_clusters,
            self.config.target_clusters
        );

        let mut history = Vec::new();
        let mut merges = 0;
        let final_clusters = reduce_with(&mut store, self.config.target_clusters, |step| {
            merges += 1;
            if self.config.record_history {
                history.push(step);
            }
        })?;

        let duration = start_time.elapsed();
        info!(
            "Reduction completed in {:?}, {} merges, {} clusters retained",
            duration, merges, final_clusters
        );

        let stats = if self.config.collect_stats {
            Some(ReductionStats {
                initial_clusters,
                final_clusters,
                merges,
                total_objects,
                duration,
            })
        } else {
            None
        };

        Ok(ReductionResult {
            store,
            history,
            stats,
        })
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Builder for [`ReductionPipeline`]
pub struct ReductionPipelineBuilder {
    config: ReductionConfig,
}

impl ReductionPipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: ReductionConfig::default(),
        }
    }

    pub fn target_clusters(mut self, target: usize) -> Self {
        self.config.target_clusters = target;
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    pub fn collect_stats(mut self, collect: bool) -> Self {
        self.config.collect_stats = collect;
        self
    }

    pub fn config(mut self, config: ReductionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<ReductionPipeline, ClusterError> {
        if self.config.target_clusters == 0 {
            return Err(ClusterError::InvalidArguments(
                "target cluster count must be at least 1".to_string(),
            ));
        }
        Ok(ReductionPipeline {
            config: self.config,
        })
    }
}

impl Default for ReductionPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
