//! # Reduction loop
//!
//! Merges the closest pair of clusters until the store reaches the target
//! size. Each step costs O(n²) cluster-pair evaluations, O(n³) overall.

/**
 * File: /src/reduce.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 9:12:40 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Clamp target 0 to a single cluster
 */

use crate::error::ClusterError;
use crate::neighbors::find_nearest_pair;
use crate::store::ClusterStore;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One merge of the reduction, in the order it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeStep {
    /// 1-based step number
    pub step: usize,
    /// Store index of the cluster that received the objects
    pub absorbed_into: usize,
    /// Store index of the cluster that was removed
    pub absorbed: usize,
    /// Single-linkage distance between the two clusters
    pub distance: f32,
    /// Size of the merged cluster
    pub merged_size: usize,
}

/// Merge clusters until `store.len() <= target`, returning the final length.
///
/// A target of 0 is treated as 1. On error the whole store is cleared
/// before the error is returned.
pub fn reduce_to(store: &mut ClusterStore, target: usize) -> Result<usize, ClusterError> {
    reduce_with(store, target, |_| {})
}

/// [`reduce_to`] reporting every merge to `on_merge`
pub fn reduce_with<F>(
    store: &mut ClusterStore,
    target: usize,
    mut on_merge: F,
) -> Result<usize, ClusterError>
where
    F: FnMut(MergeStep),
{
    let target = effective_target(target);
    let mut step = 0;

    while store.len() > target {
        let pair = find_nearest_pair(store);
        step += 1;

        let merged_size = match merge_pair(store, pair.first, pair.second) {
            Ok(size) => size,
            Err(err) => {
                store.clear();
                return Err(err);
            }
        };

        debug!(
            "merge #{}: cluster {} <- cluster {} at distance {:.4}, size {}",
            step, pair.first, pair.second, pair.distance, merged_size
        );
        on_merge(MergeStep {
            step,
            absorbed_into: pair.first,
            absorbed: pair.second,
            distance: pair.distance,
            merged_size,
        });

        store.remove_at(pair.second);
    }

    Ok(store.len())
}

fn effective_target(target: usize) -> usize {
    if target == 0 {
        warn!("target cluster count 0 clamped to 1");
        1
    } else {
        target
    }
}

/// Merge `source` into `target` and return the merged size
fn merge_pair(store: &mut ClusterStore, target: usize, source: usize) -> Result<usize, ClusterError> {
    let (into, from) = store.split_pair(target, source);
    let expected = into.size() + from.size();

    into.merge(from)?;

    if into.size() != expected {
        return Err(ClusterError::Allocation(format!(
            "merged cluster has {} objects, expected {}",
            into.size(),
            expected
        )));
    }
    Ok(expected)
}
