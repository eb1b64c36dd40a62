/**
 * File: /src/neighbors.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 13th October 2026 2:15:51 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use crate::distance::cluster_distance;
use crate::store::ClusterStore;
use serde::{Deserialize, Serialize};

/// Indices of the two closest clusters in a store, `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPair {
    pub first: usize,
    pub second: usize,
    pub distance: f32,
}

/// Scan every pair `(i, j)`, `i < j`, and return the closest one.
///
/// A pair replaces the current best when its distance is `<=` the best so
/// far, so among exact ties the last pair in scan order wins.
///
/// # Panics
/// If the store holds fewer than two clusters.
pub fn find_nearest_pair(store: &ClusterStore) -> NearestPair {
    assert!(
        store.len() >= 2,
        "find_nearest_pair needs at least 2 clusters, got {}",
        store.len()
    );

    let clusters = store.clusters();
    let mut best = NearestPair {
        first: 0,
        second: 1,
        distance: cluster_distance(&clusters[0], &clusters[1]),
    };

    for i in 0..clusters.len() {
        for j in (i + 1)..clusters.len() {
            let distance = cluster_distance(&clusters[i], &clusters[j]);
            if distance <= best.distance {
                best = NearestPair {
                    first: i,
                    second: j,
                    distance,
                };
            }
        }
    }

    best
}
