/**
 * File: /src/store.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 13th October 2026 11:05:19 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use crate::cluster::Cluster;
use crate::error::ClusterError;
use crate::object::Object;
use std::fmt;

/// Ordered sequence of disjoint clusters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterStore {
    clusters: Vec<Cluster>,
}

impl ClusterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One singleton cluster per object, in the given order
    pub fn from_objects(objects: impl IntoIterator<Item = Object>) -> Result<Self, ClusterError> {
        let mut store = Self::new();
        for object in objects {
            store.push(Cluster::singleton(object)?)?;
        }
        Ok(store)
    }

    pub fn push(&mut self, cluster: Cluster) -> Result<(), ClusterError> {
        self.clusters.try_reserve(1)?;
        self.clusters.push(cluster);
        Ok(())
    }

    /// Destroy the cluster at `index` and shift the rest down.
    ///
    /// Returns the new length.
    ///
    /// # Panics
    /// If the store is empty or `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> usize {
        assert!(!self.clusters.is_empty(), "remove_at on an empty store");
        assert!(
            index < self.clusters.len(),
            "remove_at index {} out of range for {} clusters",
            index,
            self.clusters.len()
        );

        let mut removed = self.clusters.remove(index);
        removed.clear();
        self.clusters.len()
    }

    /// Destroy every cluster and release the store's own storage
    pub fn clear(&mut self) {
        for cluster in &mut self.clusters {
            cluster.clear();
        }
        self.clusters = Vec::new();
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cluster> {
        self.clusters.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Number of objects across all clusters
    pub fn total_objects(&self) -> usize {
        self.clusters.iter().map(Cluster::size).sum()
    }

    /// Mutable `target` cluster alongside a shared `source` cluster.
    ///
    /// Requires `target < source`.
    pub(crate) fn split_pair(&mut self, target: usize, source: usize) -> (&mut Cluster, &Cluster) {
        assert!(target < source, "split_pair needs target < source");
        let (head, tail) = self.clusters.split_at_mut(source);
        (&mut head[target], &tail[0])
    }
}

impl<'a> IntoIterator for &'a ClusterStore {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

/// # Example
/// ```log
/// Clusters:
/// cluster 0: 1[0,0] 4[1,1]
/// cluster 1: 2[10,0]
/// ```
impl fmt::Display for ClusterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clusters:")?;
        for (i, cluster) in self.clusters.iter().enumerate() {
            writeln!(f, "cluster {}: {}", i, cluster)?;
        }
        Ok(())
    }
}
