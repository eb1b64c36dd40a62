/*
 * File: /src/cluster.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 13th October 2026 9:48:30 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Growth failures surface as errors instead of dropping objects
 */

//! Growable, owning collection of objects.

use crate::error::ClusterError;
use crate::object::Object;
use std::fmt;

#[cfg(test)]
use std::cell::Cell;

/// Number of objects added to a cluster's capacity each time it fills up
pub const CLUSTER_CHUNK: usize = 10;

#[cfg(test)]
thread_local! {
    // largest capacity growth may reach on this thread; None is unlimited
    static CAPACITY_LIMIT: Cell<Option<usize>> = Cell::new(None);
}

/// Cap the capacity `append` may grow to on the current thread
#[cfg(test)]
pub(crate) fn set_capacity_limit(limit: Option<usize>) {
    CAPACITY_LIMIT.with(|cell| cell.set(limit));
}

#[cfg(test)]
fn check_capacity_limit(new_capacity: usize) -> Result<(), ClusterError> {
    match CAPACITY_LIMIT.with(|cell| cell.get()) {
        Some(limit) if new_capacity > limit => Err(ClusterError::Allocation(format!(
            "capacity {} exceeds limit {}",
            new_capacity, limit
        ))),
        _ => Ok(()),
    }
}

#[cfg(not(test))]
fn check_capacity_limit(_new_capacity: usize) -> Result<(), ClusterError> {
    Ok(())
}

fn grow_by_chunk(objects: &mut Vec<Object>) -> Result<(), ClusterError> {
    check_capacity_limit(objects.capacity() + CLUSTER_CHUNK)?;
    objects.try_reserve_exact(CLUSTER_CHUNK)?;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cluster {
    objects: Vec<Object>,
}

impl Cluster {
    /// Empty cluster with room for `capacity` objects.
    ///
    /// A capacity of 0 allocates nothing.
    pub fn with_capacity(capacity: usize) -> Result<Self, ClusterError> {
        let mut objects = Vec::new();
        if capacity > 0 {
            objects.try_reserve_exact(capacity)?;
        }
        Ok(Self { objects })
    }

    /// Singleton cluster holding `object`
    pub fn singleton(object: Object) -> Result<Self, ClusterError> {
        let mut cluster = Self::with_capacity(1)?;
        cluster.append(object)?;
        Ok(cluster)
    }

    /// Push `object` at the end, growing by [`CLUSTER_CHUNK`] when full.
    ///
    /// On failure the cluster is left unchanged.
    pub fn append(&mut self, object: Object) -> Result<(), ClusterError> {
        if self.objects.len() == self.objects.capacity() {
            grow_by_chunk(&mut self.objects)?;
        }
        self.objects.push(object);
        Ok(())
    }

    /// Append every object of `other` and sort the result by id.
    /// `other` is left untouched.
    pub fn merge(&mut self, other: &Cluster) -> Result<(), ClusterError> {
        for &object in &other.objects {
            self.append(object)?;
        }
        self.sort_by_id();
        Ok(())
    }

    /// Stable ascending sort by object id
    pub fn sort_by_id(&mut self) {
        self.objects.sort_by_key(|object| object.id);
    }

    /// Release storage; the cluster ends with size and capacity 0
    pub fn clear(&mut self) {
        self.objects = Vec::new();
    }

    pub fn size(&self) -> usize {
        self.objects.len()
    }

    pub fn capacity(&self) -> usize {
        self.objects.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn ids(&self) -> Vec<i32> {
        self.objects.iter().map(|object| object.id).collect()
    }
}

/// # Example
/// ```log
/// 1[0,0] 4[1,1]
/// ```
impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, object) in self.objects.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", object)?;
        }
        Ok(())
    }
}
