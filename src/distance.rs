/**
 * File: /src/distance.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 12th October 2026 4:37:12 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use crate::cluster::Cluster;
use crate::object::Object;

/// Euclidean distance between two objects
pub fn point_distance(a: &Object, b: &Object) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Single-linkage distance: the minimum object distance over all pairs.
///
/// Costs O(|c1|·|c2|).
///
/// # Panics
/// If either cluster is empty.
pub fn cluster_distance(c1: &Cluster, c2: &Cluster) -> f32 {
    assert!(!c1.is_empty(), "cluster_distance on an empty cluster");
    assert!(!c2.is_empty(), "cluster_distance on an empty cluster");

    let mut min_distance = f32::INFINITY;
    for a in c1.objects() {
        for b in c2.objects() {
            let distance = point_distance(a, b);
            if distance < min_distance {
                min_distance = distance;
            }
        }
    }
    min_distance
}
