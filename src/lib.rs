/*
 * File: /src/lib.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 10:02:51 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

//! Nearest-neighbor (single-linkage) agglomerative clustering of 2D points.
//!
//! ```
//! use nn_cluster::{reduce_to, ClusterStore, Object};
//!
//! let mut store = ClusterStore::from_objects(vec![
//!     Object::new(1, 0.0, 0.0),
//!     Object::new(2, 10.0, 0.0),
//!     Object::new(3, 1.0, 1.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(reduce_to(&mut store, 2).unwrap(), 2);
//! assert_eq!(store.get(0).unwrap().to_string(), "1[0,0] 3[1,1]");
//! ```

pub mod cluster;
pub mod config;
pub mod distance;
pub mod error;
pub mod loader;
pub mod neighbors;
pub mod object;
pub mod pipeline;
pub mod reduce;
pub mod store;

pub use cluster::{Cluster, CLUSTER_CHUNK};
pub use config::Config;
pub use distance::{cluster_distance, point_distance};
pub use error::ClusterError;
pub use loader::{load_clusters, parse_clusters};
pub use neighbors::{find_nearest_pair, NearestPair};
pub use object::Object;
pub use pipeline::{ReductionConfig, ReductionPipeline, ReductionResult, ReductionStats};
pub use reduce::{reduce_to, reduce_with, MergeStep};
pub use store::ClusterStore;
