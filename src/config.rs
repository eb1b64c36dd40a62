/**
 * File: /src/config.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 13th October 2026 5:40:26 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use crate::error::ClusterError;
use crate::loader::parse_literal;
use std::path::{Path, PathBuf};

/// Target used when no count argument is given
pub const DEFAULT_TARGET_CLUSTERS: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // input file with `count=N` header
    filename: PathBuf,
    // number of clusters to reduce to
    target_clusters: usize,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- objekty 8
    /// ```
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config, ClusterError> {
        // args:
        // 0: program name
        // 1: input file
        // 2: target cluster count (optional)
        args.next();
        let filename = args
            .next()
            .ok_or_else(|| ClusterError::InvalidArguments("missing input file".to_string()))?;

        let target_clusters = match args.next() {
            None => DEFAULT_TARGET_CLUSTERS,
            Some(text) => match parse_literal(&text) {
                Some(n) if n >= 1 => n as usize,
                _ => {
                    return Err(ClusterError::InvalidArguments(format!(
                        "`{}` is not a positive cluster count",
                        text
                    )))
                }
            },
        };

        if args.next().is_some() {
            return Err(ClusterError::InvalidArguments(
                "expected FILE [N]".to_string(),
            ));
        }

        Ok(Config {
            filename: PathBuf::from(filename),
            target_clusters,
        })
    }

    pub fn get_filename(&self) -> &Path {
        &self.filename
    }

    pub fn get_target_clusters(&self) -> usize {
        self.target_clusters
    }
}
