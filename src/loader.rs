/*
 * File: /src/loader.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 9:58:03 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

//! Reads objects from a text file into a store of singleton clusters.
//!
//! ```text
//! count=3
//! 40 86 663
//! 43 747 938
//! 47 285 973
//! ```

use crate::cluster::Cluster;
use crate::error::ClusterError;
use crate::object::Object;
use crate::store::ClusterStore;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Inclusive range accepted for both coordinates
pub const COORDINATE_RANGE: (i32, i32) = (0, 1000);

pub fn load_clusters(path: impl AsRef<Path>) -> Result<ClusterStore, ClusterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ClusterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading objects from {}", path.display());

    parse_clusters(BufReader::new(file)).map_err(|err| match err {
        ClusterError::Io { source, .. } => ClusterError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse `count=N` followed by up to N `id x y` lines.
///
/// Lines past the N-th are ignored. Fewer than N lines keeps what was read;
/// reading nothing at all is [`ClusterError::EmptyInput`].
pub fn parse_clusters(reader: impl BufRead) -> Result<ClusterStore, ClusterError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(read_error)?,
        None => return Err(ClusterError::EmptyInput),
    };
    let count = parse_count(header.trim_end_matches('\r'))?;

    let mut store = ClusterStore::new();
    for (i, line) in lines.take(count).enumerate() {
        let line = line.map_err(read_error)?;
        let object = parse_object(line.trim_end_matches('\r'), i + 2)?;
        store.push(Cluster::singleton(object)?)?;
    }

    if store.is_empty() {
        return Err(ClusterError::EmptyInput);
    }
    if store.len() < count {
        warn!("expected {} objects but input ended after {}", count, store.len());
    }
    Ok(store)
}

fn read_error(source: std::io::Error) -> ClusterError {
    ClusterError::Io {
        path: Default::default(),
        source,
    }
}

fn parse_count(line: &str) -> Result<usize, ClusterError> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| ClusterError::format(1, "expected `count=<N>`"))?;
    if key != "count" {
        return Err(ClusterError::format(1, format!("unknown key `{}`", key)));
    }
    let value = value.trim();
    let count = parse_literal(value).ok_or_else(|| {
        ClusterError::format(1, format!("`{}` is not a non-negative integer", value))
    })?;
    Ok(count as usize)
}

fn parse_object(line: &str, line_no: usize) -> Result<Object, ClusterError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ClusterError::format(
            line_no,
            format!("expected `<id> <x> <y>`, got {} fields", fields.len()),
        ));
    }

    let field = |name: &str, text: &str| {
        parse_literal(text).ok_or_else(|| {
            ClusterError::format(line_no, format!("{} `{}` is not a non-negative integer", name, text))
        })
    };
    let id = field("id", fields[0])?;
    let x = field("x", fields[1])?;
    let y = field("y", fields[2])?;

    let (low, high) = COORDINATE_RANGE;
    for (name, value) in [("x", x), ("y", y)] {
        if value < low || value > high {
            return Err(ClusterError::format(
                line_no,
                format!("{} = {} outside [{}, {}]", name, value, low, high),
            ));
        }
    }

    Ok(Object::new(id, x as f32, y as f32))
}

/// Clean integer literal: ASCII digits only, no sign, no leading zeros
/// except `0` itself, fits `i32`
pub fn parse_literal(text: &str) -> Option<i32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse::<i32>().ok()
}
