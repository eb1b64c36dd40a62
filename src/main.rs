/*
 * File: /main.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 10:30:12 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::env;
use std::process::ExitCode;

use log::{debug, LevelFilter};
use nn_cluster::{load_clusters, ClusterError, Config, ReductionPipeline};

fn setup_logger() {
    // stdout carries the clusters, logs go to stderr; RUST_LOG overrides the level.
    // init only fails when a logger is already installed, which leaves logging working
    let _ = simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init();
}

fn run() -> Result<(), ClusterError> {
    let config = Config::new(env::args())?;
    let store = load_clusters(config.get_filename())?;

    let pipeline = ReductionPipeline::builder()
        .target_clusters(config.get_target_clusters())
        .build()?;
    let result = pipeline.run(store)?;
    debug!("{}", result.summary());

    print!("{}", result.store);
    Ok(())
}

fn main() -> ExitCode {
    setup_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
