#![allow(clippy::unwrap_used, clippy::expect_used)]

use asynclog::log::{LogError, Logger, MemoryLogSink, log_bridge::LogBridge};
use log::LevelFilter;

#[test]
fn log_crate_records_reach_the_sink() {
    let sink = MemoryLogSink::new();
    let logger = Logger::start(sink.clone()).unwrap();
    LogBridge::install(logger.handle(), LevelFilter::Info).unwrap();

    log::debug!("below max level");
    log::info!("connected to {}", "db");
    log::error!("{} retries left {{}}", 0);

    // Only one `log` implementation may exist per process.
    assert!(matches!(
        LogBridge::install(logger.handle(), LevelFilter::Info),
        Err(LogError::BridgeInstall(_))
    ));

    let _ = logger.shutdown();
    assert_eq!(
        sink.lines(),
        vec![
            "[INFOS]:connected to db".to_owned(),
            "[ERROR]:0 retries left {}".to_owned(),
        ]
    );
}
