use bagops_logger::{LevelFilter, Logger};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn file_logging_creates_log_file() {
    let tmp = tempdir().expect("temp dir");
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json()
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_some());
    tracing::info!(page = "landing", "rendered");
    drop(logger);

    let written = fs::read_to_string(log_dir.join("integration-file.log")).expect("log file exists");
    assert!(written.lines().any(|line| line.starts_with('{') && line.contains("\"page\":\"landing\"")));
}
