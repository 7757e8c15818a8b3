use glzig_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_layer_writes_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("glzig-file")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json()
        .init()?;
    assert!(logger.writes_file());

    tracing::info!(commands = 3, "resolved selection");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = log_dir.join("glzig-file.log");
    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("resolved selection"));
    assert!(contents.trim_start().starts_with('{'), "file layer should emit JSON lines");
    Ok(())
}
