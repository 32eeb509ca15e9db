use clip_logging::{clip_debug, clip_info, clip_warn, initialize, LogDestination};
use log::LevelFilter;
use tempfile::TempDir;

// One test per binary: the global logger can only be installed once.
#[test]
fn file_destination_writes_records_at_or_above_level() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("capture.log");

    initialize(LogDestination::File(path.clone()), LevelFilter::Info);
    clip_info!("captured {} embeds", 3);
    clip_warn!("dropping duplicate task {}", "assets/a.png");
    clip_debug!("below the configured level");
    log::logger().flush();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("captured 3 embeds"), "{content}");
    assert!(content.contains("dropping duplicate task assets/a.png"), "{content}");
    assert!(!content.contains("below the configured level"), "{content}");

    // A second install is ignored rather than replacing the file logger.
    let other = temp.path().join("other.log");
    initialize(LogDestination::Both(other.clone()), LevelFilter::Trace);
    clip_info!("still routed to the first file");
    log::logger().flush();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("still routed to the first file"), "{content}");
}
