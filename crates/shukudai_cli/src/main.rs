//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shukudai_core` wiring against
//!   an in-memory sheet, end to end.
//! - Keep output deterministic for quick local sanity checks.

use shukudai_core::db::open_db_in_memory;
use shukudai_core::{
    HomeworkRepository, HomeworkService, NewHomework, SqliteRowStore, TrackerConfig,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("shukudai_core version={}", shukudai_core::core_version());

    let config = TrackerConfig::new("smoke", ["Sora", "Kokoro"]);
    let conn = open_db_in_memory()?;
    let store = SqliteRowStore::try_new(&conn, &config.columns.header())?;
    let service = HomeworkService::new(HomeworkRepository::try_new(store, config)?);

    let outcome = service.add(&NewHomework {
        child: "Sora".to_string(),
        content: "math drill p.12".to_string(),
        deadline: "2025/08/01".to_string(),
        status: 0,
        memo: String::new(),
    })?;
    println!("smoke add outcome={outcome:?}");

    for summary in service.overview()? {
        println!(
            "child={} total={} percent={} pending={}",
            summary.child,
            summary.total,
            summary.percent,
            summary.pending.len()
        );
    }
    Ok(())
}
