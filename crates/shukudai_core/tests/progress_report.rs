use shukudai_core::{
    pending, percent_complete, ChildProgress, HomeworkRecord, HomeworkRepository, HomeworkService,
    MemoryRowStore, NewHomework, Status, TrackerConfig,
};

fn record(id: u64, child: &str, status: i64) -> HomeworkRecord {
    HomeworkRecord {
        id,
        child: child.to_string(),
        content: format!("homework #{id}"),
        deadline: "2025/08/01".to_string(),
        status: Status::new(status).unwrap(),
        memo: String::new(),
    }
}

#[test]
fn percent_complete_of_empty_snapshot_is_zero() {
    assert_eq!(percent_complete(&[]), 0);
}

#[test]
fn percent_complete_matches_the_worked_example() {
    // statuses 10 + 5 + 0 over 3 records: floor(15 / 30 * 100) = 50.
    let records = [
        record(1, "Sora", 10),
        record(2, "Sora", 5),
        record(3, "Sora", 0),
    ];
    assert_eq!(percent_complete(&records), 50);
}

#[test]
fn percent_complete_floors_the_percentage() {
    // 1 / 30 * 100 = 3.33..; floor, never round.
    let records = [
        record(1, "Sora", 1),
        record(2, "Sora", 0),
        record(3, "Sora", 0),
    ];
    assert_eq!(percent_complete(&records), 3);
}

#[test]
fn percent_complete_is_100_only_when_everything_is_done() {
    let all_done = [record(1, "Sora", 10), record(2, "Sora", 10)];
    assert_eq!(percent_complete(&all_done), 100);

    let nearly = [record(1, "Sora", 10), record(2, "Sora", 9)];
    assert_eq!(percent_complete(&nearly), 95);
}

#[test]
fn pending_keeps_input_order_and_drops_done_records() {
    let records = [
        record(1, "Sora", 10),
        record(2, "Sora", 5),
        record(3, "Sora", 0),
    ];
    let still_open = pending(&records);
    assert_eq!(
        still_open.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
}

#[test]
fn child_progress_summarizes_one_snapshot() {
    let records = [
        record(1, "Kokoro", 10),
        record(2, "Kokoro", 5),
        record(3, "Kokoro", 0),
    ];
    let progress = ChildProgress::from_records("Kokoro", &records);

    assert_eq!(progress.child, "Kokoro");
    assert_eq!(progress.total, 3);
    assert_eq!(progress.percent, 50);
    assert_eq!(
        progress.pending.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
}

#[test]
fn child_progress_serializes_for_ui_hosts() {
    let progress = ChildProgress::from_records("Sora", &[record(1, "Sora", 10)]);
    let json = serde_json::to_value(&progress).unwrap();

    assert_eq!(json["child"], "Sora");
    assert_eq!(json["total"], 1);
    assert_eq!(json["percent"], 100);
    assert!(json["pending"].as_array().unwrap().is_empty());
}

fn homework(child: &str, content: &str, status: i64) -> NewHomework {
    NewHomework {
        child: child.to_string(),
        content: content.to_string(),
        deadline: "2025/08/01".to_string(),
        status,
        memo: String::new(),
    }
}

#[test]
fn service_overview_reports_one_summary_per_roster_child() {
    let config = TrackerConfig::new("homework2025", ["Sora", "Kokoro"]);
    let store = MemoryRowStore::new(config.columns.header());
    let repo = HomeworkRepository::try_new(&store, config).unwrap();
    let service = HomeworkService::new(repo);

    service.add(&homework("Sora", "math", 10)).unwrap();
    service.add(&homework("Sora", "kanji", 0)).unwrap();
    service.add(&homework("Kokoro", "reading", 5)).unwrap();

    let overview = service.overview().unwrap();
    assert_eq!(overview.len(), 2);

    assert_eq!(overview[0].child, "Sora");
    assert_eq!(overview[0].total, 2);
    assert_eq!(overview[0].percent, 50);
    assert_eq!(overview[0].pending.len(), 1);
    assert_eq!(overview[0].pending[0].content, "kanji");

    assert_eq!(overview[1].child, "Kokoro");
    assert_eq!(overview[1].total, 1);
    assert_eq!(overview[1].percent, 50);
}

#[test]
fn service_progress_for_unknown_child_is_an_empty_summary() {
    let config = TrackerConfig::new("homework2025", ["Sora", "Kokoro"]);
    let store = MemoryRowStore::new(config.columns.header());
    let service = HomeworkService::new(HomeworkRepository::try_new(&store, config).unwrap());

    let progress = service.progress_for_child("Nobody").unwrap();
    assert_eq!(progress.total, 0);
    assert_eq!(progress.percent, 0);
    assert!(progress.pending.is_empty());
}

#[test]
fn service_progress_reflects_status_updates() {
    let config = TrackerConfig::new("homework2025", ["Sora", "Kokoro"]);
    let store = MemoryRowStore::new(config.columns.header());
    let service = HomeworkService::new(HomeworkRepository::try_new(&store, config).unwrap());

    service.add(&homework("Sora", "math", 0)).unwrap();
    assert_eq!(service.progress_for_child("Sora").unwrap().percent, 0);

    service.update_status(1, 10).unwrap();
    let progress = service.progress_for_child("Sora").unwrap();
    assert_eq!(progress.percent, 100);
    assert!(progress.pending.is_empty());
}
