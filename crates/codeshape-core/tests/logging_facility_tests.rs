#![allow(clippy::unwrap_used, clippy::expect_used)]

use codeshape_core::errors::CodeShapeError;
use codeshape_core::logging_facility::test_capture::init_test_capture;
use codeshape_core::{log_op_end, log_op_error, log_op_start};
use codeshape_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CodeShapeError::SnapshotNotFound {
        path: "old.json".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_MISSING_INPUT".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&"MissingInput".to_string())
    );
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, snapshot_path = "a.json");
    log_op_end!(op_name, duration_ms = 7, class_count = 3);

    let events = capture.events_for_op(op_name);
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
    assert_eq!(
        events[0].fields.get("snapshot_path"),
        Some(&"a.json".to_string())
    );
    assert_eq!(events[1].fields.get("class_count"), Some(&"3".to_string()));
}

#[test]
fn test_core_diff_emits_no_operation_boundaries() {
    let capture = init_test_capture();

    let _ = codeshape_core::diff(&[], &[codeshape_core::Project::new("P", Vec::new())]);

    let boundary_events = capture.count_events(|e| {
        e.event.is_some()
            && e
                .component
                .as_deref()
                .is_some_and(|c| c.starts_with("codeshape_core::diff"))
    });
    assert_eq!(boundary_events, 0, "Core diff must not log op start/end");
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
